// src/main.rs
//
// pi_qpur — point d’entrée (ligne de commande)
// -------------------------------------------
// But:
// - Lire la demande (clap), installer les traces (RUST_LOG, défaut "warn")
// - Déléguer au pilote (app.rs), imprimer via la vue
// - Code de sortie non nul sur toute erreur (saisie invalide, garde-fou, désaccord)
//
// Exemples:
//   pi_qpur 100
//   pi_qpur --algo machin 5000
//   RUST_LOG=pi_qpur=debug pi_qpur --algo tous 300

mod app;

use anyhow::{Context, Result};
use clap::Parser;

use app::etat::{Choix, Options};
use app::vue::rendu;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();

    let resultats = app::executer(&options)
        .with_context(|| format!("calcul de π à {:?} chiffres", options.digits))?;

    let avec_nom = options.algo == Choix::Tous;
    for r in &resultats {
        println!("{}", rendu(r, options.quiet, avec_nom));
    }

    Ok(())
}
