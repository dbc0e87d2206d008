// src/app.rs
//
// pi_qpur — module App (racine)
// -----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Enchaîner : lecture de la précision -> moteur(s) -> mesure du temps
// - Mode "tous" : les quatre moteurs doivent rendre la même chaîne
//
// Important:
// - La validation de la saisie est celle du noyau (PrecisionRequest::from_str).
// - Aucun affichage ici : main.rs imprime via vue.rs.

pub mod etat;
pub mod vue;

use std::time::Instant;

use pi_qpur::{Algorithme, PiError, PrecisionRequest};
use tracing::info;

use etat::Options;
use vue::Resultat;

/// Saisie brute -> précision validée, bornée par le garde-fou.
pub fn lire_precision(brut: &str, max_digits: u32) -> Result<PrecisionRequest, PiError> {
    let demande: PrecisionRequest = brut.parse()?;
    if demande.digits() > max_digits {
        return Err(PiError::ResourceExhausted {
            demande: u64::from(demande.digits()),
            limite: u64::from(max_digits),
        });
    }
    Ok(demande)
}

/// Un moteur, chronométré.
fn mesurer(algo: Algorithme, demande: PrecisionRequest) -> Resultat {
    let start = Instant::now();
    let estimation = algo.moteur().calculer(demande);
    let duree = start.elapsed();

    info!(algo = algo.nom(), digits = demande.digits(), ?duree, "calcul terminé");
    Resultat {
        algo,
        estimation,
        duree,
    }
}

/// Tous les résultats doivent coïncider avec le premier.
fn verifier_accord(resultats: &[Resultat], digits: u32) -> Result<(), PiError> {
    let Some((premier, reste)) = resultats.split_first() else {
        return Ok(());
    };

    match reste.iter().find(|r| r.estimation != premier.estimation) {
        Some(autre) => Err(PiError::Mismatch {
            gauche: premier.algo.nom(),
            droite: autre.algo.nom(),
            digits,
        }),
        None => Ok(()),
    }
}

/// Pipeline complet du pilote.
pub fn executer(options: &Options) -> Result<Vec<Resultat>, PiError> {
    let demande = lire_precision(&options.digits, options.max_digits)?;
    info!(digits = demande.digits(), algo = %options.algo, "précision demandée");

    let resultats: Vec<Resultat> = options
        .algo
        .algorithmes()
        .into_iter()
        .map(|algo| mesurer(algo, demande))
        .collect();

    verifier_accord(&resultats, demande.digits())?;
    Ok(resultats)
}
