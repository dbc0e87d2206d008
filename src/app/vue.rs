// src/app/vue.rs
//
// Vue (texte, terminal)
// ---------------------
// Objectifs :
// - Même rendu pour chaque moteur : "π = <valeur>", ligne vide, temps de calcul
// - Temps en secondes (4 décimales) à partir d’une seconde, sinon en ms
// - Mode silencieux : la valeur seule (copiable telle quelle)

use std::time::Duration;

use pi_qpur::{Algorithme, PiEstimate};

/// Un calcul terminé, prêt à afficher.
#[derive(Clone, Debug)]
pub struct Resultat {
    pub algo: Algorithme,
    pub estimation: PiEstimate,
    pub duree: Duration,
}

/// "1.2345 s" si ≥ 1 s, sinon "12.3456 ms".
pub fn format_duree(duree: Duration) -> String {
    let s = duree.as_secs_f64();
    if s >= 1.0 {
        format!("{s:.4} s")
    } else {
        format!("{:.4} ms", s * 1000.0)
    }
}

/// Bloc de sortie d’un résultat.
pub fn rendu(r: &Resultat, quiet: bool, avec_nom: bool) -> String {
    if quiet {
        return r.estimation.texte();
    }

    let entete = if avec_nom {
        format!("[{}] ", r.algo)
    } else {
        String::new()
    };

    format!(
        "{entete}π = {}\n\n{entete}Temps de calcul = {}",
        r.estimation,
        format_duree(r.duree)
    )
}
