// src/noyau/algo.rs

//! Contrat commun des moteurs : `compute(n) -> PiEstimate`.
//!
//! Les moteurs sont des structures vides (aucun état) : deux appels ne
//! partagent rien, la précision voyage avec l’appel.

use std::fmt;
use std::str::FromStr;

use super::arrondi::PiEstimate;
use super::bbp::Bbp;
use super::chudnovsky::ChudnovskyDirect;
use super::erreur::PiError;
use super::machin::Machin;
use super::precision::PrecisionRequest;
use super::scission::ChudnovskyScission;

/// Un algorithme de calcul de π.
pub trait PiAlgorithm: Send + Sync {
    /// Nom court (affichage, traces).
    fn nom(&self) -> &'static str;

    /// Calcul sur une précision déjà validée.
    fn calculer(&self, demande: PrecisionRequest) -> PiEstimate;

    /// Point d’entrée “brut” : valide n puis calcule.
    fn compute(&self, digits: i64) -> Result<PiEstimate, PiError> {
        let demande = PrecisionRequest::try_from(digits)?;
        Ok(self.calculer(demande))
    }
}

/* ------------------------ Sélection (pilotes, tests) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithme {
    Bbp,
    Chudnovsky,
    Scission,
    Machin,
}

impl Algorithme {
    pub const TOUS: [Algorithme; 4] = [
        Algorithme::Bbp,
        Algorithme::Chudnovsky,
        Algorithme::Scission,
        Algorithme::Machin,
    ];

    pub fn moteur(self) -> &'static dyn PiAlgorithm {
        match self {
            Algorithme::Bbp => &Bbp,
            Algorithme::Chudnovsky => &ChudnovskyDirect,
            Algorithme::Scission => &ChudnovskyScission,
            Algorithme::Machin => &Machin,
        }
    }

    pub fn nom(self) -> &'static str {
        self.moteur().nom()
    }
}

impl FromStr for Algorithme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bbp" => Ok(Algorithme::Bbp),
            "chudnovsky" | "direct" => Ok(Algorithme::Chudnovsky),
            "scission" | "binary-splitting" => Ok(Algorithme::Scission),
            "machin" => Ok(Algorithme::Machin),
            autre => Err(format!("algorithme inconnu : {autre:?}")),
        }
    }
}

impl fmt::Display for Algorithme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}
