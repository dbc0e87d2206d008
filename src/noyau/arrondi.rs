// src/noyau/arrondi.rs

//! Dernière étape commune aux quatre moteurs : arrondi demi-pair à n chiffres
//! puis rendu en virgule fixe (exactement n chiffres après la virgule).

use std::fmt;

use super::decimal::Decimal;
use super::precision::PrecisionRequest;

/// Estimation finale de π : exactement `digits` chiffres après la virgule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiEstimate {
    valeur: Decimal,
}

impl PiEstimate {
    pub fn valeur(&self) -> &Decimal {
        &self.valeur
    }

    pub fn digits(&self) -> u32 {
        self.valeur.echelle()
    }

    /// Texte en virgule fixe (zéros conservés ; `3` seul pour n = 0).
    pub fn texte(&self) -> String {
        self.valeur.to_string()
    }
}

impl fmt::Display for PiEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.valeur, f)
    }
}

/// Arrondit une valeur de travail (garde comprise) aux n chiffres demandés.
pub fn arrondir(brut: &Decimal, demande: PrecisionRequest) -> PiEstimate {
    PiEstimate {
        valeur: brut.arrondi(demande.digits()),
    }
}
