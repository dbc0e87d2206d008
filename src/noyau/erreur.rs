// src/noyau/erreur.rs

//! Erreurs du noyau.
//!
//! Toutes les erreurs sont détectées AVANT le calcul : un moteur qui démarre
//! va jusqu’au bout (ou épuise la machine), il n’y a pas de résultat partiel.

/// Erreur commune aux quatre moteurs (et au pilote en mode comparaison).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// Entrée vide, non entière ou négative.
    #[error("précision invalide ({0}) : entrez un entier positif n pour la précision")]
    InvalidPrecisionInput(String),

    /// Précision demandée hors des bornes acceptées.
    #[error("précision trop grande : {demande} chiffres demandés (max {limite})")]
    ResourceExhausted { demande: u64, limite: u64 },

    /// Deux moteurs ne donnent pas la même chaîne.
    #[error("désaccord entre {gauche} et {droite} à {digits} chiffres")]
    Mismatch {
        gauche: &'static str,
        droite: &'static str,
        digits: u32,
    },
}
