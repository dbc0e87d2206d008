//! Noyau numérique π
//!
//! Organisation interne :
//! - precision.rs : n demandé (validé) + précision de travail par appel
//! - decimal.rs   : décimal à virgule fixe (BigInt scalé), arrondi demi-pair
//! - arrondi.rs   : arrondi final à n chiffres + rendu texte (PiEstimate)
//! - algo.rs      : contrat commun PiAlgorithm + sélection Algorithme
//! - bbp.rs       : Bailey–Borwein–Plouffe
//! - chudnovsky.rs: Chudnovsky direct (factorielles)
//! - scission.rs  : Chudnovsky par scission binaire (P, Q, R exacts)
//! - machin.rs    : Machin en virgule fixe entière
//! - erreur.rs    : PiError

pub mod algo;
pub mod arrondi;
pub mod bbp;
pub mod chudnovsky;
pub mod decimal;
pub mod erreur;
pub mod machin;
pub mod precision;
pub mod scission;

#[cfg(test)]
mod tests_pi;

// API publique minimale
pub use algo::{Algorithme, PiAlgorithm};
pub use arrondi::PiEstimate;
pub use erreur::PiError;
pub use precision::{PrecisionContext, PrecisionRequest};
