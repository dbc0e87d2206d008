//! π à n chiffres : quatre moteurs indépendants (BBP, Chudnovsky direct,
//! Chudnovsky par scission binaire, Machin) derrière un même contrat.
//!
//! ```
//! use pi_qpur::Algorithme;
//!
//! let pi = Algorithme::Scission.moteur().compute(10).unwrap();
//! assert_eq!(pi.to_string(), "3.1415926536");
//! ```

pub mod noyau;

pub use noyau::{Algorithme, PiAlgorithm, PiError, PiEstimate, PrecisionRequest};
