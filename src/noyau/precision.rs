// src/noyau/precision.rs

//! Précision demandée + précision de travail.
//!
//! Contrats :
//! - `PrecisionRequest` : n ≥ 0 chiffres après la virgule, validé AVANT tout moteur.
//! - `PrecisionContext` : n + chiffres de garde, une valeur par appel
//!   (jamais de réglage global partagé entre appels).

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use super::erreur::PiError;

/// 10^n en entier exact.
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Nombre de chiffres décimaux de `v` (1 pour 0).
pub fn nb_chiffres(v: u64) -> u32 {
    v.checked_ilog10().map_or(1, |l| l + 1)
}

/* ------------------------ PrecisionRequest ------------------------ */

/// Nombre de chiffres voulus après la virgule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrecisionRequest(u32);

impl PrecisionRequest {
    /// Plus grande précision représentable (compteur de chiffres en u32).
    pub const MAX: u32 = u32::MAX - 64;

    pub fn new(digits: u32) -> Result<Self, PiError> {
        if digits > Self::MAX {
            return Err(PiError::ResourceExhausted {
                demande: u64::from(digits),
                limite: u64::from(Self::MAX),
            });
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PrecisionRequest {
    type Error = PiError;

    fn try_from(n: i64) -> Result<Self, PiError> {
        if n < 0 {
            return Err(PiError::InvalidPrecisionInput(format!("{n} est négatif")));
        }
        let digits = u32::try_from(n).map_err(|_| PiError::ResourceExhausted {
            demande: n.unsigned_abs(),
            limite: u64::from(Self::MAX),
        })?;
        Self::new(digits)
    }
}

impl FromStr for PrecisionRequest {
    type Err = PiError;

    /// Lecture d’une saisie brute : espaces tolérés autour, rien d’autre.
    fn from_str(s: &str) -> Result<Self, PiError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PiError::InvalidPrecisionInput("entrée vide".into()));
        }
        let chiffres = s.strip_prefix('+').unwrap_or(s);
        match s.parse::<i64>() {
            Ok(n) => Self::try_from(n),
            // uniquement des chiffres mais hors i64 : c’est un entier, juste trop grand
            Err(_) if !chiffres.is_empty() && chiffres.bytes().all(|c| c.is_ascii_digit()) => {
                Err(PiError::ResourceExhausted {
                    demande: u64::MAX,
                    limite: u64::from(Self::MAX),
                })
            }
            Err(_) => Err(PiError::InvalidPrecisionInput(format!(
                "{s:?} n’est pas un entier"
            ))),
        }
    }
}

impl fmt::Display for PrecisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* ------------------------ PrecisionContext ------------------------ */

/// Précision de travail d’UN appel : n chiffres demandés + chiffres de garde.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecisionContext {
    demande: PrecisionRequest,
    garde: u32,
}

impl PrecisionContext {
    pub fn new(demande: PrecisionRequest, garde: u32) -> Self {
        Self { demande, garde }
    }

    /// Garde pour une somme de `termes` divisions arrondies :
    /// base + un chiffre par décade de termes (l’erreur cumulée croît en n·ulp).
    pub fn pour_serie(demande: PrecisionRequest, base: u32, termes: u64) -> Self {
        Self::new(demande, base + nb_chiffres(termes))
    }

    pub fn demande(&self) -> PrecisionRequest {
        self.demande
    }

    pub fn digits(&self) -> u32 {
        self.demande.0
    }

    pub fn garde(&self) -> u32 {
        self.garde
    }

    /// Chiffres après la virgule pendant le calcul.
    pub fn working(&self) -> u32 {
        self.demande.0 + self.garde
    }

    /// 10^working : le « 1 » des entiers scalés.
    pub fn unity(&self) -> BigInt {
        pow10(self.working())
    }
}
