// src/noyau/bbp.rs

//! Bailey–Borwein–Plouffe :
//! π = Σ 1/16^k · (4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6))
//!
//! Chaque sous-terme est UNE division arrondie à la précision de travail.
//! Coût au moins quadratique en n (n termes × divisions de taille n).

use num_bigint::BigInt;
use tracing::debug;

use super::algo::PiAlgorithm;
use super::arrondi::{arrondir, PiEstimate};
use super::decimal::Decimal;
use super::precision::{PrecisionContext, PrecisionRequest};

/// Garde de base (avant le chiffre par décade de termes).
const GARDE: u32 = 2;

/// (numérateur, décalage) des quatre sous-termes : c/(8k+j).
const SOUS_TERMES: [(i64, u64); 4] = [(4, 1), (-2, 4), (-1, 5), (-1, 6)];

#[derive(Clone, Copy, Debug, Default)]
pub struct Bbp;

impl PiAlgorithm for Bbp {
    fn nom(&self) -> &'static str {
        "bbp"
    }

    fn calculer(&self, demande: PrecisionRequest) -> PiEstimate {
        // au moins un terme : n = 0 doit encore donner 3
        let termes = u64::from(demande.digits().max(1));
        let ctx = PrecisionContext::pour_serie(demande, GARDE, termes * 4);
        debug!(termes, working = ctx.working(), "bbp");

        arrondir(&serie_bbp(termes, &ctx), demande)
    }
}

/// Somme des `termes` premiers termes, k croissant.
fn serie_bbp(termes: u64, ctx: &PrecisionContext) -> Decimal {
    let working = ctx.working();
    let mut somme = Decimal::zero(working);

    // 16^k
    let mut puissance = BigInt::from(1u32);

    for k in 0..termes {
        for (c, j) in SOUS_TERMES {
            let den = &puissance * (8 * k + j);
            somme += &Decimal::from_ratio(&BigInt::from(c), &den, working);
        }
        puissance *= 16u32;
    }

    somme
}
