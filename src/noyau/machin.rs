// src/noyau/machin.rs

//! Machin : π = 16·atan(1/5) − 4·atan(1/239), en virgule fixe.
//!
//! Tout le calcul reste entier (scalé par `unity`) ; les chiffres de garde
//! absorbent les troncatures des divisions entières successives.

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

use super::algo::PiAlgorithm;
use super::arrondi::{arrondir, PiEstimate};
use super::decimal::Decimal;
use super::precision::{pow10, PrecisionContext, PrecisionRequest};

/// Chiffres de garde internes (constante, non dérivée de n).
pub const GARDE_MACHIN: u32 = 10;

/// Marge de format : chiffres gardés après la division par 10^GARDE_MACHIN.
const MARGE_FORMAT: u32 = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct Machin;

impl PiAlgorithm for Machin {
    fn nom(&self) -> &'static str {
        "machin"
    }

    fn calculer(&self, demande: PrecisionRequest) -> PiEstimate {
        // unity = 10^(n + 3 + 10)
        let ctx = PrecisionContext::new(demande, MARGE_FORMAT + GARDE_MACHIN);
        debug!(working = ctx.working(), "machin");

        let pi = pi_scaled(&ctx.unity());

        // on retire la garde (troncature), il reste n + 3 chiffres après le 3
        let echelle = demande.digits() + MARGE_FORMAT;
        let lecture = Decimal::from_scaled(pi / pow10(GARDE_MACHIN), echelle);
        arrondir(&lecture, demande)
    }
}

/// atan(1/x) · unity par la série alternée
/// 1/x − 1/(3x³) + 1/(5x⁵) − …
///
/// Chaque terme : division entière par x² puis par l’indice impair ; arrêt au
/// premier terme nul (pas de borne sur le nombre de termes).
pub fn arctan_inv_scaled(x: u32, unity: &BigInt) -> BigInt {
    let x2 = BigInt::from(x) * x;

    let mut puissance = unity / x;
    let mut somme = puissance.clone();

    let mut n: u64 = 3;
    let mut positif = false;

    loop {
        puissance /= &x2;
        let terme = &puissance / n;
        if terme.is_zero() {
            break;
        }

        if positif {
            somme += &terme;
        } else {
            somme -= &terme;
        }

        positif = !positif;
        n += 2;
    }

    somme
}

/// π · unity = 4·(4·atan(1/5) − atan(1/239)).
fn pi_scaled(unity: &BigInt) -> BigInt {
    let a = arctan_inv_scaled(5, unity);
    let b = arctan_inv_scaled(239, unity);
    (a * 4u32 - b) * 4u32
}
