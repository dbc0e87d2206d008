// src/noyau/chudnovsky.rs

//! Chudnovsky, sommation directe (variante naïve, référence pour la scission) :
//!
//! 1/π = 12 Σ (−1)^k (6k)! (545140134k + 13591409) / ((3k)! (k!)³ 640320^(3k+3/2))
//!
//! Factorielles calculées telles quelles : explosif au-delà de quelques
//! centaines de chiffres, c’est voulu (c’est la version “lisible”).

use num_bigint::BigInt;
use num_traits::One;
use tracing::debug;

use super::algo::PiAlgorithm;
use super::arrondi::{arrondir, PiEstimate};
use super::decimal::Decimal;
use super::precision::{PrecisionContext, PrecisionRequest};

/// Garde de base : 1/(12 Σ) amplifie l’erreur de Σ d’environ 120 (~2 chiffres).
const GARDE: u32 = 4;

pub const A: u64 = 13_591_409;
pub const B: u64 = 545_140_134;
pub const C: u64 = 640_320;

#[derive(Clone, Copy, Debug, Default)]
pub struct ChudnovskyDirect;

impl PiAlgorithm for ChudnovskyDirect {
    fn nom(&self) -> &'static str {
        "chudnovsky"
    }

    fn calculer(&self, demande: PrecisionRequest) -> PiEstimate {
        let termes = u64::from(demande.digits().max(1));
        let ctx = PrecisionContext::pour_serie(demande, GARDE, termes);
        debug!(termes, working = ctx.working(), "chudnovsky direct");

        let somme = serie_chudnovsky(termes, &ctx);
        let douze_s = somme.mul_int(&BigInt::from(12u32));
        let pi = Decimal::from_int(1u32, ctx.working()).div(&douze_s);

        arrondir(&pi, demande)
    }
}

/// n! (produit direct, 0! = 1).
pub fn factorielle(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, i| acc * i)
}

/// Σ des `termes` premiers a_k, chacun par une seule division arrondie.
fn serie_chudnovsky(termes: u64, ctx: &PrecisionContext) -> Decimal {
    let working = ctx.working();
    let mut somme = Decimal::zero(working);

    let racine_c = Decimal::from_int(C, working).sqrt();
    let c3 = BigInt::from(C).pow(3);
    // 640320^(3k+1)
    let mut c_puissance = BigInt::from(C);

    for k in 0..termes {
        let mut num = factorielle(6 * k) * (B * k + A);
        if k % 2 == 1 {
            num = -num;
        }
        let den = factorielle(3 * k) * factorielle(k).pow(3);

        // 640320^(3k + 1.5) = 640320^(3k+1) · √640320
        let puissance = racine_c.mul_int(&(&c_puissance * &den));

        somme += &Decimal::from_int(num, working).div(&puissance);
        c_puissance *= &c3;
    }

    somme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(n: u32) -> PrecisionRequest {
        PrecisionRequest::new(n).unwrap()
    }

    #[test]
    fn factorielles() {
        assert_eq!(factorielle(0), BigInt::one());
        assert_eq!(factorielle(1), BigInt::one());
        assert_eq!(factorielle(10), BigInt::from(3_628_800u32));
        assert_eq!(factorielle(20), BigInt::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn un_terme_suffit_pour_13_chiffres() {
        // a_0 seul donne déjà 3.14159265358973...
        let ctx = PrecisionContext::new(req(20), 0);
        let s = serie_chudnovsky(1, &ctx).mul_int(&BigInt::from(12u32));
        let pi = Decimal::from_int(1u32, 20).div(&s);
        assert!(pi.to_string().starts_with("3.1415926535897"), "{pi}");
    }

    #[test]
    fn petites_precisions() {
        assert_eq!(ChudnovskyDirect.calculer(req(0)).texte(), "3");
        assert_eq!(ChudnovskyDirect.calculer(req(1)).texte(), "3.1");
        assert_eq!(ChudnovskyDirect.calculer(req(20)).texte(), "3.14159265358979323846");
    }
}
