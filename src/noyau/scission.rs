// src/noyau/scission.rs

//! Chudnovsky par scission binaire (binary splitting).
//!
//! Sur [a, b) on réduit produit + somme du terme général à trois entiers
//! EXACTS (P, Q, R) :
//! - feuille k :  P = −(6k−5)(2k−1)(6k−1),  Q = 10939058860032000·k³,
//!   R = P·(545140134k + 13591409)
//! - fusion   :  P = Pam·Pmb,  Q = Qam·Qmb,  R = Qmb·Ram + Pam·Rmb
//!
//! Aucune perte pendant la scission : la seule erreur vient de la division
//! finale π ≈ 426880·√10005·Q / (13591409·Q + R).
//!
//! La récursion est remplacée par une pile explicite (tâches + résultats) :
//! pas de croissance de la pile d’appels, quel que soit n.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use super::algo::PiAlgorithm;
use super::arrondi::{arrondir, PiEstimate};
use super::chudnovsky::{A, B};
use super::decimal::Decimal;
use super::precision::{PrecisionContext, PrecisionRequest};

/// Garde : une racine, un produit, une division (erreur bornée, indépendante de n).
const GARDE: u32 = 3;

/// 640320³ / 24
pub const C3_SUR_24: u64 = 10_939_058_860_032_000;

/* ------------------------ Triplet (P, Q, R) ------------------------ */

/// Résultat exact de la scission sur un intervalle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triplet {
    pub p: BigInt,
    pub q: BigInt,
    pub r: BigInt,
}

impl Triplet {
    /// Élément neutre de la fusion (intervalle vide).
    pub fn neutre() -> Self {
        Self {
            p: BigInt::one(),
            q: BigInt::one(),
            r: BigInt::zero(),
        }
    }

    /// Feuille : intervalle [k, k+1), k ≥ 1.
    pub fn feuille(k: u64) -> Self {
        debug_assert!(k >= 1, "feuille k = 0 : le terme 0 est porté par 13591409·Q");
        let k_big = BigInt::from(k);

        let p = -(BigInt::from(6 * k - 5) * (2 * k - 1) * (6 * k - 1));
        let q = k_big.pow(3) * C3_SUR_24;
        let r = &p * (B * k + A);

        Self { p, q, r }
    }

    /// Fusion gauche [a, m) + droite [m, b) -> [a, b).
    pub fn fusion(self, droite: Triplet) -> Self {
        let r = &droite.q * &self.r + &self.p * &droite.r;
        Self {
            p: self.p * droite.p,
            q: self.q * droite.q,
            r,
        }
    }
}

/* ------------------------ Scission itérative ------------------------ */

enum Tache {
    Scinder(u64, u64),
    Fusionner,
}

/// (P, Q, R) exacts sur [a, b). Intervalle vide => triplet neutre.
///
/// Même découpage que la version récursive (milieu m = (a+b)/2), mais
/// piloté par une pile de tâches : les fusions attendent leurs deux moitiés
/// sur la pile des résultats.
pub fn scinder(a: u64, b: u64) -> Triplet {
    if a >= b {
        return Triplet::neutre();
    }

    let mut taches = vec![Tache::Scinder(a, b)];
    let mut resultats: Vec<Triplet> = Vec::new();

    while let Some(tache) = taches.pop() {
        match tache {
            Tache::Scinder(a, b) if b - a == 1 => resultats.push(Triplet::feuille(a)),
            Tache::Scinder(a, b) => {
                let m = a + (b - a) / 2;
                // LIFO : [a, m) d’abord, puis [m, b), puis la fusion
                taches.push(Tache::Fusionner);
                taches.push(Tache::Scinder(m, b));
                taches.push(Tache::Scinder(a, m));
            }
            Tache::Fusionner => {
                let droite = resultats.pop();
                let gauche = resultats.pop();
                if let (Some(gauche), Some(droite)) = (gauche, droite) {
                    resultats.push(gauche.fusion(droite));
                }
            }
        }
    }

    debug_assert_eq!(resultats.len(), 1);
    let triplet = resultats.pop().unwrap_or_else(Triplet::neutre);
    trace!(a, b, bits_q = triplet.q.bits(), "scission");
    triplet
}

/* ------------------------ Moteur ------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub struct ChudnovskyScission;

impl PiAlgorithm for ChudnovskyScission {
    fn nom(&self) -> &'static str {
        "scission"
    }

    fn calculer(&self, demande: PrecisionRequest) -> PiEstimate {
        let ctx = PrecisionContext::new(demande, GARDE);

        // [1, n) ; au minimum la feuille [1, 2) (n = 0 et n = 1)
        let fin = u64::from(demande.digits()).max(2);
        debug!(termes = fin - 1, working = ctx.working(), "chudnovsky scission");

        let triplet = scinder(1, fin);
        arrondir(&pi_depuis_triplet(&triplet, &ctx), demande)
    }
}

/// π ≈ 426880·√10005·Q / (13591409·Q + R), racine à la précision de travail.
fn pi_depuis_triplet(t: &Triplet, ctx: &PrecisionContext) -> Decimal {
    let racine = Decimal::from_int(10_005u32, ctx.working()).sqrt();
    let numerateur = racine.mul_int(&(&t.q * 426_880u32));
    let denominateur = &t.q * A + &t.r;
    numerateur.div_int(&denominateur)
}

#[cfg(test)]
mod tests {
    use num_rational::BigRational;

    use super::*;
    use crate::noyau::chudnovsky::factorielle;

    fn req(n: u32) -> PrecisionRequest {
        PrecisionRequest::new(n).unwrap()
    }

    /// Référence : la récursion naïve, découpage identique.
    fn scinder_recursif(a: u64, b: u64) -> Triplet {
        if b == a + 1 {
            return Triplet::feuille(a);
        }
        let m = (a + b) / 2;
        scinder_recursif(a, m).fusion(scinder_recursif(m, b))
    }

    /// Référence : feuilles accumulées une par une, de gauche à droite.
    fn accumulation(a: u64, b: u64) -> Triplet {
        (a..b).fold(Triplet::neutre(), |acc, k| acc.fusion(Triplet::feuille(k)))
    }

    #[test]
    fn feuille_k1() {
        let t = Triplet::feuille(1);
        assert_eq!(t.p, BigInt::from(-5));
        assert_eq!(t.q, BigInt::from(C3_SUR_24));
        assert_eq!(t.r, BigInt::from(-5) * BigInt::from(A + B));
    }

    #[test]
    fn neutre_des_deux_cotes() {
        let t = Triplet::feuille(3);
        assert_eq!(Triplet::neutre().fusion(t.clone()), t);
        assert_eq!(t.clone().fusion(Triplet::neutre()), t);
        assert_eq!(scinder(5, 5), Triplet::neutre());
        assert_eq!(scinder(1, 0), Triplet::neutre());
    }

    #[test]
    fn scission_egale_accumulation_petits_intervalles() {
        // exhaustif : 1 ≤ a < b, b − a ≤ 8
        for a in 1..=24u64 {
            for largeur in 1..=8u64 {
                let b = a + largeur;
                let attendu = accumulation(a, b);
                assert_eq!(scinder(a, b), attendu, "[{a}, {b})");
                assert_eq!(scinder_recursif(a, b), attendu, "[{a}, {b}) récursif");
            }
        }
    }

    #[test]
    fn scission_egale_recursion_grands_intervalles() {
        for (a, b) in [(1, 100), (1, 257), (17, 300)] {
            assert_eq!(scinder(a, b), scinder_recursif(a, b), "[{a}, {b})");
        }
    }

    #[test]
    fn triplet_egale_serie_exacte() {
        // 13591409 + R/Q == Σ_{k<b} (−1)^k (6k)!(A + Bk) / ((3k)!(k!)³ 640320^(3k))
        let b = 6u64;
        let t = scinder(1, b);
        let depuis_scission = BigRational::new(&t.q * A + &t.r, t.q.clone());

        let c3 = BigInt::from(640_320u32).pow(3);
        let serie = (0..b).fold(BigRational::from_integer(BigInt::zero()), |acc, k| {
            let mut num = factorielle(6 * k) * (A + B * k);
            if k % 2 == 1 {
                num = -num;
            }
            let den = factorielle(3 * k) * factorielle(k).pow(3) * c3.pow(k as u32);
            acc + BigRational::new(num, den)
        });

        assert_eq!(depuis_scission, serie);
    }

    #[test]
    fn petites_precisions() {
        assert_eq!(ChudnovskyScission.calculer(req(0)).texte(), "3");
        assert_eq!(ChudnovskyScission.calculer(req(1)).texte(), "3.1");
        assert_eq!(ChudnovskyScission.calculer(req(10)).texte(), "3.1415926536");
    }

    #[test]
    fn grande_precision_sans_debordement_de_pile() {
        let s = ChudnovskyScission.calculer(req(5_000)).texte();
        assert_eq!(s.len(), 2 + 5_000);
        assert!(s.starts_with("3.14159265358979323846264338327950288419716939937510"));
    }
}
