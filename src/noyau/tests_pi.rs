//! Tests π (campagne) : les quatre moteurs contre une référence + invariants.
//!
//! But : vérifier l’accord digit à digit sans faire chauffer la machine.
//! - référence : 160 chiffres de π (tronqués), arrondis demi-pair à la demande
//! - budget temps global sur les boucles
//! - déterminisme : appels entrelacés, aucun état partagé entre moteurs

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::decimal::Decimal;
use super::{Algorithme, PiError, PrecisionRequest};

/// π tronqué à 160 chiffres après la virgule.
const PI_160: &str = "3.\
1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679\
821480865132823066470938446095505822317253594081284811174502";

/// Référence arrondie demi-pair à n chiffres.
/// (n ≤ 150 : la queue tronquée ne tombe jamais pile sur la moitié.)
fn reference(n: u32) -> String {
    let chiffres: String = PI_160.chars().filter(char::is_ascii_digit).collect();
    let mantisse: BigInt = chiffres.parse().unwrap();
    Decimal::from_scaled(mantisse, 160).arrondi(n).to_string()
}

fn calcul(algo: Algorithme, n: i64) -> String {
    algo.moteur()
        .compute(n)
        .unwrap_or_else(|e| panic!("{algo} n={n} err={e}"))
        .texte()
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence ------------------------ */

#[test]
fn pi_reference_points_fixes() {
    for algo in Algorithme::TOUS {
        for n in [0u32, 1, 10, 50, 100] {
            assert_eq!(calcul(algo, i64::from(n)), reference(n), "{algo} n={n}");
        }
    }
}

#[test]
fn pi_valeurs_litterales() {
    let attendu_50 = "3.14159265358979323846264338327950288419716939937511";
    let attendu_100 = "3.\
1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170680";

    for algo in Algorithme::TOUS {
        assert_eq!(calcul(algo, 0), "3", "{algo}");
        assert_eq!(calcul(algo, 1), "3.1", "{algo}");
        // ...5358|979 : le 11e chiffre (8) fait monter
        assert_eq!(calcul(algo, 10), "3.1415926536", "{algo}");
        assert_eq!(calcul(algo, 50), attendu_50, "{algo}");
        assert_eq!(calcul(algo, 100), attendu_100, "{algo}");
    }
}

#[test]
fn pi_balayage_0_a_120() {
    let start = Instant::now();
    for n in 0..=120u32 {
        budget(start, Duration::from_secs(120));
        let attendu = reference(n);
        for algo in Algorithme::TOUS {
            assert_eq!(calcul(algo, i64::from(n)), attendu, "{algo} n={n}");
        }
    }
}

/* ------------------------ Invariants ------------------------ */

#[test]
fn inv_exactement_n_chiffres() {
    for algo in Algorithme::TOUS {
        for n in [0i64, 1, 2, 7, 33, 64] {
            let s = calcul(algo, n);
            match s.split_once('.') {
                Some((ent, frac)) => {
                    assert_eq!(ent, "3", "{algo} n={n}");
                    assert_eq!(frac.len() as i64, n, "{algo} n={n}");
                }
                None => assert_eq!((n, s.as_str()), (0, "3"), "{algo}"),
            }
        }
    }
}

#[test]
fn inv_determinisme_sans_fuite() {
    // mêmes n, ordre entrelacé, précisions différentes entre deux appels
    let premiers: Vec<String> = Algorithme::TOUS.iter().map(|a| calcul(*a, 40)).collect();

    for algo in Algorithme::TOUS {
        let _ = calcul(algo, 90);
        let _ = calcul(algo, 3);
    }

    let seconds: Vec<String> = Algorithme::TOUS.iter().map(|a| calcul(*a, 40)).collect();
    assert_eq!(premiers, seconds);
}

#[test]
fn inv_threads_independants() {
    // précisions différentes en parallèle : rien de global à corrompre
    let travaux = [
        (Algorithme::Machin, 70i64),
        (Algorithme::Scission, 25),
        (Algorithme::Bbp, 55),
    ];
    let handles: Vec<_> = travaux
        .into_iter()
        .map(|(algo, n)| std::thread::spawn(move || (n, calcul(algo, n))))
        .collect();

    for h in handles {
        let (n, s) = h.join().unwrap();
        assert_eq!(s, reference(n as u32), "n={n}");
    }
}

/* ------------------------ Rejets ------------------------ */

#[test]
fn rejet_negatif_et_texte() {
    for algo in Algorithme::TOUS {
        assert!(matches!(
            algo.moteur().compute(-1),
            Err(PiError::InvalidPrecisionInput(_))
        ));
    }
    assert!(matches!(
        "abc".parse::<PrecisionRequest>(),
        Err(PiError::InvalidPrecisionInput(_))
    ));
}

/* ------------------------ Garde Machin (question ouverte) ------------------------ */

#[test]
fn machin_accord_grande_precision() {
    // 10 chiffres de garde fixes : on valide contre la scission (erreur bornée, indépendante de n)
    let start = Instant::now();
    for n in [500u32, 1_500] {
        budget(start, Duration::from_secs(120));
        let req = PrecisionRequest::new(n).unwrap();
        let machin = Algorithme::Machin.moteur().calculer(req);
        let scission = Algorithme::Scission.moteur().calculer(req);
        assert_eq!(machin, scission, "n={n}");
    }
}
