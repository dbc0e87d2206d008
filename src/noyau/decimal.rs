// src/noyau/decimal.rs

//! Décimal à virgule fixe : entier “scalé” (×10^echelle) + échelle.
//!
//! Toutes les opérations qui perdent de l’information arrondissent au plus
//! proche, égalité vers le pair (round-half-to-even). Les additions, les
//! soustractions et `mul_int` sont exactes.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, Neg, SubAssign};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

use super::precision::pow10;

/* ------------------------ Arithmétique entière arrondie ------------------------ */

/// num/den arrondi au plus proche, égalité vers le pair.
///
/// # Panics
/// Si `den` est nul (comme la division de `BigInt`).
pub fn div_arrondi(num: &BigInt, den: &BigInt) -> BigInt {
    assert!(!den.is_zero(), "division par zéro");

    let negatif = num.is_negative() != den.is_negative();
    let (a, b) = (num.magnitude(), den.magnitude());

    let mut q = a / b;
    let r = a % b;

    // compare le reste à b/2 sans quitter les entiers : 2r vs b
    match (&r + &r).cmp(b) {
        Ordering::Greater => q += 1u32,
        Ordering::Equal if est_impair(&q) => q += 1u32,
        _ => {}
    }

    let signe = if negatif { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(signe, q)
}

fn est_impair(v: &BigUint) -> bool {
    (v % BigUint::from(2u32)).is_one()
}

/// floor(√n) par Newton, départ au-dessus de la racine.
pub fn racine_entiere(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }

    // 2^ceil(bits/2) > √n
    let mut y = BigUint::one() << ((n.bits() + 1) / 2);

    loop {
        let y_next = (&y + n / &y) >> 1u32;
        if y_next >= y {
            return y;
        }
        y = y_next;
    }
}

/// Ramène `mantisse` de l’échelle `de` à l’échelle `vers` (exact si on monte).
fn reechelle(mantisse: &BigInt, de: u32, vers: u32) -> BigInt {
    match vers.cmp(&de) {
        Ordering::Equal => mantisse.clone(),
        Ordering::Greater => mantisse * pow10(vers - de),
        Ordering::Less => div_arrondi(mantisse, &pow10(de - vers)),
    }
}

/* ------------------------ Decimal ------------------------ */

/// Valeur = mantisse / 10^echelle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

impl Decimal {
    /// Entier déjà scalé (aucun calcul).
    pub fn from_scaled(mantisse: BigInt, echelle: u32) -> Self {
        Self { mantisse, echelle }
    }

    /// Entier exact, représenté à l’échelle voulue.
    pub fn from_int(v: impl Into<BigInt>, echelle: u32) -> Self {
        Self::from_scaled(v.into() * pow10(echelle), echelle)
    }

    /// num/den arrondi à `echelle` chiffres.
    ///
    /// # Panics
    /// Si `den` est nul.
    pub fn from_ratio(num: &BigInt, den: &BigInt, echelle: u32) -> Self {
        Self::from_scaled(div_arrondi(&(num * pow10(echelle)), den), echelle)
    }

    pub fn zero(echelle: u32) -> Self {
        Self::from_scaled(BigInt::zero(), echelle)
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantisse.is_negative()
    }

    /// Arrondi (ou extension exacte) à `echelle` chiffres après la virgule.
    pub fn arrondi(&self, echelle: u32) -> Self {
        Self::from_scaled(reechelle(&self.mantisse, self.echelle, echelle), echelle)
    }

    /// Produit, rendu à la plus grande des deux échelles.
    pub fn mul(&self, autre: &Decimal) -> Self {
        let cible = self.echelle.max(autre.echelle);
        let brut = &self.mantisse * &autre.mantisse;
        let m = reechelle(&brut, self.echelle + autre.echelle, cible);
        Self::from_scaled(m, cible)
    }

    /// Produit par un entier : exact.
    pub fn mul_int(&self, k: &BigInt) -> Self {
        Self::from_scaled(&self.mantisse * k, self.echelle)
    }

    /// Quotient, rendu à la plus grande des deux échelles.
    ///
    /// # Panics
    /// Si `autre` est nul.
    pub fn div(&self, autre: &Decimal) -> Self {
        let cible = self.echelle.max(autre.echelle);
        // (m1/10^s1) / (m2/10^s2) * 10^t = m1 * 10^(s2 + t - s1) / m2
        let num = &self.mantisse * pow10(autre.echelle + cible - self.echelle);
        Self::from_scaled(div_arrondi(&num, &autre.mantisse), cible)
    }

    /// Quotient par un entier, même échelle.
    ///
    /// # Panics
    /// Si `k` est nul.
    pub fn div_int(&self, k: &BigInt) -> Self {
        Self::from_scaled(div_arrondi(&self.mantisse, k), self.echelle)
    }

    /// √self à la même échelle, arrondie au plus proche.
    ///
    /// # Panics
    /// Si la valeur est négative (comme `BigInt::sqrt`).
    pub fn sqrt(&self) -> Self {
        assert!(!self.is_negative(), "racine carrée d’un négatif");

        // √(m/10^s) * 10^s = √(m * 10^s)
        let cible = (&self.mantisse * pow10(self.echelle)).into_parts().1;
        let mut r = racine_entiere(&cible);

        // plus proche : r+1 si (r + 1/2)² < cible, i.e. (2r+1)² < 4·cible
        // (jamais d’égalité : impair² contre pair)
        let impair = &r + &r + 1u32;
        if &impair * &impair < &cible * 4u32 {
            r += 1u32;
        }

        Self::from_scaled(BigInt::from(r), self.echelle)
    }

    fn aligne(&mut self, echelle: u32) {
        if echelle > self.echelle {
            self.mantisse = reechelle(&self.mantisse, self.echelle, echelle);
            self.echelle = echelle;
        }
    }
}

impl AddAssign<&Decimal> for Decimal {
    fn add_assign(&mut self, autre: &Decimal) {
        self.aligne(autre.echelle);
        self.mantisse += reechelle(&autre.mantisse, autre.echelle, self.echelle);
    }
}

impl SubAssign<&Decimal> for Decimal {
    fn sub_assign(&mut self, autre: &Decimal) {
        self.aligne(autre.echelle);
        self.mantisse -= reechelle(&autre.mantisse, autre.echelle, self.echelle);
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::from_scaled(-self.mantisse, self.echelle)
    }
}

/// Texte exact : `echelle` chiffres après la virgule, pas de virgule si échelle 0.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neg = self.mantisse.is_negative();
        let abs = self.mantisse.abs();

        let scale = pow10(self.echelle);
        let int_part = &abs / &scale;
        let frac_part = &abs % &scale;

        if neg {
            f.write_str("-")?;
        }
        if self.echelle == 0 {
            return write!(f, "{int_part}");
        }

        let frac = frac_part.to_str_radix(10);
        write!(
            f,
            "{int_part}.{frac:0>width$}",
            width = self.echelle as usize
        )
    }
}
