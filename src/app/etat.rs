//! src/app/etat.rs
//!
//! Paramètres du pilote (sans vue, sans noyau).
//!
//! Rôle : décrire ce que l’utilisateur demande (précision brute, algorithme,
//! garde-fou) tel que lu sur la ligne de commande.
//!
//! Contrats :
//! - Aucun calcul ici.
//! - La précision reste du TEXTE : c’est le noyau qui la valide
//!   (même message d’erreur que n’importe quel autre appelant).

use std::fmt;
use std::str::FromStr;

use clap::Parser;
use pi_qpur::Algorithme;

/// Garde-fou par défaut : au-delà, on refuse avant de calculer (anti-gel).
pub const DIGITS_MAX: u32 = 1_000_000;

/// Algorithme choisi : un seul moteur, ou les quatre à la suite (comparaison).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choix {
    Un(Algorithme),
    Tous,
}

impl Choix {
    pub fn algorithmes(self) -> Vec<Algorithme> {
        match self {
            Choix::Un(algo) => vec![algo],
            Choix::Tous => Algorithme::TOUS.to_vec(),
        }
    }
}

impl FromStr for Choix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tous" | "all" => Ok(Choix::Tous),
            autre => autre.parse().map(Choix::Un),
        }
    }
}

impl fmt::Display for Choix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choix::Un(algo) => write!(f, "{algo}"),
            Choix::Tous => f.write_str("tous"),
        }
    }
}

/// pi_qpur — π à n chiffres après la virgule
#[derive(Parser, Clone, Debug)]
#[command(name = "pi_qpur", version, about)]
pub struct Options {
    /// Nombre de chiffres après la virgule (entier ≥ 0)
    #[arg(allow_negative_numbers = true)]
    pub digits: String,

    /// Algorithme : bbp, chudnovsky, scission, machin, tous
    #[arg(short, long, default_value = "scission")]
    pub algo: Choix,

    /// Précision maximale acceptée (garde-fou)
    #[arg(long, default_value_t = DIGITS_MAX)]
    pub max_digits: u32,

    /// N’affiche que la valeur (pas de temps de calcul)
    #[arg(short, long)]
    pub quiet: bool,
}
