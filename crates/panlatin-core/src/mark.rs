// Panlatin Mark Families
// Human-readable meaning of each combination digit

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::Digit;

/// The loose group of diacritics a digit stands for.
///
/// The concrete mark always depends on the base character (3 is a
/// diaeresis on `u` but a stroke on `h`). This enum only documents the
/// families; the combine step never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum MarkFamily {
    #[strum(serialize = "clear")]
    Clear = 0,
    #[strum(serialize = "acute")]
    Acute = 1,
    #[strum(serialize = "grave")]
    Grave = 2,
    #[strum(serialize = "diaeresis")]
    Diaeresis = 3,
    #[strum(serialize = "circumflex")]
    Circumflex = 4,
    #[strum(serialize = "breve")]
    Breve = 5,
    #[strum(serialize = "tilde")]
    Tilde = 6,
    #[strum(serialize = "ring")]
    Ring = 7,
    #[strum(serialize = "ogonek")]
    Ogonek = 8,
    #[strum(serialize = "special")]
    Special = 9,
}

impl MarkFamily {
    /// Every family in digit order
    pub fn all() -> impl Iterator<Item = MarkFamily> {
        Self::iter()
    }

    pub fn from_digit(digit: Digit) -> Self {
        match digit.value() {
            0 => Self::Clear,
            1 => Self::Acute,
            2 => Self::Grave,
            3 => Self::Diaeresis,
            4 => Self::Circumflex,
            5 => Self::Breve,
            6 => Self::Tilde,
            7 => Self::Ring,
            8 => Self::Ogonek,
            _ => Self::Special,
        }
    }

    pub fn digit(self) -> Digit {
        Digit::from_index(self as u8)
    }

    /// Every mark this digit can produce in the full table
    pub fn description(self) -> &'static str {
        match self {
            Self::Clear => "remove the mark (i becomes dotless ı)",
            Self::Acute => "acute; twice on o/u gives double acute",
            Self::Grave => "grave; twice on a/e/i/o/u gives macron",
            Self::Diaeresis => "diaeresis, or horizontal stroke on d/h/l",
            Self::Circumflex => "circumflex",
            Self::Breve => "breve, caron, or diagonal stroke on o",
            Self::Tilde => "tilde, or comma below on s/t",
            Self::Ring => "ring above, or dot above",
            Self::Ogonek => "ogonek, or cedilla",
            Self::Special => "ligatures and punctuation (æ ð œ ß þ ¿ ¡ « »)",
        }
    }

    /// Base letters the family applies to in the full table
    pub fn applies_to(self) -> &'static str {
        match self {
            Self::Clear => "any marked letter, i, ı",
            Self::Acute => "aceilnosuwyz",
            Self::Grave => "aeiouwy",
            Self::Diaeresis => "aeiouwy dhl",
            Self::Circumflex => "aceghijosuwy",
            Self::Breve => "agu cdelnrstz o",
            Self::Tilde => "ainou st",
            Self::Ring => "au cegnz I ı",
            Self::Ogonek => "aeiu cgklns",
            Self::Special => "adost ?!<>",
        }
    }
}
