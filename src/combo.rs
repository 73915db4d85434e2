use std::str::FromStr;

use crate::ProfileError;
use crate::prelude::*;
use crate::types::{Digit, WeightTable};

/// A named digit-subset pattern, matched when every digit in the subset has a
/// non-zero score. The table of patterns and its evaluation order are fixed
/// rules of the system; the asymmetry (five 3-digit lines, four 2-digit
/// pairs) is inherited as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Combo {
    #[display(fmt = "1-2-3")]
    OneTwoThree,
    #[display(fmt = "4-5-6")]
    FourFiveSix,
    #[display(fmt = "7-8-9")]
    SevenEightNine,
    #[display(fmt = "1-5-9")]
    OneFiveNine,
    #[display(fmt = "3-5-7")]
    ThreeFiveSeven,
    #[display(fmt = "2-4")]
    TwoFour,
    #[display(fmt = "2-6")]
    TwoSix,
    #[display(fmt = "4-8")]
    FourEight,
    #[display(fmt = "6-8")]
    SixEight,
}

impl Combo {
    /// Every pattern, in canonical evaluation order.
    pub const ALL: [Self; 9] = [
        Self::OneTwoThree,
        Self::FourFiveSix,
        Self::SevenEightNine,
        Self::OneFiveNine,
        Self::ThreeFiveSeven,
        Self::TwoFour,
        Self::TwoSix,
        Self::FourEight,
        Self::SixEight,
    ];

    /// Returns the digits that must all be active for this pattern to match
    pub const fn required_digits(self) -> &'static [u8] {
        match self {
            Self::OneTwoThree => &[1, 2, 3],
            Self::FourFiveSix => &[4, 5, 6],
            Self::SevenEightNine => &[7, 8, 9],
            Self::OneFiveNine => &[1, 5, 9],
            Self::ThreeFiveSeven => &[3, 5, 7],
            Self::TwoFour => &[2, 4],
            Self::TwoSix => &[2, 6],
            Self::FourEight => &[4, 8],
            Self::SixEight => &[6, 8],
        }
    }

    /// Returns true if every required digit has a non-zero score
    pub fn matches(self, weights: &WeightTable) -> bool {
        self.required_digits()
            .iter()
            .all(|&value| weights.is_active(Digit::new_unchecked(value)))
    }
}

/// Evaluates the full pattern table against a weight table, returning every
/// matched pattern in table order. Patterns are independent and
/// non-exclusive; overlapping digit usage is expected and not deduplicated.
pub fn detect_combos(weights: &WeightTable) -> Vec<Combo> {
    Combo::ALL
        .into_iter()
        .filter(|combo| combo.matches(weights))
        .collect()
}

impl FromStr for Combo {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|combo| combo.to_string() == s)
            .ok_or_else(|| ProfileError::UnknownCombo(s.to_owned()))
    }
}

impl serde::Serialize for Combo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Combo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
