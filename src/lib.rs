mod combo;
mod consts;
mod digits;
mod prelude;
mod reading;
mod score;
mod types;

pub use combo::{Combo, detect_combos};
pub use consts::*;
pub use digits::{extract_digits, gift_number, life_code};
pub use reading::{
    Language, NarrativeGenerator, Reading, ReadingError, ReadingRequest, narrative_prompt,
};
pub use score::score;
pub use types::{Digit, Shape, ShapeCount, ShapeCounts, WeightTable};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// The complete numeric profile derived from one calendar date string:
/// the extracted digits, the gift number (unreduced digit sum), the life code
/// (single-digit reduction fixed point), the weighted score and shape count
/// tables, and the matched combo patterns.
///
/// Building a profile is total and deterministic: any string is accepted, the
/// same string always yields the same profile, and a string with no digits
/// degenerates to an all-zero profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Decimal digits of the date string, in source order, repeats included
    pub digits: Vec<Digit>,
    /// Unreduced sum of all date digits
    pub gift_number: u32,
    /// Fixed point of repeated digit-sum reduction of the gift number
    pub life_code: Digit,
    /// Accumulated 1/3/5-weighted score per digit value
    pub weights: WeightTable,
    /// Raw occurrence counters per digit value, split by source shape
    pub shapes: ShapeCounts,
    /// Matched combo patterns, in rule-table order
    pub combos: Vec<Combo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProfileError {
    #[display(fmt = "Invalid digit: {} (must be 0-{})", "_0", MAX_DIGIT)]
    InvalidDigit(u8),
    #[display(fmt = "Unknown combo label: {_0}")]
    UnknownCombo(String),
}

impl std::error::Error for ProfileError {}

impl Profile {
    /// Derives the full profile for a date string.
    ///
    /// The date is expected in `YYYY-MM-DD` form but any string is tolerated:
    /// digits are extracted in order and everything else is dropped. Calendar
    /// correctness is not checked.
    pub fn analyze(date: &str) -> Self {
        let digits = extract_digits(date);
        let gift_number = gift_number(&digits);
        let life_code = life_code(gift_number);
        let (weights, shapes) = score(&digits, gift_number, life_code);
        let combos = detect_combos(&weights);
        Self {
            digits,
            gift_number,
            life_code,
            weights,
            shapes,
            combos,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::types::{Digit, WeightTable};

    pub(crate) fn digit(value: u8) -> Digit {
        Digit::new(value).expect("test digit out of range")
    }

    pub(crate) fn weights_for(active: &[u8]) -> WeightTable {
        let mut table = WeightTable::default();
        for &value in active {
            table.add(digit(value), 1);
        }
        table
    }
}
