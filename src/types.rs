use crate::ProfileError;
use crate::consts::{CIRCLE_WEIGHT, DIGIT_VALUES, MAX_DIGIT, SQUARE_WEIGHT, TRIANGLE_WEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal digit value guaranteed to be in the range `0..=MAX_DIGIT` (0..=9).
/// Unlike a calendar component, 0 is a legal value here, so this wraps a plain `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a new Digit, validating that it's <= `MAX_DIGIT`
    ///
    /// # Errors
    /// Returns `ProfileError::InvalidDigit` if the value is > `MAX_DIGIT`.
    pub fn new(value: u8) -> Result<Self, ProfileError> {
        if value > MAX_DIGIT {
            return Err(ProfileError::InvalidDigit(value));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be in range (a `% 10` result or a
    /// `char::to_digit(10)` result).
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= MAX_DIGIT);
        Self(value)
    }

    /// Returns the digit value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the digit as an index into a dense 0..=9 table
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = ProfileError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three digit sources, named by the shape each occurrence is drawn with
/// on a matrix board: raw date digits (circles), gift number digits
/// (triangles), life code digits (squares).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Triangle,
    Square,
}

impl Shape {
    /// Returns the fixed score multiplier for one occurrence from this source.
    /// The 1/3/5 values are constants of the rule system, not configurable.
    #[inline]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Circle => CIRCLE_WEIGHT,
            Self::Triangle => TRIANGLE_WEIGHT,
            Self::Square => SQUARE_WEIGHT,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Square => "square",
        };
        write!(f, "{name}")
    }
}

/// Accumulated score for every digit value 0..=9.
/// Dense: all ten entries are always present, zero or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeightTable([u32; DIGIT_VALUES]);

impl WeightTable {
    /// Returns the accumulated score for a digit
    #[inline]
    pub const fn get(&self, digit: Digit) -> u32 {
        self.0[digit.index()]
    }

    /// Adds `weight` to a digit's score
    pub(crate) fn add(&mut self, digit: Digit, weight: u32) {
        self.0[digit.index()] += weight;
    }

    /// Returns true if the digit has a non-zero score
    #[inline]
    pub const fn is_active(&self, digit: Digit) -> bool {
        self.get(digit) > 0
    }

    /// Iterates all ten entries in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (Digit, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &weight)| (Digit::new_unchecked(i as u8), weight))
    }

    /// Returns the digits with non-zero score, in ascending order
    pub fn active_digits(&self) -> Vec<Digit> {
        self.iter()
            .filter(|&(_, weight)| weight > 0)
            .map(|(digit, _)| digit)
            .collect()
    }

    /// Returns the sum of all ten scores
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Raw occurrence counters for one digit, one per source shape.
/// These are unweighted counts; the weighted view lives in [`WeightTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeCount {
    pub circles: u32,
    pub triangles: u32,
    pub squares: u32,
}

/// Per-digit shape counters for every digit value 0..=9, dense like
/// [`WeightTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeCounts([ShapeCount; DIGIT_VALUES]);

impl ShapeCounts {
    /// Returns the counters for a digit
    #[inline]
    pub const fn get(&self, digit: Digit) -> ShapeCount {
        self.0[digit.index()]
    }

    /// Records one occurrence of `digit` from the given source shape
    pub(crate) fn record(&mut self, digit: Digit, shape: Shape) {
        let entry = &mut self.0[digit.index()];
        match shape {
            Shape::Circle => entry.circles += 1,
            Shape::Triangle => entry.triangles += 1,
            Shape::Square => entry.squares += 1,
        }
    }

    /// Iterates all ten entries in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (Digit, ShapeCount)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &count)| (Digit::new_unchecked(i as u8), count))
    }
}
