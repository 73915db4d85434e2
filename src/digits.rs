use crate::consts::{DECIMAL_BASE, MAX_DIGIT};
use crate::types::Digit;

/// Extracts the decimal digits of an input string in left-to-right order,
/// repeats included. Non-digit characters (separators, letters) are silently
/// dropped, so any string is accepted; a string with no digits yields an
/// empty sequence.
pub fn extract_digits(input: &str) -> Vec<Digit> {
    input
        .chars()
        .filter_map(|c| c.to_digit(DECIMAL_BASE))
        .map(|value| Digit::new_unchecked(value as u8))
        .collect()
}

/// Returns the gift number: the unreduced sum of a digit sequence.
/// An empty sequence sums to 0.
pub fn gift_number(digits: &[Digit]) -> u32 {
    digits.iter().map(|digit| u32::from(digit.get())).sum()
}

/// Reduces a number to its life code by repeatedly replacing it with the sum
/// of its own decimal digits until a single digit remains.
///
/// Each reduction strictly decreases any value above `MAX_DIGIT`, so the loop
/// terminates for every input; 0..=9 are the fixed points.
pub fn life_code(mut n: u32) -> Digit {
    while n > u32::from(MAX_DIGIT) {
        n = gift_number(&decimal_digits(n));
    }
    Digit::new_unchecked(n as u8)
}

/// Expands a number into its decimal digits, most significant first.
/// Zero expands to no digits at all: a profile whose gift number or life code
/// is 0 contributes nothing to the weight and shape tables.
pub(crate) fn decimal_digits(mut n: u32) -> Vec<Digit> {
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(Digit::new_unchecked((n % DECIMAL_BASE) as u8));
        n /= DECIMAL_BASE;
    }
    digits.reverse();
    digits
}
