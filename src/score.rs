use crate::digits::decimal_digits;
use crate::types::{Digit, Shape, ShapeCounts, WeightTable};

/// Builds the weight and shape tables from the three digit sources: the raw
/// date digits (circles, x1), the gift number's digits (triangles, x3) and
/// the life code's digits (squares, x5).
///
/// Both tables are filled in the same pass over the same sources, which keeps
/// the weighted scores and the raw counters consistent with each other.
pub fn score(digits: &[Digit], gift_number: u32, life_code: Digit) -> (WeightTable, ShapeCounts) {
    let gift_digits = decimal_digits(gift_number);
    let life_digits = decimal_digits(u32::from(life_code.get()));

    let sources: [(Shape, &[Digit]); 3] = [
        (Shape::Circle, digits),
        (Shape::Triangle, &gift_digits),
        (Shape::Square, &life_digits),
    ];

    let mut weights = WeightTable::default();
    let mut shapes = ShapeCounts::default();
    for (shape, source) in sources {
        for &digit in source {
            weights.add(digit, shape.weight());
            shapes.record(digit, shape);
        }
    }
    (weights, shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::{extract_digits, gift_number, life_code};
    use crate::test_utils::digit;

    fn score_for(input: &str) -> (Vec<Digit>, u32, Digit, WeightTable, ShapeCounts) {
        let digits = extract_digits(input);
        let gift = gift_number(&digits);
        let code = life_code(gift);
        let (weights, shapes) = score(&digits, gift, code);
        (digits, gift, code, weights, shapes)
    }

    #[test]
    fn test_score_iso_date() {
        // 2024-01-01: digits [2,0,2,4,0,1,0,1], gift 10, life code 1
        let (_, gift, code, weights, shapes) = score_for("2024-01-01");
        assert_eq!(gift, 10);
        assert_eq!(code, digit(1));

        // circles 3x0 + triangle from "10", squares from "1"
        assert_eq!(weights.get(digit(0)), 3 + 3);
        assert_eq!(weights.get(digit(1)), 2 + 3 + 5);
        assert_eq!(weights.get(digit(2)), 2);
        assert_eq!(weights.get(digit(4)), 1);
        for value in [3, 5, 6, 7, 8, 9] {
            assert_eq!(weights.get(digit(value)), 0);
        }

        assert_eq!(shapes.get(digit(0)).circles, 3);
        assert_eq!(shapes.get(digit(0)).triangles, 1);
        assert_eq!(shapes.get(digit(0)).squares, 0);
        assert_eq!(shapes.get(digit(1)).circles, 2);
        assert_eq!(shapes.get(digit(1)).triangles, 1);
        assert_eq!(shapes.get(digit(1)).squares, 1);
        assert_eq!(shapes.get(digit(2)).circles, 2);
        assert_eq!(shapes.get(digit(4)).circles, 1);
    }

    #[test]
    fn test_weight_total_formula() {
        // sum(weights) = 1*len(digits) + 3*numDigits(gift) + 5*numDigits(life)
        for input in ["2024-01-01", "1991-08-15", "----", "0000", "9999-99-99"] {
            let (digits, gift, code, weights, _) = score_for(input);
            let gift_len = decimal_digits(gift).len() as u32;
            let life_len = decimal_digits(u32::from(code.get())).len() as u32;
            assert_eq!(
                weights.total(),
                digits.len() as u32 + 3 * gift_len + 5 * life_len,
                "weight total formula broken for {input:?}"
            );
        }
    }

    #[test]
    fn test_shapes_match_source_occurrences() {
        for input in ["2024-01-01", "1991-08-15", "0000"] {
            let (digits, gift, code, _, shapes) = score_for(input);
            let gift_digits = decimal_digits(gift);
            let life_digits = decimal_digits(u32::from(code.get()));

            for value in 0..=9 {
                let d = digit(value);
                let count = shapes.get(d);
                assert_eq!(
                    count.circles as usize,
                    digits.iter().filter(|&&x| x == d).count(),
                    "circle count mismatch for digit {value} in {input:?}"
                );
                assert_eq!(
                    count.triangles as usize,
                    gift_digits.iter().filter(|&&x| x == d).count(),
                    "triangle count mismatch for digit {value} in {input:?}"
                );
                assert_eq!(
                    count.squares as usize,
                    life_digits.iter().filter(|&&x| x == d).count(),
                    "square count mismatch for digit {value} in {input:?}"
                );
            }
        }
    }

    #[test]
    fn test_score_empty_input_is_all_zero() {
        let (digits, gift, code, weights, shapes) = score_for("----");
        assert!(digits.is_empty());
        assert_eq!(gift, 0);
        assert_eq!(code, digit(0));
        assert_eq!(weights, WeightTable::default());
        assert_eq!(shapes, ShapeCounts::default());
    }

    #[test]
    fn test_score_all_zero_digits_counts_circles_only() {
        // "0000" has digits but gift number and life code are both 0, which
        // expand to no digits; only the raw occurrences score.
        let (_, gift, code, weights, shapes) = score_for("0000");
        assert_eq!(gift, 0);
        assert_eq!(code, digit(0));
        assert_eq!(weights.get(digit(0)), 4);
        assert_eq!(weights.total(), 4);
        assert_eq!(shapes.get(digit(0)).circles, 4);
        assert_eq!(shapes.get(digit(0)).triangles, 0);
        assert_eq!(shapes.get(digit(0)).squares, 0);
    }
}
