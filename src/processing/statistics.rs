use std::cmp::Ordering;

use crate::state::number_store::Number;

/// Aggregates over a non-empty list of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub minimum: Number,
    pub maximum: Number,
    pub sum: Number,
    pub mean: f64,
}

/// Statistics for the current list. `Empty` is its own state, not zeros.
#[derive(Debug, Clone, PartialEq)]
pub enum Stats {
    Empty,
    Summary(Summary),
}

impl Stats {
    /// Recompute everything from scratch.
    pub fn compute(values: &[Number]) -> Self {
        let Some((&first, rest)) = values.split_first() else {
            return Stats::Empty;
        };

        let mut minimum = first;
        let mut maximum = first;
        for v in rest {
            if v.numeric_cmp(&minimum) == Some(Ordering::Less) {
                minimum = *v;
            }
            if v.numeric_cmp(&maximum) == Some(Ordering::Greater) {
                maximum = *v;
            }
        }

        let count = values.len();
        let sum = sum(values);
        let mean = sum.as_f64() / count as f64;

        Stats::Summary(Summary {
            count,
            minimum,
            maximum,
            sum,
            mean,
        })
    }
}

/// Exact integer sum while every value is an integer and it fits in `i128`,
/// otherwise a floating-point sum.
fn sum(values: &[Number]) -> Number {
    let exact = values.iter().try_fold(0i128, |acc, v| match *v {
        Number::Int(i) => acc.checked_add(i),
        Number::Real(_) => None,
    });
    match exact {
        Some(total) => Number::Int(total),
        None => Number::Real(values.iter().map(Number::as_f64).sum()),
    }
}

/// The average as shown to the user: two decimals, ties to even on the exact
/// binary value.
pub fn format_mean(mean: f64) -> String {
    format!("{mean:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ints(vals: &[i64]) -> Vec<Number> {
        vals.iter().map(|&v| Number::Int(i128::from(v))).collect()
    }

    fn summary(values: &[Number]) -> Summary {
        match Stats::compute(values) {
            Stats::Summary(s) => s,
            Stats::Empty => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_empty_is_distinct_state() {
        assert_eq!(Stats::compute(&[]), Stats::Empty);
    }

    #[test]
    fn test_basic_summary() {
        let s = summary(&ints(&[10, 20, 30]));
        assert_eq!(s.count, 3);
        assert_eq!(s.minimum, Number::Int(10));
        assert_eq!(s.maximum, Number::Int(30));
        assert_eq!(s.sum, Number::Int(60));
        assert_eq!(format_mean(s.mean), "20.00");
    }

    #[test]
    fn test_all_equal_values() {
        let s = summary(&ints(&[4, 4, 4]));
        assert_eq!(s.minimum, s.maximum);
        assert_eq!(s.minimum, Number::Int(4));
        assert_eq!(s.mean, 4.0);
    }

    #[test]
    fn test_mixed_sum_is_real() {
        let s = summary(&[Number::Int(1), Number::Real(2.5)]);
        assert_eq!(s.sum, Number::Real(3.5));
        assert_eq!(s.maximum, Number::Real(2.5));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_real() {
        let s = summary(&[Number::Int(i128::MAX), Number::Int(1)]);
        assert!(matches!(s.sum, Number::Real(_)));
    }

    #[test]
    fn test_min_keeps_first_of_equal_values() {
        let s = summary(&[Number::Real(2.0), Number::Int(2)]);
        assert_eq!(s.minimum, Number::Real(2.0));
        assert_eq!(s.maximum, Number::Real(2.0));
    }

    #[test]
    fn test_sum_wider_than_i64_stays_exact() {
        let s = summary(&ints(&[i64::MAX, i64::MAX]));
        assert_eq!(s.sum, Number::Int(2 * i128::from(i64::MAX)));
        assert_eq!(s.sum.to_string(), "18446744073709551614");
    }

    #[test]
    fn test_mean_rounding_is_half_to_even() {
        assert_eq!(format_mean(0.125), "0.12");
        assert_eq!(format_mean(0.375), "0.38");
        assert_eq!(format_mean(2.0 / 3.0), "0.67");
        assert_eq!(format_mean(-1.5), "-1.50");
    }

    proptest! {
        #[test]
        fn prop_int_bounds_and_mean(
            vals in prop::collection::vec(-1_000_000i64..1_000_000, 1..200),
        ) {
            let numbers = ints(&vals);
            let s = summary(&numbers);
            for v in &numbers {
                prop_assert!(s.minimum.numeric_cmp(v) != Some(Ordering::Greater));
                prop_assert!(s.maximum.numeric_cmp(v) != Some(Ordering::Less));
            }
            prop_assert_eq!(s.count, vals.len());
            let expected = vals.iter().sum::<i64>() as f64 / vals.len() as f64;
            let shown: f64 = format_mean(s.mean).parse().unwrap();
            prop_assert!((shown - expected).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_real_bounds(vals in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
            let numbers: Vec<Number> = vals.iter().copied().map(Number::Real).collect();
            let s = summary(&numbers);
            for v in &vals {
                prop_assert!(s.minimum.as_f64() <= *v);
                prop_assert!(*v <= s.maximum.as_f64());
            }
            prop_assert_eq!(s.count, vals.len());
        }
    }
}
