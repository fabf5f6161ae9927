//! Body-mass index classification.

use std::fmt;

use crate::error::CalcError;

/// Ordinal BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Style token the renderer keys its colours on.
    pub fn display_class(self) -> &'static str {
        match self {
            Category::Underweight => "below-weight",
            Category::Normal => "normal-weight",
            Category::Overweight => "overweight",
            Category::Obese => "obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boundary table used to map an index onto a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thresholds {
    /// Half-open intervals on 18.5, 25 and 30.
    #[default]
    Standard,
    /// Normal ends at 24.9 and Overweight at 29.9 while the next band starts
    /// at 25 and 30, so indices in `[24.9, 25)` and `[29.9, 30)` land in Obese.
    Legacy,
}

impl Thresholds {
    pub fn category(self, index: f64) -> Category {
        match self {
            Thresholds::Standard => {
                if index < 18.5 {
                    Category::Underweight
                } else if index < 25.0 {
                    Category::Normal
                } else if index < 30.0 {
                    Category::Overweight
                } else {
                    Category::Obese
                }
            }
            Thresholds::Legacy => {
                if index < 18.5 {
                    Category::Underweight
                } else if (18.5..24.9).contains(&index) {
                    Category::Normal
                } else if (25.0..29.9).contains(&index) {
                    Category::Overweight
                } else {
                    Category::Obese
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Thresholds::Standard => "standard",
            Thresholds::Legacy => "legacy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Thresholds::Standard),
            "legacy" => Some(Thresholds::Legacy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub index: f64,
    pub category: Category,
}

impl BmiResult {
    pub fn display_class(&self) -> &'static str {
        self.category.display_class()
    }
}

/// Compute `weight / height²` (kg, m) and classify it.
///
/// Both inputs must be finite and strictly positive.
pub fn classify(weight: f64, height: f64, thresholds: Thresholds) -> Result<BmiResult, CalcError> {
    if !is_positive(weight) || !is_positive(height) {
        return Err(CalcError::InvalidInput { weight, height });
    }

    let index = weight / (height * height);
    Ok(BmiResult {
        index,
        category: thresholds.category(index),
    })
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn standard(weight: f64, height: f64) -> BmiResult {
        classify(weight, height, Thresholds::Standard).unwrap()
    }

    #[test]
    fn average_adult_is_normal() {
        let result = standard(70.0, 1.75);
        assert!((result.index - 22.857).abs() < 0.001);
        assert_eq!(result.category, Category::Normal);
        assert_eq!(result.display_class(), "normal-weight");
    }

    #[test]
    fn just_above_underweight_threshold() {
        let result = standard(60.0, 1.8);
        assert!((result.index - 18.52).abs() < 0.005);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn exact_boundaries_open_the_upper_band() {
        assert_eq!(standard(18.5, 1.0).category, Category::Normal);
        assert_eq!(standard(25.0, 1.0).category, Category::Overweight);
        assert_eq!(standard(30.0, 1.0).category, Category::Obese);
        assert_eq!(standard(18.4, 1.0).category, Category::Underweight);
    }

    #[test]
    fn legacy_gap_falls_through_to_obese() {
        let legacy = |index: f64| Thresholds::Legacy.category(index);
        assert_eq!(legacy(24.95), Category::Obese);
        assert_eq!(legacy(29.95), Category::Obese);
        assert_eq!(legacy(24.8), Category::Normal);
        assert_eq!(legacy(25.0), Category::Overweight);

        assert_eq!(Thresholds::Standard.category(24.95), Category::Normal);
        assert_eq!(Thresholds::Standard.category(29.95), Category::Overweight);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for (w, h) in [
            (0.0, 1.75),
            (70.0, 0.0),
            (-70.0, 1.75),
            (70.0, -1.75),
            (f64::NAN, 1.75),
            (70.0, f64::INFINITY),
        ] {
            let err = classify(w, h, Thresholds::Standard).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { .. }), "{w} {h}");
        }
    }

    #[test]
    fn thresholds_names_parse_back() {
        for t in [Thresholds::Standard, Thresholds::Legacy] {
            assert_eq!(Thresholds::from_name(t.name()), Some(t));
        }
        assert_eq!(Thresholds::from_name("metric"), None);
    }

    fn expected_standard(index: f64) -> Category {
        match index {
            i if i < 18.5 => Category::Underweight,
            i if i < 25.0 => Category::Normal,
            i if i < 30.0 => Category::Overweight,
            _ => Category::Obese,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn index_is_weight_over_height_squared(weight in 1.0f64..400.0, height in 0.5f64..2.6) {
            let result = classify(weight, height, Thresholds::Standard).unwrap();
            prop_assert_eq!(result.index, weight / (height * height));
            prop_assert_eq!(result.category, expected_standard(result.index));
        }

        #[test]
        fn tables_agree_outside_the_gaps(index in 0.0f64..60.0) {
            let in_gap = (24.9..25.0).contains(&index) || (29.9..30.0).contains(&index);
            if !in_gap {
                prop_assert_eq!(
                    Thresholds::Legacy.category(index),
                    Thresholds::Standard.category(index)
                );
            }
        }
    }
}
