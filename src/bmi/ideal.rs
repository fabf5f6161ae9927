//! Ideal weight at a fixed reference index.

/// BMI the ideal weight is solved for.
pub const REFERENCE_INDEX: f64 = 22.0;

pub const TABLE_START: f64 = 1.4;
pub const TABLE_STEP: f64 = 0.1;
pub const TABLE_ROWS: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealRow {
    pub height: f64,
    pub weight: f64,
}

/// Weight in kg that puts `height` (m) at [`REFERENCE_INDEX`].
pub fn ideal_weight(height: f64) -> f64 {
    REFERENCE_INDEX * (height * height)
}

/// Rows for heights 1.4 m to 3.4 m in 0.1 m steps.
pub fn ideal_table() -> Vec<IdealRow> {
    (0..TABLE_ROWS)
        .map(|i| TABLE_START + i as f64 * TABLE_STEP)
        .map(|height| IdealRow {
            height,
            weight: ideal_weight(height),
        })
        .collect()
}
