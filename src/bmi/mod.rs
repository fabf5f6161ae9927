//! BMI classification and the ideal-weight table.

mod classify;
mod ideal;

pub use classify::{BmiResult, Category, Thresholds, classify};
pub use ideal::{IdealRow, REFERENCE_INDEX, TABLE_ROWS, ideal_table, ideal_weight};
