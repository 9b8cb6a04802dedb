//! Data module - chart rows and expense input parsing

mod category;
mod input;

pub use category::{
    color_for_name, AmountScale, CategoryEntry, Rgb, COLOR_TABLE, DEFAULT_MAX_AMOUNT,
    FALLBACK_COLOR,
};
pub use input::{
    collect_entries, parse_amount, parse_expense_fields, FormOutcome, EXPENSE_FIELDS,
};
