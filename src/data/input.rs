//! Expense Input Module
//! Turns the five text fields of the entry form into chart rows.
//!
//! A submission is all-or-nothing: one unparsable field discards the whole
//! batch and the caller gets an empty list.

use crate::data::{AmountScale, CategoryEntry};
use crate::error::InputError;

/// Form fields in display order; each label is also the category name.
pub const EXPENSE_FIELDS: [&str; 5] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Others",
];

/// What the entry dialog returned.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Submitted([String; 5]),
    Cancelled,
}

/// Parse one amount field. Surrounding whitespace is ignored.
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidAmount {
        field,
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    // "NaN" and "inf" parse, but are not amounts
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse all five fields, failing on the first bad one.
pub fn parse_expense_fields(
    fields: &[String; 5],
    scale: AmountScale,
) -> Result<Vec<CategoryEntry>, InputError> {
    EXPENSE_FIELDS
        .iter()
        .zip(fields.iter())
        .map(|(&name, text)| {
            parse_amount(name, text).map(|amount| CategoryEntry::with_scale(name, amount, scale))
        })
        .collect()
}

/// Resolve a dialog outcome into the entries to chart.
///
/// Cancelling yields an empty list. A parse failure also yields an empty list;
/// the error is returned alongside so the host can notify the user.
pub fn collect_entries(
    outcome: FormOutcome,
    scale: AmountScale,
) -> (Vec<CategoryEntry>, Option<InputError>) {
    match outcome {
        FormOutcome::Cancelled => {
            tracing::debug!("expense form cancelled");
            (Vec::new(), None)
        }
        FormOutcome::Submitted(fields) => match parse_expense_fields(&fields, scale) {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "expense form accepted");
                (entries, None)
            }
            Err(err) => {
                tracing::warn!(%err, "expense form rejected, discarding batch");
                (Vec::new(), Some(err))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; 5]) -> [String; 5] {
        values.map(str::to_string)
    }

    #[test]
    fn parses_trimmed_fields_in_fixed_order() {
        let entries =
            parse_expense_fields(&fields([" 250", "75 ", "0", "12.5", "1000"]), AmountScale::default())
                .unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, EXPENSE_FIELDS);
        let amounts: Vec<_> = entries.iter().map(|e| e.amount()).collect();
        assert_eq!(amounts, vec![250.0, 75.0, 0.0, 12.5, 1000.0]);
    }

    #[test]
    fn one_bad_field_discards_the_batch() {
        let outcome = FormOutcome::Submitted(fields(["10", "20", "abc", "40", "50"]));
        let (entries, err) = collect_entries(outcome, AmountScale::default());
        assert!(entries.is_empty());
        assert_eq!(
            err,
            Some(InputError::InvalidAmount {
                field: "Entertainment",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn empty_and_non_finite_fields_are_rejected() {
        assert!(parse_amount("Food", "").is_err());
        assert!(parse_amount("Food", "   ").is_err());
        assert!(parse_amount("Food", "NaN").is_err());
        assert!(parse_amount("Food", "inf").is_err());
        assert_eq!(parse_amount("Food", "-3.5").unwrap(), -3.5);
        assert_eq!(parse_amount("Food", "1e2").unwrap(), 100.0);
    }

    #[test]
    fn cancel_returns_nothing() {
        let (entries, err) = collect_entries(FormOutcome::Cancelled, AmountScale::default());
        assert!(entries.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn entries_carry_the_given_scale() {
        let scale = AmountScale::new(250.0).unwrap();
        let (entries, _) = collect_entries(
            FormOutcome::Submitted(fields(["1", "2", "3", "4", "5"])),
            scale,
        );
        assert!(entries.iter().all(|e| e.max_amount() == 250.0));
    }
}
