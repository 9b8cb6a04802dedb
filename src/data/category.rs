//! Expense Category Module
//! One chart row: a named amount, its bar color and the scale it is drawn against.

use crate::error::{ChartError, ChartResult};
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ChartError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color for names without a table entry.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xEC, 0xEC, 0xA3); // #ececa3

/// Bar colors keyed by lower-cased category name.
pub const COLOR_TABLE: [(&str, Rgb); 5] = [
    ("food", Rgb::new(0x09, 0x79, 0x69)),           // #097969
    ("transportation", Rgb::new(0x50, 0xC8, 0x78)), // #50C878
    ("entertainment", Rgb::new(0x2A, 0xAA, 0x8A)),  // #2AAA8A
    ("utilities", Rgb::new(0x47, 0x87, 0x78)),      // #478778
    ("others", Rgb::new(0xE6, 0x4A, 0x19)),         // #E64A19
];

/// Resolve the bar color for a category name (case-insensitive exact match).
pub fn color_for_name(name: &str) -> Rgb {
    let key = name.to_lowercase();
    COLOR_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|&(_, color)| color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Default normalization denominator shared by every entry of a chart.
pub const DEFAULT_MAX_AMOUNT: f64 = 1000.0;

/// Validated maximum amount a chart is scaled against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountScale(f64);

impl AmountScale {
    pub fn new(max_amount: f64) -> ChartResult<Self> {
        if !max_amount.is_finite() || max_amount <= 0.0 {
            return Err(ChartError::InvalidMaxAmount(max_amount));
        }
        Ok(Self(max_amount))
    }

    pub fn max_amount(self) -> f64 {
        self.0
    }
}

impl Default for AmountScale {
    fn default() -> Self {
        Self(DEFAULT_MAX_AMOUNT)
    }
}

/// One immutable chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    name: String,
    amount: f64,
    scale: AmountScale,
    color: Rgb,
}

impl CategoryEntry {
    /// Build an entry against the default scale of 1000.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self::with_scale(name, amount, AmountScale::default())
    }

    pub fn with_scale(name: impl Into<String>, amount: f64, scale: AmountScale) -> Self {
        let name = name.into();
        let color = color_for_name(&name);
        Self {
            name,
            amount,
            scale,
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn max_amount(&self) -> f64 {
        self.scale.max_amount()
    }

    pub fn scale(&self) -> AmountScale {
        self.scale
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Fraction of the scale this amount covers (unclamped).
    pub fn ratio(&self) -> f64 {
        self.amount / self.scale.max_amount()
    }

    /// Amount as shown next to the bar, e.g. `$250.00`.
    pub fn formatted_amount(&self) -> String {
        format!("${:.2}", self.amount)
    }
}
