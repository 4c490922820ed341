//! Fields derived from a card's cost expression.
//!
//! The cost expression is an opaque string like `2RR` or `XG`. Two facts are
//! derived from it at construction time:
//!
//! - `Color`: the card's color classification, decided by a fixed symbol
//!   priority.
//! - `TotalCost`: the summed numeric portion, or `Variable` when the
//!   expression carries the `X` marker.

use serde::{Deserialize, Serialize};

/// Marker in a cost expression meaning the cost is chosen at play time.
const VARIABLE_MARKER: char = 'X';

/// Color classification derived from a cost expression.
///
/// Classification checks the symbols `R`, `U`, `G`, `W`, `B` in that fixed
/// priority order; the first symbol present wins. The order is a deliberate
/// tie-break for multi-symbol costs, not alphabetical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    White,
    Black,
    Colorless,
}

impl Color {
    /// Classify a cost expression.
    ///
    /// ```
    /// use cardex::Color;
    ///
    /// assert_eq!(Color::from_cost("RU"), Color::Red);
    /// assert_eq!(Color::from_cost("3"), Color::Colorless);
    /// ```
    #[must_use]
    pub fn from_cost(cost: &str) -> Self {
        if cost.contains('R') {
            Color::Red
        } else if cost.contains('U') {
            Color::Blue
        } else if cost.contains('G') {
            Color::Green
        } else if cost.contains('W') {
            Color::White
        } else if cost.contains('B') {
            Color::Black
        } else {
            Color::Colorless
        }
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::White => "WHITE",
            Color::Black => "BLACK",
            Color::Colorless => "COLORLESS",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total cost derived from a cost expression.
///
/// Ordinary expressions sum to `Fixed`; an `X` anywhere in the expression
/// makes the whole cost `Variable` and no sum is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalCost {
    /// Sum of every digit run in the expression.
    Fixed(u32),
    /// The expression contains the variable-cost marker.
    Variable,
}

impl TotalCost {
    /// Derive the total cost from a cost expression.
    ///
    /// Digit runs are summed with saturating arithmetic; an oversized run
    /// never fails the containing catalog load.
    #[must_use]
    pub fn from_cost(cost: &str) -> Self {
        if cost.contains(VARIABLE_MARKER) {
            return TotalCost::Variable;
        }

        let mut total: u32 = 0;
        let mut run: Option<u32> = None;
        for c in cost.chars() {
            if let Some(digit) = c.to_digit(10) {
                run = Some(run.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            } else if let Some(value) = run.take() {
                total = total.saturating_add(value);
            }
        }
        if let Some(value) = run {
            total = total.saturating_add(value);
        }
        TotalCost::Fixed(total)
    }

    /// Get the summed cost if this is a `Fixed` value.
    #[must_use]
    pub fn as_fixed(self) -> Option<u32> {
        match self {
            TotalCost::Fixed(value) => Some(value),
            TotalCost::Variable => None,
        }
    }
}

impl std::fmt::Display for TotalCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TotalCost::Fixed(value) => write!(f, "{value}"),
            TotalCost::Variable => f.write_str("X"),
        }
    }
}
