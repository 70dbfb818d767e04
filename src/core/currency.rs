//! The two currencies of the till and the fixed rate between them

use serde::{Deserialize, Serialize};

/// 1 EUR = 1.95583 BGN, fixed by the currency board.
pub const RATE: f64 = 1.95583;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Eur,
    Bgn,
}

impl Currency {
    /// Suffix shown after amounts on the change displays.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Bgn => "лв.",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Bgn => "BGN",
        }
    }

    /// Converts an amount held in `self` into `target`.
    pub fn convert_to(&self, amount: f64, target: Currency) -> f64 {
        match (self, target) {
            (Currency::Eur, Currency::Bgn) => to_bgn(amount),
            (Currency::Bgn, Currency::Eur) => to_eur(amount),
            _ => amount,
        }
    }
}

pub fn to_bgn(eur: f64) -> f64 {
    eur * RATE
}

pub fn to_eur(bgn: f64) -> f64 {
    bgn / RATE
}
