//! Form synchronization: given the four input texts, the mixed payment flag
//! and the field the user just edited, work out the companion field texts
//! and the change due in both currencies.

use super::amount::{Amount, format_field, format_with_label, parse_amount};
use super::currency::{Currency, to_bgn, to_eur};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    PriceEur,
    PriceBgn,
    PaidEur,
    PaidBgn,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::PriceEur,
        Field::PriceBgn,
        Field::PaidEur,
        Field::PaidBgn,
    ];

    pub fn currency(&self) -> Currency {
        match self {
            Field::PriceEur | Field::PaidEur => Currency::Eur,
            Field::PriceBgn | Field::PaidBgn => Currency::Bgn,
        }
    }

    /// The same quantity held in the other currency.
    pub fn companion(&self) -> Field {
        match self {
            Field::PriceEur => Field::PriceBgn,
            Field::PriceBgn => Field::PriceEur,
            Field::PaidEur => Field::PaidBgn,
            Field::PaidBgn => Field::PaidEur,
        }
    }

    pub fn is_price(&self) -> bool {
        matches!(self, Field::PriceEur | Field::PriceBgn)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::PriceEur => "price-eur",
            Field::PriceBgn => "price-bgn",
            Field::PaidEur => "paid-eur",
            Field::PaidBgn => "paid-bgn",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown field: {}", s))
    }
}

/// Raw text of the four input fields, exactly as the user sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub price_eur: String,
    pub price_bgn: String,
    pub paid_eur: String,
    pub paid_bgn: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PriceEur => &self.price_eur,
            Field::PriceBgn => &self.price_bgn,
            Field::PaidEur => &self.paid_eur,
            Field::PaidBgn => &self.paid_bgn,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::PriceEur => &mut self.price_eur,
            Field::PriceBgn => &mut self.price_bgn,
            Field::PaidEur => &mut self.paid_eur,
            Field::PaidBgn => &mut self.paid_bgn,
        };
        *slot = text.into();
    }

    pub fn amount(&self, field: Field) -> Amount {
        parse_amount(self.get(field))
    }
}

/// Read-only change displays, already labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDisplay {
    pub eur: String,
    pub bgn: String,
}

impl ChangeDisplay {
    fn from_eur(change_eur: Amount) -> Self {
        Self {
            eur: format_with_label(change_eur, Currency::Eur),
            bgn: format_with_label(change_eur.map(to_bgn), Currency::Bgn),
        }
    }

    fn from_bgn(change_bgn: Amount) -> Self {
        Self {
            eur: format_with_label(change_bgn.map(to_eur), Currency::Eur),
            bgn: format_with_label(change_bgn, Currency::Bgn),
        }
    }

    fn placeholder() -> Self {
        Self::from_eur(Amount::NotANumber)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub fields: FormFields,
    /// Companion fields rewritten by this update, in write order.
    pub derived: Vec<Field>,
    pub change: ChangeDisplay,
}

/// Runs one synchronization pass. Never touches the text of `edited`.
pub fn compute_form_state(
    fields: &FormFields,
    mixed_mode: bool,
    edited: Option<Field>,
) -> FormState {
    let mut fields = fields.clone();
    let mut derived = Vec::new();

    // Paid fields are independent amounts in mixed mode
    if let Some(source) = edited.filter(|f| f.is_price() || !mixed_mode) {
        let companion = source.companion();
        let value = fields
            .amount(source)
            .map(|v| source.currency().convert_to(v, companion.currency()));
        fields.set(companion, format_field(value));
        derived.push(companion);
    }

    let change = if mixed_mode {
        mixed_change(&fields)
    } else {
        single_currency_change(&fields)
    };
    debug!(?edited, mixed_mode, ?change, "Recomputed form");

    FormState {
        fields,
        derived,
        change,
    }
}

fn single_currency_change(fields: &FormFields) -> ChangeDisplay {
    let pairs = [
        (Field::PriceEur, Field::PaidEur),
        (Field::PriceBgn, Field::PaidBgn),
    ];
    for (price_field, paid_field) in pairs {
        if let (Amount::Value(price), Amount::Value(paid)) =
            (fields.amount(price_field), fields.amount(paid_field))
        {
            let change = Amount::from(paid - price);
            return match price_field.currency() {
                Currency::Eur => ChangeDisplay::from_eur(change),
                Currency::Bgn => ChangeDisplay::from_bgn(change),
            };
        }
    }
    ChangeDisplay::placeholder()
}

fn mixed_change(fields: &FormFields) -> ChangeDisplay {
    let price_eur = match fields.amount(Field::PriceEur) {
        Amount::Value(v) => Some(v),
        Amount::NotANumber => fields.amount(Field::PriceBgn).value().map(to_eur),
    };
    let paid_parts: Vec<f64> = [
        fields.amount(Field::PaidEur).value(),
        fields.amount(Field::PaidBgn).value().map(to_eur),
    ]
    .into_iter()
    .flatten()
    .collect();

    match price_eur {
        Some(price) if !paid_parts.is_empty() => {
            let paid: f64 = paid_parts.iter().sum();
            ChangeDisplay::from_eur(Amount::from(paid - price))
        }
        _ => ChangeDisplay::placeholder(),
    }
}
