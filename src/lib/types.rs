use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ExtractError;

/// Textual date layout used by the invoice table, e.g. "15-Jan-2020".
pub const DATE_FORMAT: &str = "%d-%b-%Y";

#[derive(Debug, Default, Hash, Eq, PartialEq, Clone)]
pub struct CustomerCode(String);

impl CustomerCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default, Hash, Eq, PartialEq, Clone)]
pub struct InvoiceCode(String);

impl InvoiceCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A decimal amount as it appeared in the source file. `Decimal` keeps the
/// textual scale, so re-rendering reproduces the input digits unchanged.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    pub fn parse(value: &str) -> Result<Self, ExtractError> {
        Decimal::from_str(value)
            .map(Self)
            .map_err(|source| ExtractError::InvalidAmount {
                value: value.to_string(),
                source,
            })
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invoice date, parsed strictly from [`DATE_FORMAT`] and rendered back in
/// the same format. The round-trip is exact.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct InvoiceDate(NaiveDate);

impl InvoiceDate {
    pub fn parse(value: &str) -> Result<Self, ExtractError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|source| ExtractError::InvalidDate {
                value: value.to_string(),
                source,
            })
    }
}

impl fmt::Display for InvoiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct Quantity(i64);

impl Quantity {
    pub fn parse(value: &str) -> Result<Self, ExtractError> {
        value
            .parse::<i64>()
            .map(Self)
            .map_err(|source| ExtractError::InvalidQuantity {
                value: value.to_string(),
                source,
            })
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// One row of the customer table.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Customer {
    pub code: CustomerCode,
    pub firstname: String,
    pub lastname: String,
}

/// One row of the invoice table. `customer` is a foreign key into the
/// customer table.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Invoice {
    pub customer: CustomerCode,
    pub code: InvoiceCode,
    pub amount: MonetaryAmount,
    pub date: InvoiceDate,
}

/// One row of the invoice item table. `invoice` is a foreign key into the
/// invoice table.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Item {
    pub invoice: InvoiceCode,
    pub code: String,
    pub amount: MonetaryAmount,
    pub quantity: Quantity,
}
