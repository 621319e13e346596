// src/specs/taxes.rs
//! Spec for `econ/taxrates.wm`: every `commodity | rate` row on the page.

use crate::core::TableGrid;
use crate::error::{Result, YowebError};
use crate::records::TaxRates;

const PAGE: &str = "tax rates";

pub fn parse(ocean: &str, tables: &[TableGrid]) -> Result<TaxRates> {
    if tables.is_empty() {
        return Err(YowebError::parse(PAGE, "page has no tables"));
    }
    let rates = TaxRates::parse(ocean, tables);
    if rates.is_empty() {
        return Err(YowebError::parse(PAGE, "no commodity rows found"));
    }
    Ok(rates)
}
