// src/records/taxes.rs

use crate::core::TableGrid;
use crate::core::sanitize::normalize_ws;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxRate {
    pub commodity: String,
    pub rate: u32,
}

/// Commodity tax rates of one ocean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxRates {
    pub ocean: String,
    pub rates: Vec<TaxRate>,
}

impl TaxRates {
    /// Every `commodity | rate` row across the page. Header rows and layout
    /// tables drop out because their second cell is not a number.
    pub fn parse(ocean: &str, tables: &[TableGrid]) -> Self {
        let rates = tables
            .iter()
            .flat_map(TableGrid::rows)
            .filter_map(|row| tax_row(row))
            .collect();
        Self { ocean: s!(ocean), rates }
    }

    pub fn rate(&self, commodity: &str) -> Option<u32> {
        let commodity = normalize_ws(commodity);
        self.rates
            .iter()
            .find(|r| r.commodity.eq_ignore_ascii_case(&commodity))
            .map(|r| r.rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// `commodity | rate`, where the rate may carry a trailing `%` and thousands
/// separators (`1,000`).
fn tax_row(row: &[String]) -> Option<TaxRate> {
    let commodity = normalize_ws(row.first()?);
    if commodity.is_empty() { return None; }
    let rate = row.get(1)?.trim().trim_end_matches('%').trim().replace(',', "");
    let rate = rate.parse::<u32>().ok()?;
    Some(TaxRate { commodity, rate })
}
