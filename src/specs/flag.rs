// src/specs/flag.rs
//! Spec for `flag/info.wm`.
//!
//! Layout:
//! - table 0, row 0, column 0: heading, flag name first
//! - reputations: the first table whose column 0 names all four reputations

use crate::core::TableGrid;
use crate::error::{Result, YowebError};
use crate::flag::FlagSnapshot;
use crate::records::{FlagInfo, ReputationKind, Reputations};
use super::cell;

const PAGE: &str = "flag";

pub fn parse(tables: &[TableGrid]) -> Result<FlagSnapshot> {
    let info = FlagInfo::parse(heading_text(tables)?)
        .ok_or_else(|| YowebError::parse(PAGE, "flag heading is empty"))?;
    let reputations = Reputations::from_labelled(&info.name, reputation_table(tables)?.rows());

    Ok(FlagSnapshot { info, reputations })
}

fn heading_text(tables: &[TableGrid]) -> Result<&str> {
    cell(tables, PAGE, 0, 0, 0)
}

fn reputation_table(tables: &[TableGrid]) -> Result<&TableGrid> {
    tables
        .iter()
        .find(|t| {
            let labels = t.column(0);
            ReputationKind::ALL
                .iter()
                .all(|k| labels.iter().flatten().any(|l| ReputationKind::from_label(l) == Some(*k)))
        })
        .ok_or_else(|| YowebError::parse(PAGE, "no reputation table"))
}
