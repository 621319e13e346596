// src/specs/pirate.rs
//! Spec for `pirate.wm`.
//!
//! Layout:
//! - table 0, row 0, column 0: heading (`Name  Rank of the crew  Crew  …`)
//! - table 0, column 0, rows 1..: side panels; the one mentioning `Hearties`
//!   lists hearties, the one mentioning `Familiars` lists familiars
//! - table 3, column 1: reputation standings
//! - skills: anywhere on the page, see [`Skills::parse`]

use crate::core::TableGrid;
use crate::error::Result;
use crate::pirate::PirateSnapshot;
use crate::records::{Affiliations, Familiars, Hearties, Reputations, Skills};
use super::{cell, column, table};

const PAGE: &str = "pirate";

pub fn parse(name: &str, tables: &[TableGrid]) -> Result<PirateSnapshot> {
    let affiliations = Affiliations::parse(name, affiliation_text(tables)?);
    let reputations = Reputations::from_values(name, &reputation_values(tables)?);
    let skills = Skills::parse(name, tables);
    let hearties = Hearties::parse(name, side_panel(tables, "Hearties")?);
    let familiars = Familiars::parse(name, side_panel(tables, "Familiars")?);

    Ok(PirateSnapshot { affiliations, reputations, skills, hearties, familiars })
}

fn affiliation_text(tables: &[TableGrid]) -> Result<&str> {
    cell(tables, PAGE, 0, 0, 0)
}

fn reputation_values(tables: &[TableGrid]) -> Result<Vec<&str>> {
    column(tables, PAGE, 3, 1)
}

/// Column 0 of table 0 below the heading; the last cell mentioning `label` wins.
/// Absent panels are fine (no hearties, no familiars), an absent table is not.
fn side_panel<'g>(tables: &'g [TableGrid], label: &str) -> Result<Option<&'g str>> {
    Ok(table(tables, PAGE, 0)?
        .rows()
        .iter()
        .skip(1)
        .filter_map(|r| r.first())
        .map(String::as_str)
        .filter(|c| c.contains(label))
        .last())
}
