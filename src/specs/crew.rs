// src/specs/crew.rs
//! Spec for `crew/info.wm`.
//!
//! Layout:
//! - table 0, row 0, column 0: heading (`Crew  of the flag  Flag  Founded …` or
//!   `Crew  Founded …` for a crew without a flag)
//! - table 3, row 12, column 2: the "third frame", one cell holding politics,
//!   booty-share kind and ship restocking
//! - table 4, column 1: reputations
//! - table 5, column 1: booty shares per rank
//! - table 6: active mates
//! - table 8: member roster

use crate::core::TableGrid;
use crate::crew::CrewSnapshot;
use crate::error::{Result, YowebError};
use crate::records::crew::{FLAG_MARKER, FOUNDED_MARKER};
use crate::records::{ActiveMates, BootyShares, CrewAffiliations, CrewMembers, Reputations};
use super::{cell, column, piece_after, table};

const PAGE: &str = "crew";

const BOOTY_MARKER: &str = "  Booty";
const SHARES_MARKER: &str = "shares: ";
const RESTOCKING_MARKER: &str = "  Ship restocking:\u{a0}";
const ACTIVE_MARKER: &str = "  Active";

pub fn parse(tables: &[TableGrid]) -> Result<CrewSnapshot> {
    let heading = heading_text(tables)?;
    let name = crew_name(heading)?;

    let frame = third_frame(tables)?;
    let politics = politics(frame)?;
    let ship_restocking = ship_restocking(frame)?;
    let booty_kind = booty_share_kind(frame)?;

    let affiliations = CrewAffiliations::parse(&name, heading);
    let reputations = Reputations::from_values(&name, &column(tables, PAGE, 4, 1)?);
    let booty_shares = BootyShares::parse(&name, booty_kind, &column(tables, PAGE, 5, 1)?);
    let active_mates = ActiveMates::parse(&name, table(tables, PAGE, 6)?);
    let members = CrewMembers::parse(&name, table(tables, PAGE, 8)?);

    Ok(CrewSnapshot {
        name,
        politics,
        ship_restocking,
        affiliations,
        reputations,
        booty_shares,
        active_mates,
        members,
    })
}

fn heading_text(tables: &[TableGrid]) -> Result<&str> {
    cell(tables, PAGE, 0, 0, 0)
}

fn third_frame(tables: &[TableGrid]) -> Result<&str> {
    cell(tables, PAGE, 3, 12, 2)
}

/// Crew name from the heading. Two layouts exist: a crew in a flag prints
/// `Name  of the flag  Flag …`, a crew without one prints `Name  Founded …`.
pub fn crew_name(heading: &str) -> Result<String> {
    let name = if let Some((name, _)) = heading.split_once(FLAG_MARKER) {
        name
    } else if let Some((name, _)) = heading.split_once(FOUNDED_MARKER) {
        name
    } else {
        return Err(YowebError::parse(
            PAGE,
            format!("heading has neither flag nor founding marker: {heading:?}"),
        ));
    };
    Ok(s!(name.trim()))
}

/// `Politics: Democracy  Booty …` → `Democracy`
fn politics(frame: &str) -> Result<String> {
    let head = frame.split(BOOTY_MARKER).next().unwrap_or(frame);
    piece_after(head, ": ")
        .map(|p| s!(p.trim()))
        .ok_or_else(|| YowebError::parse(PAGE, "politics field missing from third frame"))
}

/// `… Booty shares: Autocratic  Ship …` → `Autocratic`
fn booty_share_kind(frame: &str) -> Result<&str> {
    piece_after(frame, SHARES_MARKER)
        .and_then(|rest| rest.split("  ").next())
        .map(str::trim)
        .ok_or_else(|| YowebError::parse(PAGE, "booty share kind missing from third frame"))
}

/// `…  Ship restocking:\u{a0}Automatic\u{a0}  Active …` → `Automatic`
fn ship_restocking(frame: &str) -> Result<String> {
    piece_after(frame, RESTOCKING_MARKER)
        .and_then(|rest| rest.split(ACTIVE_MARKER).next())
        .map(|v| s!(v.replace('\u{a0}', "").trim()))
        .ok_or_else(|| YowebError::parse(PAGE, "ship restocking missing from third frame"))
}
