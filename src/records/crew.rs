// src/records/crew.rs
//! Records found on a crew page.

use crate::core::TableGrid;
use crate::core::sanitize::{normalize_ws, split_segments};
use crate::ocean::Ocean;
use crate::pirate::Pirate;

pub(crate) const FLAG_MARKER: &str = "  of the flag  ";
pub(crate) const FOUNDED_MARKER: &str = "  Founded";

/// Heading of a crew page: flag membership and founding line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrewAffiliations {
    pub crew: String,
    pub flag: Option<String>,
    pub founded: Option<String>,
    pub segments: Vec<String>,
}

impl CrewAffiliations {
    pub fn parse(crew: &str, text: &str) -> Self {
        let flag = text
            .split(FLAG_MARKER)
            .nth(1)
            .and_then(|rest| rest.split("  ").next())
            .map(normalize_ws)
            .filter(|f| !f.is_empty());

        let segments = split_segments(text);
        let founded = segments
            .iter()
            .find_map(|s| s.strip_prefix("Founded"))
            .map(normalize_ws)
            .filter(|f| !f.is_empty());

        Self { crew: s!(crew), flag, founded, segments }
    }
}

/// How booty is split, plus the per-rank share column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootyShares {
    pub crew: String,
    /// e.g. `Autocratic`, `Equal`
    pub kind: String,
    pub shares: Vec<String>,
}

impl BootyShares {
    pub fn parse(crew: &str, kind: &str, values: &[&str]) -> Self {
        Self {
            crew: s!(crew),
            kind: normalize_ws(kind),
            shares: values.iter().map(|v| normalize_ws(v)).collect(),
        }
    }
}

/// Activity table: one row per line the site prints, blank rows dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveMates {
    pub crew: String,
    pub rows: Vec<Vec<String>>,
}

impl ActiveMates {
    pub fn parse(crew: &str, table: &TableGrid) -> Self {
        let rows = table
            .rows()
            .iter()
            .map(|r| r.iter().map(|c| normalize_ws(c)).collect::<Vec<_>>())
            .filter(|r| r.iter().any(|c| !c.is_empty()))
            .collect();
        Self { crew: s!(crew), rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rank headings as the roster prints them: singular and plural.
const CREW_RANKS: &[(&str, &str)] = &[
    ("Captain", "Captains"),
    ("Senior Officer", "Senior Officers"),
    ("Fleet Officer", "Fleet Officers"),
    ("Officer", "Officers"),
    ("Pirate", "Pirates"),
    ("Cabin Person", "Cabin People"),
    ("Jobbing Pirate", "Jobbing Pirates"),
];

fn rank_heading(cell: &str) -> Option<&'static str> {
    CREW_RANKS
        .iter()
        .find(|(one, many)| cell.eq_ignore_ascii_case(one) || cell.eq_ignore_ascii_case(many))
        .map(|(one, _)| *one)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrewMember {
    pub name: String,
    /// Singular rank of the heading the name was listed under.
    pub rank: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrewMembers {
    pub crew: String,
    pub members: Vec<CrewMember>,
}

impl CrewMembers {
    /// Walk the roster top to bottom. A rank heading applies to every name after
    /// it until the next heading. A name cell may carry extra words after the
    /// pirate name; only the first word is kept.
    pub fn parse(crew: &str, table: &TableGrid) -> Self {
        let mut rank: Option<&str> = None;
        let mut members = Vec::new();

        for cell in table.rows().iter().flatten() {
            let cell = normalize_ws(cell);
            if cell.is_empty() { continue; }
            if let Some(heading) = rank_heading(&cell) {
                rank = Some(heading);
                continue;
            }
            if let Some(name) = cell.split(' ').next() {
                members.push(CrewMember { name: s!(name), rank: rank.map(String::from) });
            }
        }
        Self { crew: s!(crew), members }
    }

    pub fn with_rank<'a>(&'a self, rank: &'a str) -> impl Iterator<Item = &'a CrewMember> {
        self.members
            .iter()
            .filter(move |m| m.rank.as_deref().is_some_and(|r| r.eq_ignore_ascii_case(rank)))
    }

    pub fn pirates<'o>(&self, ocean: &'o Ocean) -> Vec<Pirate<'o>> {
        self.members.iter().map(|m| ocean.pirate(&m.name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affiliations_with_flag() {
        let a = CrewAffiliations::parse(
            "Sea Dogs",
            "Sea Dogs  of the flag  Blue Tide  Founded on 2005-04-03",
        );
        assert_eq!(a.flag.as_deref(), Some("Blue Tide"));
        assert_eq!(a.founded.as_deref(), Some("on 2005-04-03"));
    }

    #[test]
    fn affiliations_without_flag() {
        let a = CrewAffiliations::parse("Loners", "Loners  Founded on 2010-01-01");
        assert_eq!(a.flag, None);
        assert_eq!(a.founded.as_deref(), Some("on 2010-01-01"));
    }

    #[test]
    fn roster_assigns_ranks_from_headings() {
        let table = TableGrid::from_rows(&[
            &["Captain"],
            &["Jack"],
            &["Senior Officers"],
            &["Anne", "Bonny (on leave)"],
            &["Cabin People"],
            &["Tiny"],
        ]);
        let m = CrewMembers::parse("Sea Dogs", &table);
        assert_eq!(m.members.len(), 4);
        assert_eq!(m.members[0].rank.as_deref(), Some("Captain"));
        assert_eq!(m.members[2].name, "Bonny");
        assert_eq!(m.with_rank("senior officer").count(), 2);
        assert_eq!(m.members[3].rank.as_deref(), Some("Cabin Person"));
    }

    #[test]
    fn active_mates_drop_blank_rows() {
        let table = TableGrid::from_rows(&[&["Today", "5"], &["", " "], &["This week", "12"]]);
        let a = ActiveMates::parse("Sea Dogs", &table);
        assert_eq!(a.len(), 2);
        assert_eq!(a.rows[1], vec!["This week", "12"]);
    }
}
