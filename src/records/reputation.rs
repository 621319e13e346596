// src/records/reputation.rs

use crate::core::sanitize::normalize_ws;

/// The four reputations, in the order every yoweb page lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReputationKind {
    Conqueror,
    Explorer,
    Patron,
    Magnate,
}

impl ReputationKind {
    pub const ALL: [Self; 4] = [Self::Conqueror, Self::Explorer, Self::Patron, Self::Magnate];

    pub fn label(self) -> &'static str {
        match self {
            Self::Conqueror => "Conqueror",
            Self::Explorer => "Explorer",
            Self::Patron => "Patron",
            Self::Magnate => "Magnate",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = normalize_ws(s);
        Self::ALL.into_iter().find(|k| s.eq_ignore_ascii_case(k.label()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Reputation standings of a pirate, crew or flag, in [`ReputationKind::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reputations {
    pub owner: String,
    pub standings: Vec<String>,
}

impl Reputations {
    /// Standings given positionally (one value column of the reputation table).
    pub fn from_values(owner: &str, values: &[&str]) -> Self {
        Self {
            owner: s!(owner),
            standings: values.iter().map(|v| normalize_ws(v)).collect(),
        }
    }

    /// Standings given as `label | value` rows. Unknown labels are ignored and a
    /// kind with no row gets an empty standing.
    pub fn from_labelled(owner: &str, rows: &[Vec<String>]) -> Self {
        let mut standings = vec![s!(); ReputationKind::ALL.len()];
        for row in rows {
            let (Some(label), Some(value)) = (row.first(), row.get(1)) else { continue };
            if let Some(kind) = ReputationKind::from_label(label) {
                standings[kind.index()] = normalize_ws(value);
            }
        }
        Self { owner: s!(owner), standings }
    }

    pub fn standing(&self, kind: ReputationKind) -> Option<&str> {
        self.standings
            .get(kind.index())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}
