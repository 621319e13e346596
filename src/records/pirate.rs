// src/records/pirate.rs
//! Records found on a pirate page.

use std::collections::HashSet;

use crate::core::TableGrid;
use crate::core::sanitize::{normalize_ws, split_segments};
use crate::ocean::Ocean;
use crate::pirate::Pirate;

const CREW_MARKER: &str = "of the crew";
const FLAG_MARKER: &str = "of the flag";

/// A rank held in a crew or flag, e.g. `Officer` of `Sea Dogs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    pub rank: Option<String>,
    pub name: String,
}

/// The pirate's heading line: crew and flag standing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affiliations {
    pub pirate: String,
    /// Raw double-space separated parts of the heading.
    pub segments: Vec<String>,
    pub crew: Option<Membership>,
    pub flag: Option<Membership>,
}

impl Affiliations {
    /// `text` reads like `Jack  Officer of the crew  Sea Dogs  and Lord of the flag  Blue`.
    pub fn parse(pirate: &str, text: &str) -> Self {
        let segments = split_segments(text);
        let crew = membership(&segments, CREW_MARKER);
        let flag = membership(&segments, FLAG_MARKER);
        Self { pirate: s!(pirate), segments, crew, flag }
    }
}

/// The segment ending in `marker` carries the rank; the one after it the name.
fn membership(segments: &[String], marker: &str) -> Option<Membership> {
    let at = segments.iter().position(|s| s.ends_with(marker))?;
    let name = segments.get(at + 1)?.clone();
    let rank = segments[at]
        .strip_suffix(marker)
        .map(|r| r.trim())
        .map(|r| r.strip_prefix("and ").unwrap_or(r).trim())
        .filter(|r| !r.is_empty())
        .map(String::from);
    Some(Membership { rank, name })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Piracy,
    Carousing,
    Crafting,
}

const KNOWN_SKILLS: &[(&str, SkillCategory)] = &[
    ("Sailing", SkillCategory::Piracy),
    ("Rigging", SkillCategory::Piracy),
    ("Carpentry", SkillCategory::Piracy),
    ("Patching", SkillCategory::Piracy),
    ("Bilging", SkillCategory::Piracy),
    ("Gunning", SkillCategory::Piracy),
    ("Treasure Haul", SkillCategory::Piracy),
    ("Duty Navigation", SkillCategory::Piracy),
    ("Battle Navigation", SkillCategory::Piracy),
    ("Swordfighting", SkillCategory::Piracy),
    ("Rumble", SkillCategory::Piracy),
    ("Drinking", SkillCategory::Carousing),
    ("Spades", SkillCategory::Carousing),
    ("Hearts", SkillCategory::Carousing),
    ("Treasure Drop", SkillCategory::Carousing),
    ("Poker", SkillCategory::Carousing),
    ("Distilling", SkillCategory::Crafting),
    ("Alchemistry", SkillCategory::Crafting),
    ("Shipwrightery", SkillCategory::Crafting),
    ("Blacksmithing", SkillCategory::Crafting),
    ("Foraging", SkillCategory::Crafting),
    ("Weaving", SkillCategory::Crafting),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// e.g. `Master`
    pub experience: String,
    /// e.g. `Grand-Master`
    pub rating: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skills {
    pub pirate: String,
    pub entries: Vec<Skill>,
}

impl Skills {
    /// Scan every row of every table for `<skill> | <experience>/<rating>` pairs.
    /// First occurrence of a skill wins.
    pub fn parse(pirate: &str, tables: &[TableGrid]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for row in tables.iter().flat_map(TableGrid::rows) {
            for pair in row.windows(2) {
                let name = normalize_ws(&pair[0]);
                let Some(category) = category_of(&name) else { continue };
                let Some((experience, rating)) = pair[1].split_once('/') else { continue };
                if !seen.insert(name.clone()) { continue; }

                entries.push(Skill {
                    name,
                    category,
                    experience: normalize_ws(experience),
                    rating: normalize_ws(rating),
                });
            }
        }
        Self { pirate: s!(pirate), entries }
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.entries.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn in_category(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.entries.iter().filter(move |s| s.category == category)
    }
}

fn category_of(name: &str) -> Option<SkillCategory> {
    KNOWN_SKILLS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, category)| *category)
}

/// Names listed after `label` in a double-space separated cell.
fn listed_after(text: Option<&str>, label: &str) -> Vec<String> {
    let Some(text) = text else { return Vec::new() };
    let segments = split_segments(text);
    match segments.iter().position(|s| s.contains(label)) {
        Some(at) => segments.into_iter().skip(at + 1).collect(),
        None => Vec::new(),
    }
}

/// The pirate's hearties (friends list).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hearties {
    pub pirate: String,
    pub names: Vec<String>,
}

impl Hearties {
    /// `text` is the page cell that mentions `Hearties`, or `None` if there is none.
    pub fn parse(pirate: &str, text: Option<&str>) -> Self {
        Self { pirate: s!(pirate), names: listed_after(text, "Hearties") }
    }

    /// Handles for every heartie, bound to the same ocean. No fetches happen here.
    pub fn pirates<'o>(&self, ocean: &'o Ocean) -> Vec<Pirate<'o>> {
        self.names.iter().map(|n| ocean.pirate(n)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Familiars {
    pub pirate: String,
    pub entries: Vec<String>,
}

impl Familiars {
    pub fn parse(pirate: &str, text: Option<&str>) -> Self {
        Self { pirate: s!(pirate), entries: listed_after(text, "Familiars") }
    }
}
