// src/records/flag.rs

use crate::core::sanitize::split_segments;

/// Heading of a flag page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagInfo {
    pub name: String,
    /// Remaining double-space separated parts of the heading, in page order.
    pub details: Vec<String>,
}

impl FlagInfo {
    /// `None` if the heading has no text at all.
    pub fn parse(text: &str) -> Option<Self> {
        let mut segments = split_segments(text).into_iter();
        let name = segments.next()?;
        Some(Self { name, details: segments.collect() })
    }
}
