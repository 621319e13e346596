// src/pirate.rs

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::lazy::LazyPage;
use crate::ocean::Ocean;
use crate::paths;
use crate::records::{Affiliations, Familiars, Hearties, Reputations, Skills};
use crate::specs;

/// Everything parsed from one load of a pirate page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PirateSnapshot {
    pub affiliations: Affiliations,
    pub reputations: Reputations,
    pub skills: Skills,
    pub hearties: Hearties,
    pub familiars: Familiars,
}

/// Handle on a pirate's yoweb page.
///
/// Creating one is free. The first attribute read fetches and parses the page
/// once; later reads are served from that snapshot until [`Pirate::refresh`].
#[derive(Debug)]
pub struct Pirate<'o> {
    ocean: &'o Ocean,
    name: String,
    page: LazyPage<PirateSnapshot>,
}

impl<'o> Pirate<'o> {
    pub(crate) fn new(ocean: &'o Ocean, name: &str) -> Self {
        Self {
            ocean,
            name: s!(name),
            page: LazyPage::new(paths::pirate_url(ocean.base_url(), name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        self.page.url()
    }

    pub fn ocean(&self) -> &'o Ocean {
        self.ocean
    }

    pub fn is_loaded(&self) -> bool {
        self.page.is_loaded()
    }

    pub fn snapshot(&self) -> Result<Arc<PirateSnapshot>> {
        self.page
            .ensure_loaded(self.ocean.fetcher(), |tables| specs::pirate::parse(&self.name, tables))
    }

    /// Fetch again. The old snapshot stays in place if this fails.
    pub fn refresh(&self) -> Result<Arc<PirateSnapshot>> {
        self.page
            .refresh(self.ocean.fetcher(), |tables| specs::pirate::parse(&self.name, tables))
    }

    pub fn affiliations(&self) -> Result<Affiliations> {
        Ok(self.snapshot()?.affiliations.clone())
    }

    pub fn reputations(&self) -> Result<Reputations> {
        Ok(self.snapshot()?.reputations.clone())
    }

    pub fn skills(&self) -> Result<Skills> {
        Ok(self.snapshot()?.skills.clone())
    }

    pub fn hearties(&self) -> Result<Hearties> {
        Ok(self.snapshot()?.hearties.clone())
    }

    pub fn familiars(&self) -> Result<Familiars> {
        Ok(self.snapshot()?.familiars.clone())
    }
}

impl fmt::Display for Pirate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Pirate:{}>", self.name)
    }
}
