// src/flag.rs

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::lazy::LazyPage;
use crate::ocean::Ocean;
use crate::paths;
use crate::records::{FlagInfo, Reputations};
use crate::specs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagSnapshot {
    pub info: FlagInfo,
    pub reputations: Reputations,
}

/// Handle on a flag's info page.
#[derive(Debug)]
pub struct Flag<'o> {
    ocean: &'o Ocean,
    id: u64,
    page: LazyPage<FlagSnapshot>,
}

impl<'o> Flag<'o> {
    pub(crate) fn new(ocean: &'o Ocean, id: u64) -> Self {
        Self { ocean, id, page: LazyPage::new(paths::flag_url(ocean.base_url(), id)) }
    }

    pub fn id(&self) -> u64 {
        self.id
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

    pub fn snapshot(&self) -> Result<Arc<FlagSnapshot>> {
        self.page.ensure_loaded(self.ocean.fetcher(), specs::flag::parse)
    }

    pub fn refresh(&self) -> Result<Arc<FlagSnapshot>> {
        self.page.refresh(self.ocean.fetcher(), specs::flag::parse)
    }

    pub fn name(&self) -> Result<String> {
        Ok(self.snapshot()?.info.name.clone())
    }

    pub fn info(&self) -> Result<FlagInfo> {
        Ok(self.snapshot()?.info.clone())
    }

    pub fn reputations(&self) -> Result<Reputations> {
        Ok(self.snapshot()?.reputations.clone())
    }
}

impl fmt::Display for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Flag:{}>", self.id)
    }
}
