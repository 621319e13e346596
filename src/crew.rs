// src/crew.rs

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::lazy::LazyPage;
use crate::ocean::Ocean;
use crate::paths;
use crate::records::{ActiveMates, BootyShares, CrewAffiliations, CrewMembers, Reputations};
use crate::specs;

/// Everything parsed from one load of a crew page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrewSnapshot {
    pub name: String,
    pub politics: String,
    pub ship_restocking: String,
    pub affiliations: CrewAffiliations,
    pub reputations: Reputations,
    pub booty_shares: BootyShares,
    pub active_mates: ActiveMates,
    pub members: CrewMembers,
}

/// Handle on a crew's info page. Same load-on-first-read contract as [`crate::Pirate`].
#[derive(Debug)]
pub struct Crew<'o> {
    ocean: &'o Ocean,
    id: u64,
    page: LazyPage<CrewSnapshot>,
}

impl<'o> Crew<'o> {
    pub(crate) fn new(ocean: &'o Ocean, id: u64) -> Self {
        Self { ocean, id, page: LazyPage::new(paths::crew_url(ocean.base_url(), id)) }
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

    pub fn snapshot(&self) -> Result<Arc<CrewSnapshot>> {
        self.page.ensure_loaded(self.ocean.fetcher(), specs::crew::parse)
    }

    pub fn refresh(&self) -> Result<Arc<CrewSnapshot>> {
        self.page.refresh(self.ocean.fetcher(), specs::crew::parse)
    }

    /// Crew name as printed in the page heading.
    pub fn name(&self) -> Result<String> {
        Ok(self.snapshot()?.name.clone())
    }

    pub fn politics(&self) -> Result<String> {
        Ok(self.snapshot()?.politics.clone())
    }

    pub fn ship_restocking(&self) -> Result<String> {
        Ok(self.snapshot()?.ship_restocking.clone())
    }

    pub fn affiliations(&self) -> Result<CrewAffiliations> {
        Ok(self.snapshot()?.affiliations.clone())
    }

    pub fn reputations(&self) -> Result<Reputations> {
        Ok(self.snapshot()?.reputations.clone())
    }

    pub fn booty_shares(&self) -> Result<BootyShares> {
        Ok(self.snapshot()?.booty_shares.clone())
    }

    pub fn active_mates(&self) -> Result<ActiveMates> {
        Ok(self.snapshot()?.active_mates.clone())
    }

    pub fn members(&self) -> Result<CrewMembers> {
        Ok(self.snapshot()?.members.clone())
    }
}

impl fmt::Display for Crew<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Crew:{}>", self.id)
    }
}
