// src/ocean.rs
//! The root handle: one game world.

use std::fmt;
use std::sync::Arc;

use crate::config::FetchOptions;
use crate::config::consts::SITE_ROOT;
use crate::crew::Crew;
use crate::error::{Result, YowebError};
use crate::fetch::{HttpTableFetcher, TableFetcher};
use crate::flag::Flag;
use crate::lazy::LazyPage;
use crate::paths;
use crate::pirate::Pirate;
use crate::records::TaxRates;
use crate::specs;

/// A game world (`emerald`, `meridian`, …) and the fetcher used to read it.
///
/// The ocean owns the fetcher; the [`Pirate`], [`Crew`] and [`Flag`] handles it
/// hands out borrow it, so they cannot outlive it. Handing out a handle never
/// touches the network. The ocean's own attribute, [`Ocean::tax_rates`], loads
/// lazily under the same rule as every other handle.
pub struct Ocean {
    world: String,
    base_url: String,
    fetcher: Box<dyn TableFetcher>,
    taxes: LazyPage<TaxRates>,
}

impl Ocean {
    /// Bind `world` to the live site over HTTP.
    pub fn new(world: &str) -> Result<Self> {
        Self::with_options(world, FetchOptions::default())
    }

    /// Like [`Ocean::new`], for callers holding an optional world name.
    pub fn from_world(world: Option<&str>) -> Result<Self> {
        let world = world.ok_or_else(|| YowebError::Config(s!("world name is not set")))?;
        Self::new(world)
    }

    pub fn with_options(world: &str, options: FetchOptions) -> Result<Self> {
        let world = checked_world(world)?;
        let fetcher = HttpTableFetcher::new(&options)?;
        Ok(Self::bind(world, &options.site_root, Box::new(fetcher)))
    }

    /// Bind `world` with a caller-supplied fetcher (captured pages, test fakes).
    /// URLs are still built against the live site root.
    pub fn with_fetcher<F>(world: &str, fetcher: F) -> Result<Self>
    where
        F: TableFetcher + 'static,
    {
        let world = checked_world(world)?;
        Ok(Self::bind(world, SITE_ROOT, Box::new(fetcher)))
    }

    fn bind(world: &str, site_root: &str, fetcher: Box<dyn TableFetcher>) -> Self {
        let base_url = paths::base_url(site_root, world);
        let taxes = LazyPage::new(paths::tax_rates_url(&base_url));
        logd!(world, base_url = %base_url, "ocean bound");
        Self { world: s!(world), base_url, fetcher, taxes }
    }

    pub fn world(&self) -> &str {
        &self.world
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pirate(&self, name: &str) -> Pirate<'_> {
        Pirate::new(self, name)
    }

    pub fn crew(&self, crew_id: u64) -> Crew<'_> {
        Crew::new(self, crew_id)
    }

    pub fn flag(&self, flag_id: u64) -> Flag<'_> {
        Flag::new(self, flag_id)
    }

    /// Tax rates of this world, fetched on first call.
    pub fn tax_rates(&self) -> Result<Arc<TaxRates>> {
        self.taxes
            .ensure_loaded(self.fetcher(), |tables| specs::taxes::parse(&self.world, tables))
    }

    /// Re-fetch the tax rates, replacing the cached ones on success.
    pub fn refresh(&self) -> Result<Arc<TaxRates>> {
        self.taxes
            .refresh(self.fetcher(), |tables| specs::taxes::parse(&self.world, tables))
    }

    pub fn is_loaded(&self) -> bool {
        self.taxes.is_loaded()
    }

    pub(crate) fn fetcher(&self) -> &dyn TableFetcher {
        self.fetcher.as_ref()
    }
}

fn checked_world(world: &str) -> Result<&str> {
    let world = world.trim();
    if world.is_empty() {
        return Err(YowebError::Config(s!("world name is empty")));
    }
    Ok(world)
}

impl fmt::Debug for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ocean")
            .field("world", &self.world)
            .field("base_url", &self.base_url)
            .field("taxes_loaded", &self.taxes.is_loaded())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Ocean:{}>", self.world)
    }
}
