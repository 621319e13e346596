// src/fetch.rs
//! The fetch boundary: URL in, parsed table grids out.

use reqwest::blocking::Client;

use crate::config::FetchOptions;
use crate::core::{html, net, TableGrid};
use crate::error::{Result, YowebError};

/// Anything that can turn a page URL into its table grids.
///
/// The HTTP implementation is the default; tests and offline tools plug in their
/// own (captured pages, counting fakes).
pub trait TableFetcher: Send + Sync {
    fn fetch_tables(&self, url: &str) -> Result<Vec<TableGrid>>;
}

#[derive(Debug, Clone)]
pub struct HttpTableFetcher {
    client: Client,
}

impl HttpTableFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        Ok(Self { client: net::build_client(options)? })
    }
}

impl TableFetcher for HttpTableFetcher {
    fn fetch_tables(&self, url: &str) -> Result<Vec<TableGrid>> {
        let doc = net::http_get(&self.client, url)?;
        let tables = html::extract_tables(&doc);
        logd!(url, tables = tables.len(), "extracted tables");
        Ok(tables)
    }
}

/// Serve pages from memory. Keys are full URLs, values raw HTML.
#[derive(Debug, Clone, Default)]
pub struct StaticTableFetcher {
    pages: Vec<(String, String)>,
}

impl StaticTableFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.push((s!(url), s!(html)));
        self
    }
}

impl TableFetcher for StaticTableFetcher {
    fn fetch_tables(&self, url: &str) -> Result<Vec<TableGrid>> {
        let (_, doc) = self
            .pages
            .iter()
            .find(|(u, _)| u == url)
            .ok_or_else(|| YowebError::fetch(url, "HTTP error: 404 Not Found"))?;
        Ok(html::extract_tables(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_fetcher_serves_known_urls_only() {
        let f = StaticTableFetcher::new()
            .with_page("http://a/", "<table><tr><td>x</td></tr></table>");
        let tables = f.fetch_tables("http://a/").unwrap();
        assert_eq!(tables[0].cell(0, 0), Some("x"));

        let err = f.fetch_tables("http://b/").unwrap_err();
        assert!(err.is_fetch());
    }

    #[test]
    fn http_fetcher_rejects_bad_options() {
        let opts = FetchOptions::default().with_site_root("");
        assert!(HttpTableFetcher::new(&opts).unwrap_err().is_config());
    }
}
