// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::error::{Result, YowebError};

/// Transport settings for the HTTP table fetcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Domain the world name is prefixed to. Only worth changing for a mirror.
    pub site_root: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            site_root: s!(SITE_ROOT),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FetchOptions {
    pub fn with_site_root(mut self, site_root: &str) -> Self {
        self.site_root = s!(site_root);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.site_root.trim().is_empty() {
            return Err(YowebError::Config(s!("site root is empty")));
        }
        if self.timeout.is_zero() {
            return Err(YowebError::Config(s!("request timeout must be non-zero")));
        }
        Ok(())
    }
}
