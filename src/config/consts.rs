// src/config/consts.rs

// Net config
pub const SITE_ROOT: &str = "puzzlepirates.com";
pub const USER_AGENT: &str = concat!("yoweb/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// URL templates. These must match the live site byte for byte.
pub const BASE_URL_TMPL: &str = "http://{world}.{site}/yoweb/";
pub const PIRATE_PATH_TMPL: &str = "pirate.wm?classic=$classic&target={key}";
pub const CREW_PATH_TMPL: &str = "crew/info.wm?crewid={key}&classic=false";
pub const FLAG_PATH_TMPL: &str = "flag/info.wm?flagid={key}&classic=false";
pub const TAX_RATES_PATH: &str = "econ/taxrates.wm";
