// tests/common/mod.rs
//
// Shared fixtures: a fetcher that counts calls, and grids in the shape each
// yoweb page has today.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use yoweb::{Result, TableFetcher, TableGrid, YowebError};

pub const BASE: &str = "http://emerald.puzzlepirates.com/yoweb/";

pub fn pirate_url(name: &str) -> String {
    format!("{BASE}pirate.wm?classic=$classic&target={name}")
}

pub fn crew_url(id: u64) -> String {
    format!("{BASE}crew/info.wm?crewid={id}&classic=false")
}

pub fn flag_url(id: u64) -> String {
    format!("{BASE}flag/info.wm?flagid={id}&classic=false")
}

pub fn tax_url() -> String {
    format!("{BASE}econ/taxrates.wm")
}

/// Routes the crate's log output to the test harness; `RUST_LOG=yoweb=debug`
/// shows every fetch. Safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type Pages = Arc<Mutex<HashMap<String, Vec<TableGrid>>>>;

/// Serves grids by URL and counts every call, successful or not.
pub struct CountingFetcher {
    pages: Pages,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    delay_ms: Arc<AtomicU64>,
}

/// The test's side of a `CountingFetcher` that has been moved into an `Ocean`.
#[derive(Clone)]
pub struct Probe {
    pages: Pages,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    delay_ms: Arc<AtomicU64>,
}

impl CountingFetcher {
    pub fn new() -> (Self, Probe) {
        let pages: Pages = Arc::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let failing = Arc::new(AtomicBool::new(false));
        let delay_ms = Arc::new(AtomicU64::new(0));
        let probe = Probe {
            pages: pages.clone(),
            calls: calls.clone(),
            failing: failing.clone(),
            delay_ms: delay_ms.clone(),
        };
        (Self { pages, calls, failing, delay_ms }, probe)
    }
}

impl Probe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make every fetch sleep first, so concurrent callers overlap.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn serve(&self, url: &str, tables: Vec<TableGrid>) {
        self.pages.lock().unwrap().insert(url.to_string(), tables);
    }
}

impl TableFetcher for CountingFetcher {
    fn fetch_tables(&self, url: &str) -> Result<Vec<TableGrid>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            thread::sleep(Duration::from_millis(delay));
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(YowebError::Fetch { url: url.to_string(), message: "connection reset".into() });
        }
        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| YowebError::Fetch { url: url.to_string(), message: "HTTP error: 404".into() })
    }
}

pub fn pirate_page(heading: &str) -> Vec<TableGrid> {
    vec![
        TableGrid::from_rows(&[&[heading], &["Hearties  Anne  Bonny"]]),
        TableGrid::from_rows(&[&["Sailing", "Master/Grand-Master"]]),
        TableGrid::default(),
        TableGrid::from_rows(&[
            &["Conqueror", "Respected"],
            &["Explorer", "Distinguished"],
            &["Patron", "Admired"],
            &["Magnate", "Legendary"],
        ]),
    ]
}

pub const FRAME: &str =
    "Politics: Democracy  Booty shares: Autocratic  Ship restocking:\u{a0}Automatic\u{a0}  Active mates: 12";

pub fn crew_page(heading: &str, politics: &str) -> Vec<TableGrid> {
    let frame = FRAME.replace("Democracy", politics);
    let mut frame_rows: Vec<Vec<String>> = (0..12).map(|_| vec![String::new()]).collect();
    frame_rows.push(vec![String::new(), String::new(), frame]);

    vec![
        TableGrid::from_rows(&[&[heading]]),
        TableGrid::default(),
        TableGrid::default(),
        TableGrid::new(frame_rows),
        TableGrid::from_rows(&[&["Conqueror", "Feared"], &["Explorer", "Noted"]]),
        TableGrid::from_rows(&[&["Captain", "10"], &["Pirate", "5"]]),
        TableGrid::from_rows(&[&["Today", "3"]]),
        TableGrid::default(),
        TableGrid::from_rows(&[&["Captain"], &["Jack"], &["Pirates"], &["Anne"]]),
    ]
}

pub fn flag_page(name: &str) -> Vec<TableGrid> {
    let heading = format!("{name}  Monarch: Jack");
    vec![
        TableGrid::from_rows(&[&[heading.as_str()]]),
        TableGrid::from_rows(&[
            &["Conqueror", "Feared"],
            &["Explorer", "Noted"],
            &["Patron", "Admired"],
            &["Magnate", "Renowned"],
        ]),
    ]
}

pub fn tax_page(iron: u32) -> Vec<TableGrid> {
    let iron = iron.to_string();
    vec![TableGrid::from_rows(&[&["Commodity", "Tax"], &["Iron", iron.as_str()], &["Wood", "5"]])]
}
