// src/lib.rs
//! Read-only client for Puzzle Pirates yoweb pages.
//!
//! ```no_run
//! # fn main() -> yoweb::Result<()> {
//! let ocean = yoweb::Ocean::new("emerald")?;
//! let crew = ocean.crew(5001234);      // no I/O yet
//! println!("{} runs a {}", crew.name()?, crew.politics()?); // one fetch
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod lazy;
pub mod paths;
pub mod records;
pub mod specs;

pub mod crew;
pub mod flag;
pub mod ocean;
pub mod pirate;

pub use config::FetchOptions;
pub use crate::core::TableGrid;
pub use crew::{Crew, CrewSnapshot};
pub use error::{Result, YowebError};
pub use fetch::{HttpTableFetcher, StaticTableFetcher, TableFetcher};
pub use flag::{Flag, FlagSnapshot};
pub use ocean::Ocean;
pub use pirate::{Pirate, PirateSnapshot};
