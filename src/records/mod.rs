// src/records/mod.rs
//! Domain records built by the page specs.
//!
//! Each record is a small, self-contained parser over the cells a spec hands it:
//! the spec decides *where* the text lives, the record decides *what it means*.
//! Records never fetch and never index into the page layout themselves.

pub mod crew;
pub mod flag;
pub mod pirate;
pub mod reputation;
pub mod taxes;

pub use crew::{ActiveMates, BootyShares, CrewAffiliations, CrewMember, CrewMembers};
pub use flag::FlagInfo;
pub use pirate::{Affiliations, Familiars, Hearties, Membership, Skill, SkillCategory, Skills};
pub use reputation::{ReputationKind, Reputations};
pub use taxes::{TaxRate, TaxRates};
