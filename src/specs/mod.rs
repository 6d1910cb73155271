// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the portal's markup: *where the ground truth lives in
//! the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of the group timetable page (`/schedule/group?id=…`).
//! - **Selector choice** (`div.wrapper` per week, `th.day-name` columns,
//!   `th.hour-name` rows, `div.pair` entries).
//! - **Strictness rules**: which missing pieces make the page malformed and which are
//!   just empty slots.
//!
//! ## What does **not** live here
//! - **Fetching / snapshots** (`core::net`, `store`).
//! - **Week parity or day resolution** (`calendar`, `resolve`).
//!
//! ## Typical call chain
//! ```text
//! runner → Source::fetch → SnapshotStore (promote)
//!        ↘ specs::schedule::ScheduleParser::parse → model::Schedule → resolve
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline snippets and `tests/fixtures/`.
pub mod schedule;

pub use schedule::{ParseError, ParseOptions, ScheduleParser};
