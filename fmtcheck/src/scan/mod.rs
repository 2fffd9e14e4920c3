//! Hand-written scanners for formats without an off-the-shelf checker.
//!
//! - `csv` — quote-aware line splitter and column-count consistency
//! - `brackets` — generic bracket balance scanner
//! - `emmet` — abbreviation alphabet, bracket and quantifier checks
//! - `text` — trimming, spacing and digit classes

pub mod brackets;
pub mod csv;
pub mod emmet;
pub mod text;
