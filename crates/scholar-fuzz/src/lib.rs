//! Fuzzing library for scholar-scraper.
//!
//! This crate provides fuzzing targets for the HTML extraction layer:
//! arbitrary bodies must come back as a page or an `ExtractError`, never a panic.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scholar-fuzz
//! cargo +nightly fuzz run fuzz_extract_papers -- -max_total_time=60
//! ```

pub use scholar_scraper::extract;
