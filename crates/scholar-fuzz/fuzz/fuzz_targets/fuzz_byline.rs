#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_scraper::extract::text::{extract_digits, extract_year, split_authors};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        assert!(split_authors(text).len() <= text.len());
        let _ = extract_year(text);
        assert!(!extract_digits(text).is_empty());
    }
});
