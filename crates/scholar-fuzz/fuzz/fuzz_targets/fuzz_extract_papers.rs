#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_scraper::extract::extract_from_body;
use scholar_scraper::models::Paper;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bodies parse to a page or an ExtractError, never a panic
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = extract_from_body::<Paper>(body, "https://scholar.google.com", 20);
    }
});
