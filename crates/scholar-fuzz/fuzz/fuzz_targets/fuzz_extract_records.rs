#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_scraper::extract::{Document, extract};
use scholar_scraper::models::{Author, Publication};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    if let Ok(document) = Document::parse(&body, "https://scholar.google.com") {
        for author in extract::<Author>(&document, 20) {
            assert!(!author.name.is_empty());
        }
        for publication in extract::<Publication>(&document, 20) {
            assert!(!publication.title.is_empty());
        }
    }
});
