// Run with: cargo fuzz run fuzz_post_id
// Path segment -> PostId
#![no_main]

use anonboard::domain::PostId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(id) = PostId::parse(s) {
            assert!(id.value() > 0);
        }
    }
});
