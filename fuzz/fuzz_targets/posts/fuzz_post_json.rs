// Run with: cargo fuzz run fuzz_post_json
// CreatePostPayload JSON -> NewPost (content trimming, grapheme limit, parent id rules)
#![no_main]

use anonboard::domain::{CreatePostPayload, NewPost};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<CreatePostPayload>(data) {
        if let Ok(post) = NewPost::try_from(payload) {
            assert!(!post.content.as_ref().trim().is_empty());
            assert!(post.parent_id.is_none_or(|id| id.value() > 0));
        }
    }
});
