// Run with: cargo fuzz run fuzz_reaction_json
// ReactionPayload JSON -> Reaction::like / Reaction::dislike
#![no_main]

use anonboard::domain::{PostId, Reaction, ReactionPayload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(post_id) = PostId::try_from(1) else {
        return;
    };

    if let Ok(payload) = serde_json::from_slice::<ReactionPayload>(data) {
        let copy = ReactionPayload {
            is_like: payload.is_like,
            user_id: payload.user_id,
        };
        let _ = Reaction::like(post_id, payload);
        if let Ok(reaction) = Reaction::dislike(post_id, copy) {
            assert!(!reaction.is_like);
        }
    }
});
