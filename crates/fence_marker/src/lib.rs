// crates/fence_marker/src/lib.rs

//! The fence tokens recognised throughout the snippet-extraction tool-chain.

/// The bare token that closes a fenced block.
pub const FENCE: &str = "```";

/// Returns the opening token for a block tagged with `lang`
/// (e.g. `"rust"` → `` "```rust" ``). No space between fence and tag.
pub fn open_fence(lang: &str) -> String {
    format!("{}{}", FENCE, lang)
}
