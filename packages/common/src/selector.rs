//! Stable selector derivation from node ids
//!
//! The two compilers pair their outputs purely through this function: one
//! class per node id, derived identically on both sides.

/// Class prefix; keeps selectors valid when ids start with a digit.
const CLASS_PREFIX: &str = "fc-";

/// Class applied to the wrapper element that fixes the canvas to the root
/// node's authored size.
pub const CANVAS_CLASS: &str = "fc-canvas";

/// Derive the CSS class for a node id: prefix plus the id with every
/// character outside `[A-Za-z0-9_-]` replaced by `_`. Deterministic, a pure
/// function of the id alone.
pub fn class_name(id: &str) -> String {
    let mut name = String::with_capacity(CLASS_PREFIX.len() + id.len());
    name.push_str(CLASS_PREFIX);
    for ch in id.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            name.push(ch);
        } else {
            name.push('_');
        }
    }
    name
}
