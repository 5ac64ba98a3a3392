//! Markup generation: scene-graph tree to a static HTML document
//!
//! Walks the tree top-down and decides per node whether to recurse into
//! children, emit an image reference, or emit a plain container/text
//! element. Selectors match the style compiler's rules one-to-one.

mod compiler;

pub use compiler::{compile_to_html, CompileOptions};
