//! Style generation: scene-graph tree to a stylesheet
//!
//! Walks the same tree as the markup compiler and emits one rule per
//! visible node under the shared selector scheme: absolute-positioned
//! geometry relative to the nearest enclosing node, plus fill, stroke,
//! corner, clipping and text properties.

mod compiler;

pub use compiler::compile_to_css;
