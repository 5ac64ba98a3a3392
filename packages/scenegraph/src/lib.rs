//! Scene-graph data model for design-tool document exports
//!
//! A scene graph is a tree of visual nodes (frames, groups, text, vector
//! shapes, images) in one shared coordinate space. This crate only models
//! and deserializes the tree; the compiler crates turn it into markup and
//! styles.

pub mod node;
mod parse;

pub use node::{
    BoundingBox, Color, ColorStop, NodeKind, Paint, PaintKind, SceneNode, TypeStyle, Vector2,
};
pub use parse::{parse_image_map, parse_scene, ParseError};
