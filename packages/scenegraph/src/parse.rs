//! Deserialization entry points for scene exports and image maps

use crate::node::SceneNode;
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced while reading scene-graph or image-map JSON
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("export has no root node")]
    MissingRoot,
}

/// Parse a scene-graph export. Accepts either a bare node object or a whole
/// file export that wraps the tree in a `document` field.
pub fn parse_scene(source: &str) -> Result<SceneNode, ParseError> {
    let mut value: serde_json::Value = serde_json::from_str(source)?;

    if let Some(document) = value.get_mut("document") {
        if document.is_null() {
            return Err(ParseError::MissingRoot);
        }
        return Ok(serde_json::from_value(document.take())?);
    }

    Ok(serde_json::from_value(value)?)
}

/// Parse a node id → raster URL map produced by the external
/// image-resolution step.
pub fn parse_image_map(source: &str) -> Result<HashMap<String, String>, ParseError> {
    Ok(serde_json::from_str(source)?)
}
