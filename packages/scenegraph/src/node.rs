//! Scene node definitions
//!
//! The model mirrors the design tool's JSON export. Every field beyond `id`
//! and `kind` is optional in the wire format, so the compilers must degrade
//! gracefully when a field is absent.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the document's shared coordinate space.
/// Coordinates are absolute, not relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// RGBA color with all channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// 2D point, used for gradient handle positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// One gradient color stop at a normalized position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// Node kind tag. Kinds the tool may add later deserialize as `Unknown`
/// and render as generic containers, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    Instance,
    ComponentSet,
    Section,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    Polygon,
    RegularPolygon,
    BooleanOperation,
    Arrow,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Paint kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PaintKind {
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            PaintKind::GradientLinear
                | PaintKind::GradientRadial
                | PaintKind::GradientAngular
                | PaintKind::GradientDiamond
        )
    }
}

/// One paint descriptor from a node's `fills`, `strokes` or `background`
/// sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,

    /// Absent means visible; explicit false hides the paint.
    pub visible: Option<bool>,

    /// Alpha override applied on top of the color's own alpha channel.
    pub opacity: Option<f64>,

    /// Present for solid paints.
    pub color: Option<Color>,

    /// Gradient geometry; the first two handles define the gradient axis.
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vector2>,

    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
}

impl Paint {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Typography properties carried by TEXT nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub line_height_px: Option<f64>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
}

/// One node of the scene graph.
///
/// `children` are in paint order: later children render on top. The tree is
/// read-only input to the compilers; a generation call never mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Opaque stable identifier, unique within one tree snapshot.
    pub id: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Human-readable label. Used for the document title only, never for
    /// identity.
    #[serde(default)]
    pub name: String,

    /// Absent means visible; explicit false excludes the node and its whole
    /// subtree from both outputs.
    pub visible: Option<bool>,

    /// Absent only for non-visual organizational nodes.
    pub absolute_bounding_box: Option<BoundingBox>,

    #[serde(default)]
    pub fills: Vec<Paint>,

    #[serde(default)]
    pub strokes: Vec<Paint>,

    #[serde(default)]
    pub background: Vec<Paint>,

    /// Node-level fallback color, consulted when no usable paint resolves.
    pub background_color: Option<Color>,

    /// Uniform corner radius; the per-corner array wins when both exist.
    pub corner_radius: Option<f64>,

    /// Per-corner radii: top-left, top-right, bottom-right, bottom-left.
    pub rectangle_corner_radii: Option<[f64; 4]>,

    pub stroke_weight: Option<f64>,

    pub clips_content: Option<bool>,

    /// Present for TEXT nodes.
    pub style: Option<TypeStyle>,

    /// Text content for TEXT nodes; newlines are line breaks.
    pub characters: Option<String>,

    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn visible_children(&self) -> impl Iterator<Item = &SceneNode> {
        self.children.iter().filter(|child| child.is_visible())
    }

    pub fn has_visible_children(&self) -> bool {
        self.visible_children().next().is_some()
    }
}
