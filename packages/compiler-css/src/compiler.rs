use framecast_common::{classify, color, selector, units, ImageMap};
use framecast_scenegraph::{BoundingBox, NodeKind, Paint, PaintKind, SceneNode};

/// One emitted rule block, kept in traversal order.
struct Rule {
    selector: String,
    declarations: Vec<(String, String)>,
}

/// Traversal state scoped to one generation call.
struct StyleContext<'a> {
    images: &'a ImageMap,
    rules: Vec<Rule>,
    /// Paint-order compensation: absolute positioning discards natural
    /// document flow, so each visited node gets the next higher z-index.
    stacking_index: u32,
}

impl StyleContext<'_> {
    fn next_stacking_index(&mut self) -> u32 {
        let index = self.stacking_index;
        self.stacking_index += 1;
        index
    }
}

/// Compile a scene tree to a stylesheet pairing the markup compiler's
/// output: one rule per visible node under the same derived selector, plus
/// wrapper rules fixing the canvas to the root's authored size.
pub fn compile_to_css(root: &SceneNode, images: &ImageMap) -> String {
    let mut ctx = StyleContext {
        images,
        rules: Vec::new(),
        stacking_index: 0,
    };

    ctx.rules.push(body_rule());
    ctx.rules.push(canvas_rule(root));
    collect_node_rules(root, None, &mut ctx);

    serialize_rules(&ctx.rules)
}

fn body_rule() -> Rule {
    Rule {
        selector: "body".to_string(),
        declarations: vec![("margin".to_string(), "0".to_string())],
    }
}

fn canvas_rule(root: &SceneNode) -> Rule {
    let mut declarations = vec![
        ("position".to_string(), "relative".to_string()),
        ("transform-origin".to_string(), "0 0".to_string()),
    ];
    if let Some(bbox) = root.absolute_bounding_box {
        declarations.push(("width".to_string(), units::px(bbox.width)));
        declarations.push(("height".to_string(), units::px(bbox.height)));
    }
    Rule {
        selector: format!(".{}", selector::CANVAS_CLASS),
        declarations,
    }
}

fn collect_node_rules(node: &SceneNode, origin: Option<BoundingBox>, ctx: &mut StyleContext) {
    if !node.is_visible() {
        return;
    }

    let stacking_index = ctx.next_stacking_index();
    let mut declarations = Vec::new();
    push_geometry(node, origin, stacking_index, &mut declarations);

    let mut collapsed = false;
    match ctx.images.get(&node.id) {
        Some(url) if classify::should_collapse_to_single_image(node) => {
            push_background_image(url, "contain", &mut declarations);
            collapsed = true;
        }
        Some(url) => push_background_image(url, "cover", &mut declarations),
        None if node.kind == NodeKind::Text => push_text(node, &mut declarations),
        None => {
            push_fill(node, &mut declarations);
            push_corners(node, &mut declarations);
            push_border(node, &mut declarations);
            if node.clips_content == Some(true) {
                declarations.push(("overflow".to_string(), "hidden".to_string()));
            }
        }
    }

    ctx.rules.push(Rule {
        selector: format!(".{}", selector::class_name(&node.id)),
        declarations,
    });

    // A collapsed subtree renders as one flattened image; its descendants
    // get no rules, mirroring the markup side.
    if collapsed {
        return;
    }

    let child_origin = node.absolute_bounding_box.or(origin);
    for child in node.visible_children() {
        collect_node_rules(child, child_origin, ctx);
    }
}

/// Geometry relative to the nearest enclosing node's origin. The root has
/// no origin and anchors the document as a normal in-flow element; a node
/// without a box omits its geometry rather than failing the traversal.
fn push_geometry(
    node: &SceneNode,
    origin: Option<BoundingBox>,
    stacking_index: u32,
    declarations: &mut Vec<(String, String)>,
) {
    let position = if origin.is_none() { "relative" } else { "absolute" };
    declarations.push(("position".to_string(), position.to_string()));

    if let Some(bbox) = node.absolute_bounding_box {
        let (origin_x, origin_y) = match origin {
            Some(origin) => (origin.x, origin.y),
            None => (bbox.x, bbox.y),
        };
        declarations.push(("left".to_string(), units::px(bbox.x - origin_x)));
        declarations.push(("top".to_string(), units::px(bbox.y - origin_y)));
        declarations.push(("width".to_string(), units::px(bbox.width)));
        declarations.push(("height".to_string(), units::px(bbox.height)));
    }

    declarations.push(("z-index".to_string(), stacking_index.to_string()));
}

fn push_background_image(url: &str, size: &str, declarations: &mut Vec<(String, String)>) {
    let url = url.replace('"', "%22");
    declarations.push(("background-image".to_string(), format!("url(\"{}\")", url)));
    declarations.push(("background-size".to_string(), size.to_string()));
    declarations.push(("background-position".to_string(), "center".to_string()));
    declarations.push(("background-repeat".to_string(), "no-repeat".to_string()));
}

fn push_fill(node: &SceneNode, declarations: &mut Vec<(String, String)>) {
    let paint = first_visible_paint(&node.fills).or_else(|| first_visible_paint(&node.background));
    if let Some(paint) = paint {
        if let Some(value) = paint_value(paint) {
            declarations.push(("background".to_string(), value));
            return;
        }
    }
    if let Some(background_color) = node.background_color {
        declarations.push(("background".to_string(), color::rgba(background_color, None)));
    }
}

fn first_visible_paint(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|paint| paint.is_visible())
}

fn first_visible_solid(paints: &[Paint]) -> Option<&Paint> {
    paints
        .iter()
        .find(|paint| paint.is_visible() && paint.kind == PaintKind::Solid)
}

fn paint_value(paint: &Paint) -> Option<String> {
    match paint.kind {
        PaintKind::Solid => Some(match paint.color {
            Some(solid) => color::rgba(solid, paint.opacity),
            None => color::rgba_transparent(),
        }),
        kind if kind.is_gradient() => color::linear_gradient(paint),
        _ => None,
    }
}

fn push_corners(node: &SceneNode, declarations: &mut Vec<(String, String)>) {
    if let Some([top_left, top_right, bottom_right, bottom_left]) = node.rectangle_corner_radii {
        declarations.push((
            "border-radius".to_string(),
            format!(
                "{} {} {} {}",
                units::px(top_left),
                units::px(top_right),
                units::px(bottom_right),
                units::px(bottom_left)
            ),
        ));
    } else if let Some(radius) = node.corner_radius {
        if radius > 0.0 {
            declarations.push(("border-radius".to_string(), units::px(radius)));
        }
    }
}

fn push_border(node: &SceneNode, declarations: &mut Vec<(String, String)>) {
    let weight = node.stroke_weight.unwrap_or(0.0);
    if weight <= 0.0 {
        return;
    }
    let Some(stroke) = first_visible_paint(&node.strokes) else {
        return;
    };
    let Some(stroke_color) = stroke.color else {
        return;
    };
    declarations.push((
        "border".to_string(),
        format!(
            "{} solid {}",
            units::px(weight),
            color::rgba(stroke_color, stroke.opacity)
        ),
    ));
}

/// Text keeps its authored box: explicit size with hidden overflow, wrapped
/// pre-formatted whitespace, and typography passed through when present.
fn push_text(node: &SceneNode, declarations: &mut Vec<(String, String)>) {
    declarations.push(("margin".to_string(), "0".to_string()));
    declarations.push(("overflow".to_string(), "hidden".to_string()));
    declarations.push(("white-space".to_string(), "pre-wrap".to_string()));

    if let Some(style) = &node.style {
        if let Some(font_size) = style.font_size {
            declarations.push(("font-size".to_string(), units::px(font_size)));
        }
        if let Some(font_weight) = style.font_weight {
            declarations.push(("font-weight".to_string(), format!("{}", font_weight)));
        }
        if let Some(letter_spacing) = style.letter_spacing {
            declarations.push(("letter-spacing".to_string(), units::px(letter_spacing)));
        }
        if let Some(line_height) = style.line_height_px {
            declarations.push(("line-height".to_string(), units::px(line_height)));
        }
        if let Some(family) = &style.font_family {
            declarations.push(("font-family".to_string(), format!("\"{}\", sans-serif", family)));
        }
        if let Some(align) = &style.text_align_horizontal {
            declarations.push(("text-align".to_string(), align.to_lowercase()));
        }
    }

    if let Some(paint) = first_visible_solid(&node.fills) {
        if let Some(text_color) = paint.color {
            declarations.push(("color".to_string(), color::rgba(text_color, paint.opacity)));
        }
    }
}

fn serialize_rules(rules: &[Rule]) -> String {
    let mut output = String::new();

    for rule in rules {
        output.push_str(&rule.selector);
        output.push_str(" {\n");

        for (property, value) in &rule.declarations {
            output.push_str(&format!("  {}: {};\n", property, value));
        }

        output.push_str("}\n\n");
    }

    output
}
