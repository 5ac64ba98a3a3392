//! Node classification consulted by both compilers
//!
//! Pure predicates, no side effects. Both compilers call the same functions
//! so they never disagree on which nodes collapse or rasterize.

use framecast_scenegraph::{NodeKind, PaintKind, SceneNode};
use std::collections::BTreeSet;

/// Containers at or below this size (device-independent units, both
/// dimensions) count as icon-scale and may collapse to a single flattened
/// image. Heuristic cutoff, tunable.
pub const COLLAPSE_MAX_DIMENSION: f64 = 128.0;

/// True for shape kinds that only render faithfully as raster images.
pub fn is_vector_like(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Ellipse
            | NodeKind::Vector
            | NodeKind::Line
            | NodeKind::Star
            | NodeKind::Polygon
            | NodeKind::BooleanOperation
            | NodeKind::RegularPolygon
            | NodeKind::Arrow
    )
}

/// True for grouping kinds that may collapse to a single image when small.
pub fn is_container_kind(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Group | NodeKind::Component | NodeKind::Instance | NodeKind::ComponentSet
    )
}

/// True iff the node carries an image paint that is not explicitly hidden.
pub fn has_image_fill(node: &SceneNode) -> bool {
    node.fills
        .iter()
        .any(|paint| paint.kind == PaintKind::Image && paint.is_visible())
}

/// True iff the node needs a substitute raster image to render at all.
pub fn needs_rasterization(node: &SceneNode) -> bool {
    has_image_fill(node) || is_vector_like(node.kind)
}

/// True iff a small icon-like container should render as one flattened
/// image instead of being expanded into nested markup and rules.
///
/// Grouped icon assemblies are commonly dozens of tiny vector paths;
/// expanding them produces bloated, unusable output. The scan is an
/// existence check over visible descendants, so traversal order does not
/// affect the result; invisible subtrees are skipped entirely.
pub fn should_collapse_to_single_image(node: &SceneNode) -> bool {
    if !is_container_kind(node.kind) {
        return false;
    }
    let Some(bbox) = node.absolute_bounding_box else {
        return false;
    };
    if bbox.width > COLLAPSE_MAX_DIMENSION || bbox.height > COLLAPSE_MAX_DIMENSION {
        return false;
    }
    node.visible_children().any(subtree_needs_rasterization)
}

fn subtree_needs_rasterization(node: &SceneNode) -> bool {
    needs_rasterization(node) || node.visible_children().any(subtree_needs_rasterization)
}

/// Collect the node ids the external image-resolution step must fetch
/// substitute rasters for: collapsing containers (by their own id, without
/// descending) and any other visible node that needs rasterization.
pub fn collect_rasterization_candidates(root: &SceneNode) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    collect_candidates(root, &mut ids);
    ids
}

fn collect_candidates(node: &SceneNode, ids: &mut BTreeSet<String>) {
    if !node.is_visible() {
        return;
    }
    if should_collapse_to_single_image(node) {
        ids.insert(node.id.clone());
        return;
    }
    if needs_rasterization(node) {
        ids.insert(node.id.clone());
    }
    for child in node.visible_children() {
        collect_candidates(child, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framecast_scenegraph::{BoundingBox, Paint, SceneNode};

    fn node(id: &str, kind: NodeKind) -> SceneNode {
        SceneNode {
            id: id.to_string(),
            kind,
            ..Default::default()
        }
    }

    fn sized(mut scene_node: SceneNode, width: f64, height: f64) -> SceneNode {
        scene_node.absolute_bounding_box = Some(BoundingBox {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        scene_node
    }

    #[test]
    fn test_vector_like_kinds() {
        assert!(is_vector_like(NodeKind::Vector));
        assert!(is_vector_like(NodeKind::BooleanOperation));
        assert!(is_vector_like(NodeKind::Arrow));
        assert!(!is_vector_like(NodeKind::Frame));
        assert!(!is_vector_like(NodeKind::Text));
        assert!(!is_vector_like(NodeKind::Unknown));
    }

    #[test]
    fn test_container_kinds() {
        assert!(is_container_kind(NodeKind::Group));
        assert!(is_container_kind(NodeKind::ComponentSet));
        assert!(!is_container_kind(NodeKind::Frame));
        assert!(!is_container_kind(NodeKind::Rectangle));
    }

    #[test]
    fn test_image_fill_ignores_hidden_paints() {
        let mut rect = node("1:1", NodeKind::Rectangle);
        rect.fills = vec![Paint {
            kind: PaintKind::Image,
            visible: Some(false),
            ..Default::default()
        }];
        assert!(!has_image_fill(&rect));

        rect.fills[0].visible = None;
        assert!(has_image_fill(&rect));
        assert!(needs_rasterization(&rect));
    }

    #[test]
    fn test_small_icon_group_collapses() {
        let mut group = sized(node("5:1", NodeKind::Group), 24.0, 24.0);
        group.children = vec![node("5:2", NodeKind::Vector)];

        assert!(should_collapse_to_single_image(&group));
    }

    #[test]
    fn test_large_group_does_not_collapse() {
        let mut group = sized(node("5:1", NodeKind::Group), 400.0, 24.0);
        group.children = vec![node("5:2", NodeKind::Vector)];

        assert!(!should_collapse_to_single_image(&group));
    }

    #[test]
    fn test_group_without_raster_content_does_not_collapse() {
        let mut group = sized(node("5:1", NodeKind::Group), 24.0, 24.0);
        group.children = vec![node("5:2", NodeKind::Rectangle)];

        assert!(!should_collapse_to_single_image(&group));
    }

    #[test]
    fn test_invisible_descendants_are_skipped_by_the_scan() {
        let mut hidden_vector = node("5:2", NodeKind::Vector);
        hidden_vector.visible = Some(false);

        let mut group = sized(node("5:1", NodeKind::Group), 24.0, 24.0);
        group.children = vec![hidden_vector];

        assert!(!should_collapse_to_single_image(&group));
    }

    #[test]
    fn test_deeply_nested_vector_triggers_collapse() {
        let mut inner = node("5:3", NodeKind::Frame);
        inner.children = vec![node("5:4", NodeKind::Star)];
        let mut group = sized(node("5:1", NodeKind::Group), 100.0, 100.0);
        group.children = vec![inner];

        assert!(should_collapse_to_single_image(&group));
    }

    #[test]
    fn test_candidate_collection_stops_at_collapsing_group() {
        let mut icon = sized(node("5:1", NodeKind::Group), 24.0, 24.0);
        icon.children = vec![node("5:2", NodeKind::Vector)];

        let mut root = sized(node("0:1", NodeKind::Frame), 800.0, 600.0);
        root.children = vec![icon, node("6:1", NodeKind::Ellipse)];

        let ids = collect_rasterization_candidates(&root);

        assert!(ids.contains("5:1"));
        assert!(ids.contains("6:1"));
        // The collapsed group's inner vector is never fetched on its own.
        assert!(!ids.contains("5:2"));
        assert!(!ids.contains("0:1"));
    }

    #[test]
    fn test_candidate_collection_prunes_invisible_subtrees() {
        let mut hidden = node("7:1", NodeKind::Vector);
        hidden.visible = Some(false);
        let mut root = sized(node("0:1", NodeKind::Frame), 800.0, 600.0);
        root.children = vec![hidden];

        assert!(collect_rasterization_candidates(&root).is_empty());
    }
}
