//! Color and gradient formatting

use framecast_scenegraph::{Color, Paint};

/// Angle used when a gradient paint carries fewer than two handle
/// positions: top-to-bottom.
const DEFAULT_GRADIENT_ANGLE: i64 = 180;

/// Format a color as a CSS `rgba(...)` value. Channels are clamped to
/// [0, 1] before scaling; an explicit alpha override wins over the color's
/// own alpha channel.
pub fn rgba(color: Color, alpha_override: Option<f64>) -> String {
    let alpha = alpha_override.unwrap_or(color.a).clamp(0.0, 1.0);
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        alpha
    )
}

/// Fully transparent color, used when a solid paint carries no color.
pub fn rgba_transparent() -> String {
    "rgba(0, 0, 0, 0)".to_string()
}

fn channel(value: f64) -> i64 {
    (value.clamp(0.0, 1.0) * 255.0).round() as i64
}

/// Convert a gradient paint to a CSS `linear-gradient(...)` value. Returns
/// `None` when the paint has no color stops; the caller falls through to a
/// different fill or no background at all.
pub fn linear_gradient(paint: &Paint) -> Option<String> {
    if paint.gradient_stops.is_empty() {
        return None;
    }

    let stops: Vec<String> = paint
        .gradient_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                rgba(stop.color, None),
                (stop.position * 100.0).round() as i64
            )
        })
        .collect();

    Some(format!(
        "linear-gradient({}deg, {})",
        gradient_angle(paint),
        stops.join(", ")
    ))
}

/// Angle in degrees between the first two gradient handles.
fn gradient_angle(paint: &Paint) -> i64 {
    let [first, second] = match paint.gradient_handle_positions.as_slice() {
        [first, second, ..] => [first, second],
        _ => return DEFAULT_GRADIENT_ANGLE,
    };
    (second.y - first.y)
        .atan2(second.x - first.x)
        .to_degrees()
        .round() as i64
}
