//! Length formatting

/// Format a length in device-independent units as a whole-pixel CSS value.
pub fn px(value: f64) -> String {
    format!("{}px", value.round() as i64)
}
