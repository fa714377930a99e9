//! Display helpers shared by the report renderers.

/// Default identifier width shown before truncation.
pub const ID_DISPLAY_WIDTH: usize = 20;

/// Shorten a long identifier for display.
///
/// Identifiers over `width` characters render as exactly the first `width`
/// characters followed by `...`; shorter ones render unchanged with no
/// marker. Display-only; the underlying record keeps the full identifier.
pub fn truncate_id(id: &str, width: usize) -> String {
    if id.chars().count() > width {
        let head: String = id.chars().take(width).collect();
        format!("{head}...")
    } else {
        id.to_string()
    }
}
