//! Fallback color palette
//!
//! Series without an explicit color take `PALETTE[index % 8]`.

/// Fixed fallback colors, assigned by series index
pub const PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6B6B", "#4ECDC4",
];

/// Palette color for a series index, wrapping around
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// The explicit color if present, otherwise the palette color for `index`
pub fn resolve_color(explicit: Option<&str>, index: usize) -> String {
    match explicit {
        Some(color) if !color.is_empty() => color.to_string(),
        _ => palette_color(index).to_string(),
    }
}
