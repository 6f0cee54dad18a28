//! Player colours, assigned by roster position.

/// Pin colours; wraps around for rosters longer than the palette.
pub static PLAYER_COLORS: &[&str] = &[
    "#db5461", "#3891a6", "#fdc30f", "#a6d3a0", "#4c2c69", "#e898a0", "#65b1c2", "#feec7f",
    "#c0e2bc",
];

/// Dark text colour used on light pins.
pub const DARK_TEXT: &str = "#4c2c69";
pub const LIGHT_TEXT: &str = "white";

pub fn player_color(index: usize) -> &'static str {
    PLAYER_COLORS[index % PLAYER_COLORS.len()]
}

/// YIQ brightness (0–255) of a `#rrggbb` colour. `None` if it does not parse.
pub fn yiq_brightness(hex: &str) -> Option<u32> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u32::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some((r * 299 + g * 587 + b * 114) / 1000)
}

/// Readable text colour on top of `hex`.
pub fn contrast_text_color(hex: &str) -> &'static str {
    match yiq_brightness(hex) {
        Some(yiq) if yiq >= 128 => DARK_TEXT,
        _ => LIGHT_TEXT,
    }
}
