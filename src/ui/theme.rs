use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2f, 0x6f, 0xde);
pub const HEADLINE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xb4, 0xb8, 0xc0);
pub const CARD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_GRANTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_DENIED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SURFACE: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const SHADOW: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
pub const SPINNER: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Vertical spacing steps, in rows.
pub mod spacing {
    /// Below the header block.
    pub const HEADER_GAP: u16 = 1;
    /// Between the two permission cards.
    pub const CARD_GAP: u16 = 2;
    /// Trailing spacer at the bottom of the scroll region. Also what makes
    /// the space-between arrangement center the content area.
    pub const TRAILING: u16 = 2;
}

/// Linear interpolation between two RGB colors.
///
/// The terminal has no opacity, so cross-fades and the bar shadow are
/// expressed by blending foregrounds toward the surface they sit on.
/// Non-RGB colors can't be blended and snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
