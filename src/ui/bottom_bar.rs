//! Persistent bottom action bar.
//!
//! One row of surface with a right-aligned action, plus a shadow row along
//! the top edge whose intensity follows the elevation value: full when the
//! content above can still scroll forward, none at the end of the scroll.
//! Both the Next button and the Skip text action are always mounted; a
//! cross-fade value selects which one is visible by blending the other
//! into the surface. Both dispatch the same click.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::strings::{StringKey, Strings};
use crate::ui::layout::responsive_width;
use crate::ui::theme::{blend, ACCENT, SHADOW, SURFACE};

/// Elevation when scrollable content sits underneath the bar.
pub const MAX_ELEVATION: f32 = 8.0;

/// Which bar action the user currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAction {
    Next,
    Skip,
}

/// Everything the bar needs from the app for one frame.
pub struct BarContext<'a> {
    /// Current elevation, `0.0..=MAX_ELEVATION`.
    pub elevation: f32,
    /// Cross-fade position: 0 = Skip fully visible, 1 = Next fully visible.
    pub crossfade: f32,
    pub strings: &'a Strings,
    pub max_width: u16,
}

/// The action considered visible at a given cross-fade position.
pub fn visible_action(crossfade: f32) -> BarAction {
    if crossfade >= 0.5 {
        BarAction::Next
    } else {
        BarAction::Skip
    }
}

/// Styles for the two mounted actions at a cross-fade position:
/// `(next_style, skip_style)`. The hidden endpoint blends into the
/// surface rather than being unmounted, so the fade always has both
/// endpoints to animate between.
pub fn action_styles(crossfade: f32) -> (Style, Style) {
    let t = crossfade.clamp(0.0, 1.0);
    let next = Style::default()
        .fg(blend(SURFACE, ratatui::style::Color::Rgb(0xff, 0xff, 0xff), t))
        .bg(blend(SURFACE, ACCENT, t))
        .add_modifier(Modifier::BOLD);
    let skip = Style::default().fg(blend(SURFACE, ACCENT, 1.0 - t));
    (next, skip)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, ctx: &BarContext<'_>) {
    if area.height == 0 {
        return;
    }

    let (shadow_row, action_row) = if area.height >= 2 {
        (
            Some(Rect { height: 1, ..area }),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        )
    } else {
        (None, Rect { height: 1, ..area })
    };

    if let Some(row) = shadow_row {
        if let Some(span) = shadow_span(row.width, ctx.elevation) {
            frame.render_widget(Paragraph::new(Line::from(span)), row);
        }
    }

    // Surface across the full row, then the actions right-aligned within
    // the width-constrained region.
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(SURFACE)),
        action_row,
    );

    let inner = responsive_width(action_row, ctx.max_width);
    let padded = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };

    let (next_style, skip_style) = action_styles(ctx.crossfade);
    let line = Line::from(vec![
        Span::styled(ctx.strings.get(StringKey::SkipButton).to_string(), skip_style),
        Span::styled("  ".to_string(), Style::default().bg(SURFACE)),
        Span::styled(
            format!(" {} ", ctx.strings.get(StringKey::NextButton)),
            next_style,
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(SURFACE))
            .alignment(Alignment::Right),
        padded,
    );
}

/// Shadow line above the surface. `None` at zero elevation so a resting
/// bar draws nothing at all.
fn shadow_span(width: u16, elevation: f32) -> Option<Span<'static>> {
    let intensity = (elevation / MAX_ELEVATION).clamp(0.0, 1.0);
    if intensity <= f32::EPSILON {
        return None;
    }
    Some(Span::styled(
        "▂".repeat(width as usize),
        Style::default().fg(blend(SURFACE, SHADOW, intensity)),
    ))
}
