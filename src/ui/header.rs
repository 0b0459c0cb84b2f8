use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::strings::{StringKey, Strings};
use crate::ui::theme::{self, ACCENT, HEADLINE_TEXT};

const BRAND: &str = "✉ mailstart";

/// Static branding plus the screen title. No state dependency.
pub fn lines(strings: &Strings, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        centered(
            BRAND,
            width,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        centered(
            strings.get(StringKey::ScreenTitle),
            width,
            Style::default().fg(HEADLINE_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    for _ in 0..theme::spacing::HEADER_GAP {
        lines.push(Line::from(""));
    }
    lines
}

fn centered(text: &str, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.chars().count()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_brand_and_title() {
        let strings = Strings::default();
        let text: String = lines(&strings, 80)
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("mailstart"));
        assert!(text.contains(strings.get(StringKey::ScreenTitle)));
    }

    #[test]
    fn title_is_roughly_centered() {
        let strings = Strings::default();
        let rendered = lines(&strings, 80);
        let title_row = &rendered[2];
        let pad = title_row.spans[0].content.chars().count();
        let title_len = strings.get(StringKey::ScreenTitle).chars().count();
        assert_eq!(pad, (80 - title_len) / 2);
    }
}
