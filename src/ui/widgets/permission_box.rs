//! Reusable permission request card.
//!
//! Icon and title, a wrapped description, and a footer showing either the
//! Allow hotkey or the granted indicator. Cards render as owned lines so
//! the scrollable main region can slice them freely.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::permissions::PermissionStatus;
use crate::ui::theme::{
    ACCENT, BODY_TEXT, CARD_BORDER, HEADLINE_TEXT, STATUS_DENIED, STATUS_GRANTED,
};

pub struct PermissionBox {
    icon: &'static str,
    title: String,
    description: String,
    hotkey: char,
    status: PermissionStatus,
    allow_label: String,
    granted_label: String,
}

impl PermissionBox {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        icon: &'static str,
        title: impl Into<String>,
        description: impl Into<String>,
        hotkey: char,
        status: PermissionStatus,
        allow_label: impl Into<String>,
        granted_label: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            hotkey,
            status,
            allow_label: allow_label.into(),
            granted_label: granted_label.into(),
        }
    }

    /// Render the card at the given total width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width.max(12) as usize;
        let inner = width - 4;
        let border = Style::default().fg(CARD_BORDER);

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            format!("┌{}┐", "─".repeat(width - 2)),
            border,
        )));

        lines.push(boxed_line(
            vec![
                Span::styled(format!("{} ", self.icon), Style::default().fg(ACCENT)),
                Span::styled(
                    self.title.clone(),
                    Style::default().fg(HEADLINE_TEXT).add_modifier(Modifier::BOLD),
                ),
            ],
            inner,
            border,
        ));
        lines.push(boxed_line(Vec::new(), inner, border));

        for row in wrap(&self.description, inner) {
            lines.push(boxed_line(
                vec![Span::styled(row, Style::default().fg(BODY_TEXT))],
                inner,
                border,
            ));
        }

        lines.push(boxed_line(Vec::new(), inner, border));
        lines.push(boxed_line(self.footer_spans(), inner, border));

        lines.push(Line::from(Span::styled(
            format!("└{}┘", "─".repeat(width - 2)),
            border,
        )));
        lines
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        match self.status {
            PermissionStatus::Granted => vec![Span::styled(
                format!("✓ {}", self.granted_label),
                Style::default().fg(STATUS_GRANTED).add_modifier(Modifier::BOLD),
            )],
            PermissionStatus::Denied => vec![
                Span::styled("✗ ", Style::default().fg(STATUS_DENIED)),
                Span::styled(
                    format!("[{}] {}", self.hotkey, self.allow_label),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ],
            PermissionStatus::Unknown => vec![Span::styled(
                format!("[{}] {}", self.hotkey, self.allow_label),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )],
        }
    }
}

/// Wrap spans in the card's side borders, padding to the inner width.
fn boxed_line(spans: Vec<Span<'static>>, inner: usize, border: Style) -> Line<'static> {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = inner.saturating_sub(content_width);

    let mut all = Vec::with_capacity(spans.len() + 3);
    all.push(Span::styled("│ ".to_string(), border));
    all.extend(spans);
    all.push(Span::raw(" ".repeat(padding)));
    all.push(Span::styled(" │".to_string(), border));
    Line::from(all)
}

/// Greedy word wrap by char count. Words longer than the width get a row
/// of their own and overflow; the card clips them at the border.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
