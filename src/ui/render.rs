use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::strings::StringKey;
use crate::ui::app::App;
use crate::ui::bottom_bar::{self, BarContext};
use crate::ui::header;
use crate::ui::layout::{responsive_width, screen_regions};
use crate::ui::theme::{self, SPINNER};
use crate::ui::widgets::PermissionBox;

const CONTACTS_ICON: &str = "✦";
const NOTIFICATIONS_ICON: &str = "♫";

/// One render pass: scrollable main region plus the bottom bar.
///
/// Mutates nothing except the scroll cell, which learns this frame's
/// content extent so the offset stays clamped and the bar can tell
/// whether more content is underneath it.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let (main, bar) = screen_regions(frame.area());
    let content = responsive_width(main, app.content_max_width());

    let lines = main_lines(app, content.width, content.height);
    app.scroll_mut()
        .set_extent(lines.len() as u16, content.height);
    let offset = app.scroll().offset();

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), content);

    bottom_bar::render(
        frame,
        bar,
        &BarContext {
            elevation: app.elevation(),
            crossfade: app.crossfade(),
            strings: app.strings(),
            max_width: app.content_max_width(),
        },
    );
}

/// Header, content, and trailing spacer, with a space-between arrangement:
/// when everything fits the viewport, the leftover rows pad between header
/// and content so the content area sits visually centered.
fn main_lines(app: &App, width: u16, viewport: u16) -> Vec<Line<'static>> {
    let mut lines = header::lines(app.strings(), width);
    let body = content_lines(app, width);

    let used = lines.len() + body.len() + theme::spacing::TRAILING as usize;
    let viewport = viewport as usize;
    if used < viewport {
        for _ in 0..(viewport - used) / 2 {
            lines.push(Line::from(""));
        }
    }

    lines.extend(body);
    for _ in 0..theme::spacing::TRAILING {
        lines.push(Line::from(""));
    }
    lines
}

/// Loading indicator or the permission cards; exactly one of the two.
fn content_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let state = app.state();
    let strings = app.strings();

    if state.is_loading {
        let spinner = app.spinner();
        if !spinner.is_visible() {
            return Vec::new();
        }
        let label = format!("{} {}", spinner.glyph(), strings.get(StringKey::LoadingLabel));
        let pad = (width as usize).saturating_sub(label.chars().count()) / 2;
        return vec![Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(label, Style::default().fg(SPINNER)),
        ])];
    }

    let mut lines = PermissionBox::new(
        CONTACTS_ICON,
        strings.get(StringKey::ContactsTitle),
        strings.get(StringKey::ContactsDescription),
        'c',
        state.contacts,
        strings.get(StringKey::AllowAction),
        strings.get(StringKey::GrantedLabel),
    )
    .lines(width);

    if state.notifications_visible {
        for _ in 0..theme::spacing::CARD_GAP {
            lines.push(Line::from(""));
        }
        lines.extend(
            PermissionBox::new(
                NOTIFICATIONS_ICON,
                strings.get(StringKey::NotificationsTitle),
                strings.get(StringKey::NotificationsDescription),
                'n',
                state.notifications,
                strings.get(StringKey::AllowAction),
                strings.get(StringKey::GrantedLabel),
            )
            .lines(width),
        );
    }

    lines
}
