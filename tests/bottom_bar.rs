mod common;

use common::loaded_app;
use mailstart::permissions::PermissionStatus;
use mailstart::ui::app::App;
use mailstart::ui::bottom_bar::{visible_action, BarAction, MAX_ELEVATION};
use mailstart::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn draw_once(app: &mut App, width: u16, height: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
}

fn settle(app: &mut App) {
    for _ in 0..100 {
        app.on_tick();
    }
}

#[test]
fn skip_is_the_visible_action_until_all_granted() {
    let mut app = loaded_app(PermissionStatus::Unknown, PermissionStatus::Unknown, true);
    settle(&mut app);
    assert_eq!(visible_action(app.crossfade()), BarAction::Skip);
}

#[test]
fn next_becomes_visible_once_all_granted() {
    let mut app = loaded_app(PermissionStatus::Granted, PermissionStatus::Granted, true);
    assert!(app.state().next_visible);
    settle(&mut app);
    assert_eq!(visible_action(app.crossfade()), BarAction::Next);
}

#[test]
fn crossfade_moves_gradually_not_instantly() {
    let mut app = loaded_app(PermissionStatus::Granted, PermissionStatus::Granted, true);
    assert_eq!(app.crossfade(), 0.0);

    app.on_tick();
    let after_one = app.crossfade();
    assert!(after_one > 0.0);
    assert!(after_one < 1.0);

    settle(&mut app);
    assert_eq!(app.crossfade(), 1.0);
}

#[test]
fn elevation_rises_while_content_can_scroll_forward() {
    let mut app = loaded_app(PermissionStatus::Unknown, PermissionStatus::Unknown, true);
    // Small terminal: two cards overflow an 8-row viewport.
    draw_once(&mut app, 80, 10);
    assert!(app.scroll().can_scroll_forward());
    assert_eq!(app.elevation(), 0.0);

    let mut last = app.elevation();
    for _ in 0..100 {
        app.on_tick();
        assert!(app.elevation() >= last);
        last = app.elevation();
    }
    assert_eq!(app.elevation(), MAX_ELEVATION);
}

#[test]
fn elevation_decays_smoothly_at_the_end_of_the_scroll() {
    let mut app = loaded_app(PermissionStatus::Unknown, PermissionStatus::Unknown, true);
    draw_once(&mut app, 80, 10);
    settle(&mut app);
    assert_eq!(app.elevation(), MAX_ELEVATION);

    app.scroll_mut().scroll_to_end();
    draw_once(&mut app, 80, 10);
    assert!(!app.scroll().can_scroll_forward());

    app.on_tick();
    let part_way = app.elevation();
    assert!(part_way < MAX_ELEVATION);
    assert!(part_way > 0.0);

    let mut last = part_way;
    for _ in 0..100 {
        app.on_tick();
        assert!(app.elevation() <= last);
        last = app.elevation();
    }
    assert_eq!(app.elevation(), 0.0);
}

#[test]
fn retargeting_mid_flight_reverses_the_elevation() {
    let mut app = loaded_app(PermissionStatus::Unknown, PermissionStatus::Unknown, true);
    draw_once(&mut app, 80, 10);
    app.on_tick();
    app.on_tick();
    let rising = app.elevation();
    assert!(rising > 0.0 && rising < MAX_ELEVATION);

    app.scroll_mut().scroll_to_end();
    draw_once(&mut app, 80, 10);
    app.on_tick();
    assert!(app.elevation() < rising);
}

#[test]
fn short_content_never_elevates_the_bar() {
    let mut app = loaded_app(PermissionStatus::Unknown, PermissionStatus::Unknown, false);
    draw_once(&mut app, 80, 40);
    assert!(!app.scroll().can_scroll_forward());
    settle(&mut app);
    assert_eq!(app.elevation(), 0.0);
}
