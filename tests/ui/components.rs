use super::fake_api::game;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gameshelf::logger::Logger;
use gameshelf::models::{DraftField, GameDraft, Review};
use gameshelf::ui::components::{
    resolve_game_title, DialogComponent, GameCard, GameFormComponent, GameListComponent, ReviewFormComponent,
    ReviewListComponent, StatusBar,
};
use gameshelf::ui::core::{Action, Component, DialogType, Focus};
use ratatui::{backend::TestBackend, Terminal};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render_to_string(component: &mut impl Component, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_game_card_delete_emits_id() {
    let mut card = GameCard::new(game("abc", "Zelda"));
    assert!(matches!(card.on_delete(), Action::DeleteGame(id) if id == "abc"));
    assert!(matches!(card.handle_key_events(press(KeyCode::Delete)), Action::DeleteGame(id) if id == "abc"));
    assert!(matches!(card.handle_key_events(press(KeyCode::Char('x'))), Action::None));
}

#[test]
fn test_game_card_render() {
    let mut zelda = game("1", "Zelda");
    zelda.platform = "Switch".to_string();
    zelda.hours_played = Some(40.0);
    let mut card = GameCard::new(zelda);

    let screen = render_to_string(&mut card, 40, GameCard::HEIGHT);
    assert!(screen.contains("Zelda"));
    assert!(screen.contains("Switch"));
    assert!(screen.contains("40 h"));
    assert!(screen.contains("no cover"));
}

#[test]
fn test_game_list_navigation_wraps() {
    let mut list = GameListComponent::new();
    list.update_data(&[game("1", "A"), game("2", "B"), game("3", "C")]);
    assert_eq!(list.selected_game().map(|g| g.id.as_str()), Some("1"));

    let action = list.handle_key_events(press(KeyCode::Char('k')));
    assert!(matches!(list.update(action), Action::None));
    assert_eq!(list.selected_game().map(|g| g.id.as_str()), Some("3"));

    let action = list.handle_key_events(press(KeyCode::Down));
    list.update(action);
    assert_eq!(list.selected_game().map(|g| g.id.as_str()), Some("1"));

    // Only the selected card is marked
    assert_eq!(list.cards.iter().filter(|card| card.selected).count(), 1);
}

#[test]
fn test_game_list_selection_clamped_after_shrink() {
    let mut list = GameListComponent::new();
    list.update_data(&[game("1", "A"), game("2", "B")]);
    list.update(Action::NextGame);
    list.update_data(&[game("1", "A")]);

    assert_eq!(list.selected_index, 0);
    assert!(matches!(
        list.handle_key_events(press(KeyCode::Char('d'))),
        Action::DeleteGame(id) if id == "1"
    ));
}

#[test]
fn test_game_list_empty_state() {
    let mut list = GameListComponent::new();
    list.update_data(&[]);
    assert!(list.selected_game().is_none());
    assert!(matches!(list.handle_key_events(press(KeyCode::Char('d'))), Action::None));

    let screen = render_to_string(&mut list, 60, 10);
    assert!(screen.contains("No games registered yet"));
}

#[test]
fn test_game_form_emits_edits() {
    let mut form = GameFormComponent::new();
    form.update_data(&GameDraft {
        name: "Cel".to_string(),
        ..GameDraft::default()
    });

    match form.handle_key_events(press(KeyCode::Char('e'))) {
        Action::EditDraft { field, value } => {
            assert_eq!(field, DraftField::Name);
            assert_eq!(value, "Cele");
        }
        other => panic!("unexpected action {:?}", other),
    }

    match form.handle_key_events(press(KeyCode::Backspace)) {
        Action::EditDraft { value, .. } => assert_eq!(value, "Ce"),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_game_form_submit_requires_fields() {
    let mut form = GameFormComponent::new();
    form.update_data(&GameDraft {
        name: "Celeste".to_string(),
        platform: "Switch".to_string(),
        ..GameDraft::default()
    });

    assert!(matches!(form.handle_key_events(press(KeyCode::Enter)), Action::None));
    assert_eq!(form.active_field, DraftField::HoursPlayed);

    form.update_data(&GameDraft {
        name: "Celeste".to_string(),
        platform: "Switch".to_string(),
        hours_played: "12".to_string(),
        image_url: String::new(),
    });
    assert!(matches!(form.handle_key_events(press(KeyCode::Enter)), Action::SubmitGame));

    // A reset draft sends the cursor back to the first field
    form.update_data(&GameDraft::default());
    assert_eq!(form.active_field, DraftField::Name);
}

#[test]
fn test_game_form_field_cycling_and_escape() {
    let mut form = GameFormComponent::new();
    form.handle_key_events(press(KeyCode::BackTab));
    assert_eq!(form.active_field, DraftField::ImageUrl);
    form.handle_key_events(press(KeyCode::Tab));
    assert_eq!(form.active_field, DraftField::Name);

    assert!(matches!(
        form.handle_key_events(press(KeyCode::Esc)),
        Action::FocusPanel(Focus::Games)
    ));
}

#[test]
fn test_review_form_submit() {
    let mut form = ReviewFormComponent::new();
    form.update_data(&[game("1", "Zelda"), game("2", "Doom")]);

    // Nothing selected yet
    form.handle_key_events(press(KeyCode::Char('o')));
    form.handle_key_events(press(KeyCode::Char('k')));
    assert!(matches!(form.handle_key_events(press(KeyCode::Enter)), Action::None));

    form.handle_key_events(press(KeyCode::Up));
    assert_eq!(form.selected_game().map(|g| g.id.as_str()), Some("2"));

    match form.handle_key_events(press(KeyCode::Enter)) {
        Action::AddReview(review) => assert_eq!(review, Review::new("2", "ok")),
        other => panic!("unexpected action {:?}", other),
    }

    // Draft cleared after posting
    assert!(form.content.is_empty());
    assert!(form.selected_game().is_none());
}

#[test]
fn test_review_form_requires_content() {
    let mut form = ReviewFormComponent::new();
    form.update_data(&[game("1", "Zelda")]);
    form.handle_key_events(press(KeyCode::Tab));

    assert!(matches!(form.handle_key_events(press(KeyCode::Enter)), Action::None));
    assert_eq!(form.selected_game().map(|g| g.id.as_str()), Some("1"));
}

#[test]
fn test_review_form_keeps_selection_across_updates() {
    let mut form = ReviewFormComponent::new();
    form.update_data(&[game("1", "Zelda"), game("2", "Doom")]);
    form.handle_key_events(press(KeyCode::Tab));
    form.handle_key_events(press(KeyCode::Tab));
    assert_eq!(form.selected_game().map(|g| g.id.as_str()), Some("2"));

    form.update_data(&[game("0", "Hades"), game("2", "Doom")]);
    assert_eq!(form.selected_game_index, Some(1));

    form.update_data(&[game("0", "Hades")]);
    assert!(form.selected_game().is_none());
}

#[test]
fn test_review_title_resolution() {
    let games = [game("1", "A"), game("2", "B")];
    assert_eq!(resolve_game_title(&games, "2"), Some("B"));
    assert_eq!(resolve_game_title(&games, "9"), None);

    let mut list = ReviewListComponent::new();
    list.update_data(&[Review::new("1", "Great"), Review::new("9", "Lost")], &games);
    assert_eq!(list.display_title(&list.reviews[0]), "A");
    assert_eq!(list.display_title(&list.reviews[1]), "Unknown game");

    let screen = render_to_string(&mut list, 50, 12);
    assert!(screen.contains("Great"));
    assert!(screen.contains("Unknown game"));
}

#[test]
fn test_review_list_empty_state() {
    let mut list = ReviewListComponent::new();
    list.update_data(&[], &[]);

    let screen = render_to_string(&mut list, 50, 6);
    assert!(screen.contains("No reviews yet"));
}

#[test]
fn test_dialog_component_visibility() {
    let logger = Logger::new();
    for n in 0..3 {
        logger.log(format!("entry {}", n));
    }
    let mut dialog = DialogComponent::new(logger);
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(press(KeyCode::Esc)), Action::None));

    assert!(matches!(dialog.update(Action::ShowDialog(DialogType::Logs)), Action::None));
    assert!(dialog.is_visible());

    // Scrolling stays inside the dialog
    assert!(matches!(dialog.handle_key_events(press(KeyCode::Char('j'))), Action::None));
    assert_eq!(dialog.scroll_offset, 1);

    assert!(matches!(dialog.handle_key_events(press(KeyCode::Char('G'))), Action::HideDialog));
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.scroll_offset, 0);

    // Unrelated actions pass through
    assert!(matches!(dialog.update(Action::Reload), Action::Reload));
}

#[test]
fn test_dialog_scroll_stays_within_content() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.update(Action::ShowDialog(DialogType::Help));
    let help_lines = gameshelf::ui::components::dialogs::system_dialogs::HELP_TEXT.lines().count();

    // Before the first render the bound is the content length
    dialog.handle_key_events(press(KeyCode::End));
    assert_eq!(dialog.scroll_offset, help_lines - 1);

    // Rendering tightens the bound to what fills the viewport
    render_to_string(&mut dialog, 80, 20);
    let max_scroll = dialog.max_scroll();
    assert!(max_scroll > 0 && max_scroll < help_lines);
    assert_eq!(dialog.scroll_offset, max_scroll);

    dialog.handle_key_events(press(KeyCode::End));
    dialog.handle_key_events(press(KeyCode::Down));
    dialog.handle_key_events(press(KeyCode::PageDown));
    assert_eq!(dialog.scroll_offset, max_scroll);

    // One step up moves the view right away
    dialog.handle_key_events(press(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, max_scroll - 1);

    dialog.handle_key_events(press(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);

    // An empty log fits on screen and never scrolls
    dialog.update(Action::ShowDialog(DialogType::Logs));
    dialog.handle_key_events(press(KeyCode::Char('j')));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_logs_dialog_shows_entries() {
    let logger = Logger::new();
    logger.log("Games received".to_string());
    let mut dialog = DialogComponent::new(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let screen = render_to_string(&mut dialog, 80, 20);
    assert!(screen.contains("Games received"));
}

#[test]
fn test_status_bar_text() {
    let idle = StatusBar::status_text(Focus::Games, 0);
    assert!(idle.contains("q: quit"));
    assert!(!idle.contains("in flight"));

    let busy = StatusBar::status_text(Focus::GameForm, 2);
    assert!(busy.contains("2 request(s) in flight"));
    assert!(busy.contains("Esc: back"));
}
