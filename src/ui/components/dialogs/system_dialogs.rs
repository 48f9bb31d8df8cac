use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub const HELP_TEXT: &str = r"
GAMESHELF - Games & Reviews
===========================

GAMES
-----
j/k ↑↓      Select game
d / Delete  Delete selected game
n           Add a new game (opens the form)

NEW GAME FORM
-------------
Tab/↓       Next field
Shift+Tab/↑ Previous field
Enter       Add the game (name, platform and hours are required)
Esc         Back to the games list

REVIEWS
-------
w           Write a review
Tab/↓ ↑     Choose the reviewed game
Enter       Post the review
Esc         Back to the games list

GENERAL
-------
R           Reload games and reviews
G           Show logs
?           Toggle this help
q / Ctrl+C  Quit

Reviews are kept in memory only and are lost on exit.

Press 'Esc', '?' or 'h' to close this help panel
";

/// Text shown in the logs dialog, newest entry first
pub fn logs_content(logger: &Logger) -> String {
    let logs = logger.get_logs();
    if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    }
}

/// Render a scrollable block of text in a large centered popup.
/// Returns the largest offset that still fills the viewport.
fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let popup_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, popup_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, popup_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, popup_area, scrollbar_state);
    }

    max_scroll
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    render_scrollable_text(
        f,
        area,
        "📖 Help - Press 'Esc', '?' or 'h' to close",
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    )
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let content = logs_content(logger);
    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state)
}
