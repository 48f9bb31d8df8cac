use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Border color of a panel depending on whether it has keyboard focus
pub fn panel_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::Gray
    }
}

/// Creates a styled panel block
pub fn create_panel_block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let color = panel_color(focused);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(color))
}

/// Creates an input field block, with a visual cursor when active
pub fn create_input_paragraph<'a>(input_buffer: &str, field_title: &str, active: bool) -> Paragraph<'a> {
    let input_display = if active {
        format!("{}█", input_buffer)
    } else {
        input_buffer.to_string()
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph(value: String, field_title: &str, active: bool) -> Paragraph<'static> {
    let border_color = if active { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(value).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across panels
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_LEAVE: InstructionShortcut = ("Esc", Color::Red, " Leave");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
}
