use crate::theme::{focused_border, label_text, popup_bg};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Clear a centered area, draw a titled block and return its inner area.
pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    border_style: Style,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Yes/no popup: a wrapped message above a key hint line.
pub fn render_confirm_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    message_style: Style,
    hint: &str,
) {
    let inner = render_popup_with_block(frame, title, focused_border(), 60, 35);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(message.to_string())
        .style(message_style)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    frame.render_widget(Paragraph::new(hint.to_string()).style(label_text()), chunks[1]);
}
