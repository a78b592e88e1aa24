use super::popup::render_popup_with_block;
use crate::theme::{label_text, notice_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};
use scanlist_export::Notice;

/// Modal notice; `pending` counts notices queued behind this one.
pub fn render_notice_popup(frame: &mut Frame, notice: &Notice, pending: usize) {
    let color = notice_color(notice.level);
    let inner = render_popup_with_block(
        frame,
        &notice.title,
        Style::default().fg(color),
        60,
        35,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notice.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let hint = if pending > 0 {
        format!("ENTER/ESC: dismiss ({} more)", pending)
    } else {
        "ENTER/ESC: dismiss".to_string()
    };
    frame.render_widget(
        Paragraph::new(hint).style(label_text()).alignment(Alignment::Center),
        chunks[1],
    );
}
