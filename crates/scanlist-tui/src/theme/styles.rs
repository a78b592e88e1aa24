use super::colors::*;
use ratatui::style::{Color, Modifier, Style};
use scanlist_export::NoticeLevel;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn border(focused: bool) -> Style {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn title_text() -> Style {
    Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
}

pub fn delete_icon() -> Style {
    Style::default().fg(DELETE_ICON)
}

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => NOTICE_INFO,
        NoticeLevel::Success => NOTICE_SUCCESS,
        NoticeLevel::Warning => NOTICE_WARNING,
        NoticeLevel::Error => NOTICE_ERROR,
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
