use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const TITLE_TEXT: Color = Color::Green;
pub const DELETE_ICON: Color = Color::Red;

pub const NOTICE_INFO: Color = Color::Cyan;
pub const NOTICE_SUCCESS: Color = Color::Green;
pub const NOTICE_WARNING: Color = Color::Yellow;
pub const NOTICE_ERROR: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;
