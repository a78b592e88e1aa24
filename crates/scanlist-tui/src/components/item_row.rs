use crate::theme::{delete_icon, label_text, normal_text};
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

const DELETE_AFFORDANCE: &str = "✕";

/// One list row: the item text with a delete marker pushed to the right edge.
pub fn item_row(text: &str, selected: bool, width: u16) -> ListItem<'static> {
    let hint = if selected { "[d] " } else { "" };
    let trailer_width = Span::raw(hint).width() + Span::raw(DELETE_AFFORDANCE).width();
    let gap = (width as usize)
        .saturating_sub(Span::raw(text).width())
        .saturating_sub(trailer_width)
        .max(1);

    ListItem::new(Line::from(vec![
        Span::styled(text.to_string(), normal_text()),
        Span::raw(" ".repeat(gap)),
        Span::styled(hint.to_string(), label_text()),
        Span::styled(DELETE_AFFORDANCE.to_string(), delete_icon()),
    ]))
}
