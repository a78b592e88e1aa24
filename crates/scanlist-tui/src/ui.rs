use crate::app::{App, AppMode, Focus, EXPORT_WARNING, EXPORT_WARNING_TITLE, MENU_ENTRIES};
use crate::components::*;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};
use scanlist_export::PermissionRationale;

pub const SCREEN_TITLE: &str = "Scanning";
const INPUT_PLACEHOLDER: &str = "Enter text here";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_items(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    match app.mode {
        AppMode::Menu => render_menu_popup(app, frame),
        AppMode::ConfirmExport => render_confirm_popup(
            frame,
            EXPORT_WARNING_TITLE,
            EXPORT_WARNING,
            highlight_text(),
            "ENTER/y: proceed, n/ESC: cancel",
        ),
        AppMode::PermissionPrompt => {
            let rationale = PermissionRationale::external_storage();
            let hint = format!("ENTER/y: {}, n/ESC: deny", rationale.button_positive);
            render_confirm_popup(frame, &rationale.title, &rationale.message, normal_text(), &hint);
        }
        AppMode::Normal => {}
    }

    if let Some(notice) = app.current_notice() {
        render_notice_popup(frame, notice, app.notices.len() - 1);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Span::styled(SCREEN_TITLE, title_text())),
        inner,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("⋮ menu [m]", label_text())).alignment(Alignment::Right),
        inner,
    );
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Input && app.mode == AppMode::Normal;
    let block = Block::default()
        .title("New item")
        .borders(Borders::ALL)
        .border_style(border(focused));

    let content = if app.input.is_empty() {
        Paragraph::new(Span::styled(INPUT_PLACEHOLDER, label_text()))
    } else {
        Paragraph::new(Span::styled(app.input.as_str(), normal_text()))
    };
    let inner = block.inner(area);
    frame.render_widget(content.block(block), area);

    if focused && app.current_notice().is_none() {
        let column = u16::try_from(app.input.cursor_column()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(column);
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_items(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List && app.mode == AppMode::Normal;
    let block = Block::default()
        .title(format!("Items ({})", app.store.len()))
        .borders(Borders::ALL)
        .border_style(border(focused));

    if app.store.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No items yet. Type text above and press Enter.",
            label_text(),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let row_width = block.inner(area).width;
    let rows: Vec<_> = app
        .store
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let selected = focused && app.selection.is_selected(idx);
            item_row(&item.text, selected, row_width)
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(selected_item(focused));
    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match (app.mode, app.focus) {
        (AppMode::Menu, _) => "j/k: move | ENTER: select | ESC: close",
        (AppMode::ConfirmExport, _) | (AppMode::PermissionPrompt, _) => "y: yes | n: no",
        (AppMode::Normal, Focus::Input) => {
            "ENTER: add | Ctrl-e: export | Ctrl-x: export (no confirm) | TAB/ESC: list"
        }
        (AppMode::Normal, Focus::List) => {
            "j/k: move | d: delete | e: export | E: export (no confirm) | m: menu | i: input | q: quit"
        }
    };

    let footer = Paragraph::new(Line::from(Span::styled(help_text, label_text())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_menu_popup(app: &App, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Menu", focused_border(), 40, 25);

    let lines: Vec<Line> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if app.menu_selection.is_selected(idx) {
                selected_item(true)
            } else {
                normal_text()
            };
            Line::from(Span::styled(format!(" {} ", entry), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
