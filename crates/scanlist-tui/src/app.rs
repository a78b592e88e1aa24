use crate::dialog::{handle_confirm_key, handle_input_key, ConfirmAction, InputAction};
use crate::events::{Event, EventHandler};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scanlist_core::{AppConfig, InputState, ScanlistResult, SelectionState};
use scanlist_domain::{ItemId, ItemStore};
use scanlist_export::{
    ExportOutcome, ExportPipeline, ExportSettings, Notice, PermissionGate, ShareTarget,
    StaticPermission, SystemShare,
};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub const MENU_ENTRIES: &[&str] = &["Load new DB"];
const LOAD_DB_ENTRY: usize = 0;

pub const EXPORT_WARNING_TITLE: &str = "Security Warning";
pub const EXPORT_WARNING: &str = "The library used for Excel export has a known high-severity vulnerability. Proceed with caution.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Menu,
    ConfirmExport,
    PermissionPrompt,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub input: InputState,
    pub store: ItemStore,
    pub selection: SelectionState,
    pub menu_selection: SelectionState,
    pub notices: VecDeque<Notice>,
    /// Set once the user grants storage access; later exports skip the prompt.
    pub storage_permission_granted: bool,
    pub last_export_path: Option<PathBuf>,
    confirm_before_export: bool,
    settings: ExportSettings,
    share: Arc<dyn ShareTarget>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let share = Arc::new(SystemShare::detect(config.share_command.as_deref()));
        Self::with_share(config, share)
    }

    pub fn with_share(config: AppConfig, share: Arc<dyn ShareTarget>) -> Self {
        Self::with_settings(
            ExportSettings::from_config(&config),
            config.effective_confirm_before_export(),
            share,
        )
    }

    pub fn with_settings(
        settings: ExportSettings,
        confirm_before_export: bool,
        share: Arc<dyn ShareTarget>,
    ) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Input,
            input: InputState::new(),
            store: ItemStore::new(),
            selection: SelectionState::new(),
            menu_selection: SelectionState::new(),
            notices: VecDeque::new(),
            storage_permission_granted: false,
            last_export_path: None,
            confirm_before_export,
            settings,
            share,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Add the pending input as an item. Blank input is ignored and kept.
    pub fn add_item(&mut self) {
        if self.store.add(self.input.as_str()).is_some() {
            self.input.clear();
            self.selection.jump_to_last(self.store.len());
        }
    }

    pub fn delete_item(&mut self, id: &ItemId) {
        if self.store.remove(id).is_some() {
            self.selection.clamp(self.store.len());
        }
    }

    pub fn delete_selected(&mut self) {
        let selected_id = self
            .selection
            .get()
            .and_then(|idx| self.store.get(idx))
            .map(|item| item.id.clone());
        if let Some(id) = selected_id {
            self.delete_item(&id);
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Start an export, behind the warning popup when `confirm` is set and
    /// the config asks for it.
    pub async fn request_export(&mut self, confirm: bool) {
        if confirm && self.confirm_before_export {
            tracing::debug!("Export requested, awaiting confirmation");
            self.mode = AppMode::ConfirmExport;
        } else {
            self.begin_export().await;
        }
    }

    async fn begin_export(&mut self) {
        self.mode = AppMode::Normal;
        if self.settings.platform.has_scoped_storage() && !self.storage_permission_granted {
            tracing::debug!("Storage permission not granted yet, prompting");
            self.mode = AppMode::PermissionPrompt;
            return;
        }
        self.run_export(Arc::new(StaticPermission::granted())).await;
    }

    async fn answer_permission(&mut self, granted: bool) {
        tracing::debug!("Storage permission answered: granted={}", granted);
        self.mode = AppMode::Normal;
        if granted {
            self.storage_permission_granted = true;
            self.run_export(Arc::new(StaticPermission::granted())).await;
        } else {
            self.run_export(Arc::new(StaticPermission::denied())).await;
        }
    }

    async fn run_export(&mut self, permission: Arc<dyn PermissionGate>) {
        let pipeline = ExportPipeline::new(self.settings.clone(), permission, self.share.clone());
        let report = pipeline.run(&self.store.snapshot()).await;
        tracing::debug!(
            "Export finished: {:?} ({} notices)",
            report.outcome,
            report.notices.len()
        );

        self.notices.extend(report.notices);
        if let ExportOutcome::Shared { path } = &report.outcome {
            self.notices.push_back(Notice::success(
                "Shared",
                format!("Excel file shared from {}", path.display()),
            ));
        }
        self.last_export_path = report.outcome.path().map(|p| p.to_path_buf());
    }

    fn select_menu_entry(&mut self) {
        self.mode = AppMode::Normal;
        if self.menu_selection.get() == Some(LOAD_DB_ENTRY) {
            tracing::debug!("Menu entry selected: {}", MENU_ENTRIES[LOAD_DB_ENTRY]);
            self.push_notice(Notice::info(
                "Load new DB",
                "Loading database functionality will be implemented here.",
            ));
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if !self.notices.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notices.pop_front();
            }
            return;
        }

        match self.mode {
            AppMode::Menu => match key.code {
                KeyCode::Esc | KeyCode::Char('m') => self.mode = AppMode::Normal,
                KeyCode::Char('j') | KeyCode::Down => self.menu_selection.next(MENU_ENTRIES.len()),
                KeyCode::Char('k') | KeyCode::Up => self.menu_selection.prev(MENU_ENTRIES.len()),
                KeyCode::Enter => self.select_menu_entry(),
                _ => {}
            },
            AppMode::ConfirmExport => match handle_confirm_key(key) {
                ConfirmAction::Confirm => {
                    tracing::debug!("Export confirmed");
                    self.begin_export().await
                }
                ConfirmAction::Cancel => {
                    tracing::debug!("Export cancelled");
                    self.mode = AppMode::Normal
                }
                ConfirmAction::None => {}
            },
            AppMode::PermissionPrompt => match handle_confirm_key(key) {
                ConfirmAction::Confirm => self.answer_permission(true).await,
                ConfirmAction::Cancel => self.answer_permission(false).await,
                ConfirmAction::None => {}
            },
            AppMode::Normal => match self.focus {
                Focus::Input => self.handle_input_focus_key(key).await,
                Focus::List => self.handle_list_focus_key(key).await,
            },
        }
    }

    async fn handle_input_focus_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('e') => self.request_export(true).await,
                KeyCode::Char('x') => self.request_export(false).await,
                _ => {}
            }
            return;
        }

        match handle_input_key(&mut self.input, key) {
            InputAction::Submit => self.add_item(),
            InputAction::Leave => {
                self.focus = Focus::List;
                self.selection.clamp(self.store.len());
                if self.selection.get().is_none() {
                    self.selection.jump_to_first(self.store.len());
                }
            }
            InputAction::None => {}
        }
    }

    async fn handle_list_focus_key(&mut self, key: KeyEvent) {
        let len = self.store.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => self.focus = Focus::Input,
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(len),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('e') => self.request_export(true).await,
            KeyCode::Char('E') => self.request_export(false).await,
            KeyCode::Char('m') => {
                self.menu_selection.jump_to_first(MENU_ENTRIES.len());
                self.mode = AppMode::Menu;
            }
            _ => {}
        }
    }

    pub async fn run(&mut self) -> ScanlistResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key).await,
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
