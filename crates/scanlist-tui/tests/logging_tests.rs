use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scanlist_core::{Platform, PrivateDir};
use scanlist_export::{ExportSettings, FileNamer, NoShare, StorageLayout};
use scanlist_tui::App;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_debug_log() -> (CapturedLog, tracing::subscriber::DefaultGuard) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_export_decisions_are_logged() {
    let (log, _guard) = capture_debug_log();
    let dir = tempdir().unwrap();
    let settings = ExportSettings {
        platform: Platform::Android,
        layout: StorageLayout::under(dir.path()),
        private_dir: PrivateDir::Documents,
        namer: FileNamer::new(false),
    };
    let mut app = App::with_settings(settings, true, Arc::new(NoShare));

    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL))
        .await;
    app.handle_key(key(KeyCode::Char('y'))).await;
    app.handle_key(key(KeyCode::Char('n'))).await;

    let output = log.contents();
    assert!(output.contains("Export requested, awaiting confirmation"));
    assert!(output.contains("Export confirmed"));
    assert!(output.contains("Storage permission answered: granted=false"));
    assert!(output.contains("Export finished: PermissionDenied"));
}

#[tokio::test]
async fn test_menu_choice_is_logged() {
    let (log, _guard) = capture_debug_log();
    let dir = tempdir().unwrap();
    let settings = ExportSettings {
        platform: Platform::Desktop,
        layout: StorageLayout::under(dir.path()),
        private_dir: PrivateDir::Documents,
        namer: FileNamer::new(false),
    };
    let mut app = App::with_settings(settings, true, Arc::new(NoShare));

    app.handle_key(key(KeyCode::Tab)).await;
    app.handle_key(key(KeyCode::Char('m'))).await;
    app.handle_key(key(KeyCode::Enter)).await;

    assert!(log.contents().contains("Menu entry selected: Load new DB"));
}
