//! Handing an exported file to the system.

use crate::ExportError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn is_available(&self) -> bool;

    async fn share(&self, path: &Path) -> Result<(), ExportError>;
}

/// Opens the file with the desktop's opener program.
#[derive(Debug, Clone)]
pub struct SystemShare {
    program: String,
    args: Vec<String>,
}

impl SystemShare {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Opener for this OS, or `command` when configured. A configured command
    /// is split on whitespace: the first word is the program.
    pub fn detect(command: Option<&str>) -> Self {
        if let Some(command) = command {
            let mut words = command.split_whitespace().map(str::to_string);
            if let Some(program) = words.next() {
                return Self::new(program, words.collect());
            }
        }

        if cfg!(target_os = "macos") {
            Self::new("open", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("cmd", vec!["/C".to_string(), "start".to_string(), String::new()])
        } else {
            Self::new("xdg-open", Vec::new())
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn resolve_program(&self) -> Option<PathBuf> {
        let candidate = Path::new(&self.program);
        if candidate.components().count() > 1 {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }

        let path_var = std::env::var_os("PATH")?;
        std::env::split_paths(&path_var).find_map(|dir| {
            let full = dir.join(&self.program);
            if full.is_file() {
                return Some(full);
            }
            if cfg!(windows) {
                let exe = dir.join(format!("{}.exe", self.program));
                if exe.is_file() {
                    return Some(exe);
                }
            }
            None
        })
    }
}

#[async_trait]
impl ShareTarget for SystemShare {
    async fn is_available(&self) -> bool {
        self.resolve_program().is_some()
    }

    async fn share(&self, path: &Path) -> Result<(), ExportError> {
        tracing::debug!("Sharing {} via {}", path.display(), self.program);
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ExportError::Share(format!("{}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ExportError::Share(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// No share mechanism; the pipeline reports where the file was saved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

#[async_trait]
impl ShareTarget for NoShare {
    async fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _path: &Path) -> Result<(), ExportError> {
        Err(ExportError::ShareUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_splits_configured_command() {
        let share = SystemShare::detect(Some("termux-share -a send"));
        assert_eq!(share.program(), "termux-share");
        assert_eq!(share.args, vec!["-a".to_string(), "send".to_string()]);
    }

    #[test]
    fn test_detect_blank_command_uses_os_default() {
        let share = SystemShare::detect(Some("   "));
        assert!(!share.program().is_empty());
        assert!(!share.program().contains(' '));
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let share = SystemShare::new("scanlist-no-such-opener-3f9a", Vec::new());
        assert!(!share.is_available().await);
    }

    #[tokio::test]
    async fn test_no_share() {
        assert!(!NoShare.is_available().await);
        assert!(matches!(
            NoShare.share(Path::new("items.xlsx")).await,
            Err(ExportError::ShareUnavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_share_runs_program_with_path() {
        let share = SystemShare::new("true", Vec::new());
        assert!(share.is_available().await);
        assert!(share.share(Path::new("items.xlsx")).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_share_reports_failing_exit_status() {
        let share = SystemShare::new("false", Vec::new());
        match share.share(Path::new("items.xlsx")).await {
            Err(ExportError::Share(msg)) => assert!(msg.starts_with("false exited with")),
            other => panic!("expected share error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_share_reports_spawn_failure() {
        let share = SystemShare::new("/nonexistent/scanlist-opener", Vec::new());
        assert!(!share.is_available().await);
        assert!(matches!(
            share.share(Path::new("items.xlsx")).await,
            Err(ExportError::Share(_))
        ));
    }
}
