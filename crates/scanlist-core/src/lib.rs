pub mod config;
pub mod error;
pub mod input;
pub mod platform;
pub mod result;
pub mod selection;

pub use config::{AppConfig, PrivateDir};
pub use error::ScanlistError;
pub use input::InputState;
pub use platform::Platform;
pub use result::ScanlistResult;
pub use selection::SelectionState;
