pub mod settings;

pub use settings::{AppConfig, BackendConfig, SessionConfig, UiConfig};
