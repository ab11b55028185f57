//! Editor Configuration
//!
//! Settings shared through Leptos context.

use log::LevelFilter;

/// Storage key holding the serialized todo list
pub const TODOS_KEY: &str = "todos";

/// Delay before the loading indicator is cleared after hydration
pub const LOADING_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, Debug)]
pub struct EditorConfig {
    pub storage_key: &'static str,
    pub loading_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: TODOS_KEY,
            loading_delay_ms: LOADING_DELAY_MS,
            log_level: LevelFilter::Info,
        }
    }
}
