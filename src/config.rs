//! Configuration: settings file, validation and the resolved merge job
/// Resolved job handed to the runner
mod job;
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use job::{
    LocaleTarget,
    MergeJob,
};
pub use loader::{
    CONFIG_FILE_NAME,
    load_job,
    load_settings,
};
pub use types::{
    ConfigError,
    DEFAULT_LANGUAGES,
    MergeSettings,
    ValidationError,
};
