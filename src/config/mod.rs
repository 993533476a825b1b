mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    CONFIG_VERSION, CheckerConfig, ClassifierConfig, Config, DEFAULT_REPORT_PATH, MatchMode,
    ReportConfig, ScannerConfig,
};
pub use validation::validate_config_semantics;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
