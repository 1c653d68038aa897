mod app_config;
mod file_config;
mod loader;

pub use app_config::{
    AppConfig, BlockCheckConfig, LogConfig, ReportConfig, ReportStrategyKind, StoreConfig,
    TelegramConfig,
};
pub use loader::load;
