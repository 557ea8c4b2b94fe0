mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, Feature, LoggingConfig, ObserverConfig, PageContent, Slide, TabContent, UiConfig,
};
