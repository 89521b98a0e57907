mod loader;

pub use loader::{AliasConfig, Config, ConfigError, ExampleLimits, ReportConfig};
