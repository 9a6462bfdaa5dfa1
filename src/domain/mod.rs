// ============================================================================
// Domain Models Module
// Contains locale conventions and field configuration
// ============================================================================

pub mod config;
pub mod locale;

pub use config::FieldConfig;
pub use locale::LocaleSettings;
