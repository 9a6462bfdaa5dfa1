// ============================================================================
// Engine Module
// Contains the filtering, formatting and synchronization logic
// ============================================================================

mod decimal_formatter;
mod filter;
mod synchronizer;

pub mod factory;

pub use decimal_formatter::DecimalFormatter;
pub use factory::{create_from_config, TextNumberSyncBuilder};
pub use filter::{filter_numeric_text, NumericFilter};
pub use synchronizer::TextNumberSync;
