// ============================================================================
// Formatter Errors
// Error types for number formatting and field configuration
// ============================================================================

/// Errors surfaced by formatters and configuration validation.
///
/// Unparsable text is never an error: parsing yields `None` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatterError {
    /// Locale or field settings are inconsistent
    #[error("invalid formatter configuration: {0}")]
    InvalidConfiguration(String),
    /// The formatter refused to render a value
    #[error("value cannot be formatted: {0}")]
    Unformattable(String),
}

/// Result type alias for formatter operations
pub type FormatterResult<T> = Result<T, FormatterError>;
