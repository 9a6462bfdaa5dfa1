// ============================================================================
// Numeric Module
// Unicode numeral classification and formatter error types
// ============================================================================
//
// This module provides:
// - Script-aware decimal digit detection (any Unicode Nd digit, not only ASCII)
// - Digit value lookup and transliteration between scripts
// - FormatterError: Error type for formatting and configuration
//
// Design principles:
// - Classification works on grapheme clusters, never on bytes
// - Lookups are table driven and allocation free

mod digits;
mod errors;

pub use digits::{digit_in_script, digit_value, is_digit_char, is_numeral, to_ascii_digit};
pub use errors::{FormatterError, FormatterResult};
