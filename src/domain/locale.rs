// ============================================================================
// Locale Settings
// Separators and digit script used when filtering and formatting numbers
// ============================================================================

use crate::numeric::{digit_value, is_digit_char, FormatterError, FormatterResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variables consulted by [`LocaleSettings::current`], in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Number-related conventions of a locale.
///
/// This is the injected "locale service": the filter reads the decimal
/// separator from it and the default formatter reads everything. Tests pin a
/// fixed value instead of depending on the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleSettings {
    /// Fractional boundary character (e.g. `.` or `,`)
    pub decimal_separator: char,

    /// Thousands grouping character, tolerated on parse
    pub grouping_separator: char,

    /// Sign written before negative values
    pub minus_sign: char,

    /// Digit zero of the script used for formatted output
    pub zero_digit: char,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self::en_us()
    }
}

impl LocaleSettings {
    /// Create settings with the given separators, ASCII digits and `-`.
    pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            minus_sign: '-',
            zero_digit: '0',
        }
    }

    /// Builder method: Set the minus sign
    pub fn with_minus_sign(mut self, minus_sign: char) -> Self {
        self.minus_sign = minus_sign;
        self
    }

    /// Builder method: Set the digit script for formatted output
    pub fn with_zero_digit(mut self, zero_digit: char) -> Self {
        self.zero_digit = zero_digit;
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// `1234.5` / `1,234.5`
    pub const fn en_us() -> Self {
        Self::new('.', ',')
    }

    /// `1234,5` / `1.234,5`
    pub const fn de_de() -> Self {
        Self::new(',', '.')
    }

    /// `1234,5` / `1 234,5` (narrow no-break space)
    pub const fn fr_fr() -> Self {
        Self::new(',', '\u{202F}')
    }

    /// `1234.5` / `1’234.5`
    pub const fn de_ch() -> Self {
        Self::new('.', '\u{2019}')
    }

    /// Arabic separators with Arabic-Indic digits: `١٢٣٤٫٥`
    pub const fn ar() -> Self {
        Self {
            decimal_separator: '\u{066B}',
            grouping_separator: '\u{066C}',
            minus_sign: '-',
            zero_digit: '\u{0660}',
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Settings for a POSIX or BCP 47 locale identifier.
    ///
    /// Accepts forms such as `de_DE.UTF-8`, `fr-CA`, `en_US@posix` or `C`.
    /// Returns `None` for unknown languages.
    pub fn by_code(code: &str) -> Option<Self> {
        let code = code
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('-', "_")
            .to_ascii_lowercase();

        if code.is_empty() {
            return None;
        }

        // Region-specific overrides first
        match code.as_str() {
            "de_ch" | "it_ch" | "fr_ch" | "rm_ch" | "de_li" => return Some(Self::de_ch()),
            "es_mx" | "es_us" | "pt_mo" => return Some(Self::en_us()),
            _ => {}
        }

        let language = code.split('_').next().unwrap_or_default();
        let settings = match language {
            "c" | "posix" | "en" | "ja" | "zh" | "ko" | "he" | "th" | "hi" | "ga" | "ms"
            | "fil" | "sw" => Self::en_us(),
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
            | "sr" | "is" | "ca" | "vi" => Self::de_de(),
            "fr" => Self::fr_fr(),
            "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "no" | "nn" | "uk" | "hu" | "bg"
            | "lt" | "lv" | "et" => Self::new(',', '\u{00A0}'),
            "ar" => Self::ar(),
            _ => return None,
        };
        Some(settings)
    }

    /// Settings for the process locale.
    ///
    /// Reads `LC_ALL`, `LC_NUMERIC` then `LANG`; the first non-empty value
    /// wins. Falls back to the default (`.` decimal separator) when nothing is
    /// set or the locale is unknown.
    pub fn current() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let code = LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty());

        match code {
            Some(code) => Self::by_code(&code).unwrap_or_else(|| {
                tracing::warn!("Unknown locale {:?}, using default number settings", code);
                Self::default()
            }),
            None => {
                tracing::debug!("No locale set in environment, using default number settings");
                Self::default()
            }
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate that the settings can round-trip numbers unambiguously
    pub fn validate(&self) -> FormatterResult<()> {
        if is_digit_char(self.decimal_separator) {
            return Err(FormatterError::InvalidConfiguration(
                "decimal separator cannot be a digit".to_string(),
            ));
        }

        if is_digit_char(self.grouping_separator) {
            return Err(FormatterError::InvalidConfiguration(
                "grouping separator cannot be a digit".to_string(),
            ));
        }

        if self.decimal_separator == self.grouping_separator {
            return Err(FormatterError::InvalidConfiguration(
                "decimal and grouping separators must differ".to_string(),
            ));
        }

        if self.minus_sign == self.decimal_separator || is_digit_char(self.minus_sign) {
            return Err(FormatterError::InvalidConfiguration(
                "minus sign must be distinct from digits and the decimal separator".to_string(),
            ));
        }

        if digit_value(self.zero_digit) != Some(0) {
            return Err(FormatterError::InvalidConfiguration(format!(
                "{:?} is not a digit zero",
                self.zero_digit
            )));
        }

        Ok(())
    }
}
