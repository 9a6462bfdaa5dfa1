// ============================================================================
// Numeric Field Factory
// Creates synchronizers with proper configuration
// ============================================================================

use crate::domain::{FieldConfig, LocaleSettings};
use crate::engine::{DecimalFormatter, TextNumberSync};
use crate::interfaces::{NoOpObserver, SyncObserver};
use crate::numeric::FormatterResult;
use rust_decimal::Decimal;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a synchronizer with the default decimal formatter from configuration
///
/// # Arguments
/// * `config` - Field configuration
/// * `initial` - Number the field starts with
/// * `observer` - Host callbacks for corrected values
///
/// # Example
/// ```
/// use numeric_text::prelude::*;
///
/// let config = FieldConfig::new(false, LocaleSettings::en_us());
/// let mut field = create_from_config(config, None, Box::new(NoOpObserver)).unwrap();
/// field.submit_text_change("12a3");
/// assert_eq!(field.text(), "123");
/// ```
pub fn create_from_config(
    config: FieldConfig,
    initial: Option<Decimal>,
    observer: Box<dyn SyncObserver>,
) -> FormatterResult<TextNumberSync<DecimalFormatter>> {
    // Validates the configuration as well
    let formatter = DecimalFormatter::from_config(&config)?;

    Ok(TextNumberSync::new(
        initial,
        config.is_decimal_allowed,
        config.locale,
        formatter,
        observer,
    ))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating synchronizers with fluent API
///
/// # Example
/// ```
/// use numeric_text::prelude::*;
/// use rust_decimal::Decimal;
///
/// let field = TextNumberSyncBuilder::decimal()
///     .with_locale(LocaleSettings::de_de())
///     .with_grouping(true)
///     .with_initial(Decimal::new(12345, 1))
///     .build()
///     .unwrap();
///
/// assert_eq!(field.text(), "1.234,5");
/// ```
pub struct TextNumberSyncBuilder {
    config: FieldConfig,
    initial: Option<Decimal>,
    observer: Box<dyn SyncObserver>,
}

impl TextNumberSyncBuilder {
    /// Create a new builder for the process locale; decimals are allowed when
    /// `is_decimal_allowed`
    pub fn new(is_decimal_allowed: bool) -> Self {
        Self::from_config(FieldConfig::new(is_decimal_allowed, LocaleSettings::current()))
    }

    /// Whole numbers only, process locale
    pub fn integer() -> Self {
        Self::new(false)
    }

    /// Decimal numbers, process locale
    pub fn decimal() -> Self {
        Self::new(true)
    }

    /// Start from an existing configuration
    pub fn from_config(config: FieldConfig) -> Self {
        Self {
            config,
            initial: None,
            observer: Box::new(NoOpObserver),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set the locale
    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.config.locale = locale;
        self
    }

    /// Use the process locale
    pub fn with_current_locale(self) -> Self {
        self.with_locale(LocaleSettings::current())
    }

    /// Resolve the locale from `LC_ALL` / `LC_NUMERIC` / `LANG` values
    /// supplied by `lookup` instead of the process environment
    pub fn with_locale_lookup<L>(self, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        self.with_locale(LocaleSettings::from_lookup(lookup))
    }

    /// Set maximum fraction digits for formatted text
    pub fn with_maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.config.maximum_fraction_digits = digits;
        self
    }

    /// Enable grouping separators in formatted text
    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.config.uses_grouping = uses_grouping;
        self
    }

    /// Set the number the field starts with
    pub fn with_initial(mut self, initial: Decimal) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Set host callbacks
    pub fn with_observer(mut self, observer: impl SyncObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build with the default decimal formatter
    pub fn build(self) -> FormatterResult<TextNumberSync<DecimalFormatter>> {
        create_from_config(self.config, self.initial, self.observer)
    }

    /// Build with a caller-supplied formatter
    pub fn build_with_formatter<F: crate::interfaces::NumberFormatter>(
        self,
        formatter: F,
    ) -> FormatterResult<TextNumberSync<F>> {
        self.config.validate()?;
        Ok(TextNumberSync::new(
            self.initial,
            self.config.is_decimal_allowed,
            self.config.locale,
            formatter,
            self.observer,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CallbackObserver, NumberFormatter};
    use crate::numeric::FormatterError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_create_integer_field() {
        let config = FieldConfig::new(false, LocaleSettings::en_us());
        let mut field = create_from_config(config, None, Box::new(NoOpObserver)).unwrap();

        field.submit_text_change("1.5");
        assert_eq!(field.text(), "15");
        assert!(!field.is_decimal_allowed());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = FieldConfig::default().with_maximum_fraction_digits(40);
        assert!(matches!(
            create_from_config(config, None, Box::new(NoOpObserver)),
            Err(FormatterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let field = TextNumberSyncBuilder::decimal()
            .with_locale(LocaleSettings::fr_fr())
            .with_maximum_fraction_digits(1)
            .with_initial(Decimal::new(2675, 2))
            .build()
            .unwrap();

        assert_eq!(field.text(), "26,8");
        assert_eq!(field.decimal_separator(), ',');
    }

    #[test]
    fn test_builder_with_observer() {
        let shown = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&shown);

        let mut field = TextNumberSyncBuilder::integer()
            .with_locale(LocaleSettings::en_us())
            .with_observer(CallbackObserver::new(
                move |text: &str| *sink.borrow_mut() = text.to_string(),
                |_| {},
            ))
            .build()
            .unwrap();

        field.submit_text_change("4 2");
        assert_eq!(shown.borrow().as_str(), "42");
    }

    fn en_us() -> DecimalFormatter {
        DecimalFormatter::new(LocaleSettings::en_us()).unwrap()
    }

    struct Doubling;

    impl NumberFormatter for Doubling {
        fn parse(&self, text: &str) -> Option<Decimal> {
            en_us().parse(text).map(|n| n * Decimal::TWO)
        }

        fn format(&self, value: &Decimal) -> FormatterResult<String> {
            en_us().format(&(*value / Decimal::TWO))
        }

        fn name(&self) -> &str {
            "doubling"
        }
    }

    #[test]
    fn test_builder_custom_formatter() {
        let mut field = TextNumberSyncBuilder::integer()
            .with_locale(LocaleSettings::en_us())
            .build_with_formatter(Doubling)
            .unwrap();

        field.submit_text_change("21");
        assert_eq!(field.number(), Some(Decimal::from(42)));
        assert_eq!(field.formatter().name(), "doubling");
    }

    #[test]
    fn test_get_config() {
        let builder = TextNumberSyncBuilder::decimal().with_grouping(true);
        assert!(builder.get_config().uses_grouping);
        assert!(builder.get_config().is_decimal_allowed);
    }

    #[test]
    fn test_presets_follow_process_locale() {
        let current = LocaleSettings::current();
        assert_eq!(TextNumberSyncBuilder::decimal().get_config().locale, current);
        assert_eq!(TextNumberSyncBuilder::integer().get_config().locale, current);
        assert_eq!(FieldConfig::decimal().locale, current);
    }

    #[test]
    fn test_german_lang_parses_comma() {
        let mut field = TextNumberSyncBuilder::decimal()
            .with_locale_lookup(|key| (key == "LANG").then(|| "de_DE.UTF-8".to_string()))
            .build()
            .unwrap();

        assert_eq!(field.decimal_separator(), ',');
        field.submit_text_change("12,5");
        assert_eq!(field.text(), "12,5");
        assert_eq!(field.number(), Some(Decimal::new(125, 1)));

        field.submit_number_change(Some(Decimal::new(75, 1))).unwrap();
        assert_eq!(field.text(), "7,5");
    }

    #[test]
    fn test_locale_lookup_precedence() {
        let builder = TextNumberSyncBuilder::decimal().with_locale_lookup(|key| match key {
            "LC_ALL" => Some(String::new()),
            "LC_NUMERIC" => Some("fr_FR.UTF-8".to_string()),
            "LANG" => Some("en_US.UTF-8".to_string()),
            _ => None,
        });
        assert_eq!(builder.get_config().locale, LocaleSettings::fr_fr());
    }
}
