// ============================================================================
// Text/Number Synchronizer
// Keeps a raw text buffer and a parsed number consistent
// ============================================================================

use super::decimal_formatter::DecimalFormatter;
use super::filter::NumericFilter;
use crate::domain::LocaleSettings;
use crate::interfaces::{NoOpObserver, NumberFormatter, SyncEvent, SyncObserver};
use crate::numeric::FormatterResult;
use rust_decimal::Decimal;

/// Bidirectional adapter between a text field and an optional number.
///
/// The host calls [`submit_text_change`](Self::submit_text_change) on every
/// edit and [`submit_number_change`](Self::submit_number_change) when the bound
/// number is set from outside. Corrections are pushed back through the
/// observer and also returned to the caller.
///
/// Each submission is one atomic step: `&mut self` rules out re-entry, and
/// the observer only runs after both cells are committed. Submissions that
/// echo the current state are ignored, so a host that feeds every change back
/// in does not loop.
pub struct TextNumberSync<F: NumberFormatter = DecimalFormatter> {
    /// Current text as shown by the host
    text: String,

    /// Current parsed number
    number: Option<Decimal>,

    /// Filter for typed text
    filter: NumericFilter,

    /// Pluggable formatter
    formatter: F,

    /// Host callbacks
    observer: Box<dyn SyncObserver>,
}

impl<F: NumberFormatter> TextNumberSync<F> {
    /// Create a synchronizer seeded from an optional initial number.
    ///
    /// Text starts as the formatted number, or empty if there is none or the
    /// formatter refuses it.
    pub fn new(
        initial: Option<Decimal>,
        is_decimal_allowed: bool,
        locale: LocaleSettings,
        formatter: F,
        observer: Box<dyn SyncObserver>,
    ) -> Self {
        let text = match initial {
            Some(value) => formatter.format(&value).unwrap_or_else(|err| {
                tracing::warn!("Initial value {} not formattable: {}", value, err);
                String::new()
            }),
            None => String::new(),
        };

        tracing::debug!(
            "Created numeric field with {} formatter (decimals allowed: {})",
            formatter.name(),
            is_decimal_allowed
        );

        Self {
            text,
            number: initial,
            filter: NumericFilter::for_locale(is_decimal_allowed, &locale),
            formatter,
            observer,
        }
    }

    /// Synchronizer without callbacks; read state back via the accessors
    pub fn detached(
        initial: Option<Decimal>,
        is_decimal_allowed: bool,
        locale: LocaleSettings,
        formatter: F,
    ) -> Self {
        Self::new(
            initial,
            is_decimal_allowed,
            locale,
            formatter,
            Box::new(NoOpObserver),
        )
    }

    // ========================================================================
    // Triggers
    // ========================================================================

    /// The user edited the text.
    ///
    /// Filters `new_text`, replaces the text if filtering changed it, then
    /// parses the canonical text into the number.
    pub fn submit_text_change(&mut self, new_text: &str) -> Vec<SyncEvent> {
        if new_text == self.text {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        let canonical = self.filter.apply(new_text);

        if canonical != new_text {
            tracing::debug!("Corrected text {:?} to {:?}", new_text, canonical);
            events.push(SyncEvent::TextCorrected {
                from: new_text.to_string(),
                to: canonical.clone(),
            });
        }

        let number = self.formatter.parse(&canonical);
        tracing::debug!("Parsed {:?} as {:?}", canonical, number);

        self.number = number;
        self.text = canonical.clone();
        events.push(SyncEvent::NumberParsed {
            text: canonical,
            number,
        });

        self.observer.on_events(&events);
        events
    }

    /// The bound number was set from outside.
    ///
    /// # Errors
    /// A formatter failure is returned unchanged and leaves the state as it
    /// was.
    pub fn submit_number_change(
        &mut self,
        new_number: Option<Decimal>,
    ) -> FormatterResult<Vec<SyncEvent>> {
        if new_number == self.number {
            return Ok(Vec::new());
        }

        let text = match new_number {
            Some(value) => self.formatter.format(&value)?,
            None => String::new(),
        };
        tracing::debug!("Formatted {:?} as {:?}", new_number, text);

        self.number = new_number;
        self.text = text.clone();

        let events = vec![SyncEvent::TextFormatted {
            number: new_number,
            text,
        }];
        self.observer.on_events(&events);
        Ok(events)
    }

    /// Clear both cells
    pub fn reset(&mut self) -> Vec<SyncEvent> {
        if self.text.is_empty() && self.number.is_none() {
            return Vec::new();
        }

        self.text.clear();
        self.number = None;

        let events = vec![
            SyncEvent::TextFormatted {
                number: None,
                text: String::new(),
            },
            SyncEvent::NumberParsed {
                text: String::new(),
                number: None,
            },
        ];
        self.observer.on_events(&events);
        events
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<Decimal> {
        self.number
    }

    pub fn is_decimal_allowed(&self) -> bool {
        self.filter.allows_decimal_separator()
    }

    pub fn decimal_separator(&self) -> char {
        self.filter.decimal_separator()
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }
}

// ============================================================================
// Tests
// ============================================================================
