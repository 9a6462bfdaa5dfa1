// ============================================================================
// Numeric Text Library
// Numeric input filtering and text/number synchronization for text fields
// ============================================================================

//! # Numeric Text
//!
//! The logic behind a text field that only accepts numbers.
//!
//! ## Features
//!
//! - **Script-aware filtering**: keeps decimal digits of any script and at most
//!   one decimal separator, working on grapheme clusters
//! - **Locale-aware formatting** with a pluggable [`NumberFormatter`](interfaces::NumberFormatter)
//! - **Bidirectional synchronization** between a text buffer and an optional
//!   number, with loop-free echo handling
//!
//! The UI layer stays outside: it submits edits and applies the corrected
//! values it is handed back.
//!
//! ## Example
//!
//! ```rust
//! use numeric_text::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Filtering on its own
//! let locale = LocaleSettings::en_us();
//! assert_eq!(filter_numeric_text("12a.3b4", true, &locale), "12.34");
//!
//! // A field that only takes whole numbers
//! let mut field = TextNumberSyncBuilder::integer()
//!     .with_locale(locale)
//!     .with_observer(LoggingObserver)
//!     .build()
//!     .unwrap();
//!
//! field.submit_text_change("12a3");
//! assert_eq!(field.text(), "123");
//! assert_eq!(field.number(), Some(Decimal::from(123)));
//!
//! // The bound number is cleared from outside
//! field.submit_number_change(None).unwrap();
//! assert_eq!(field.text(), "");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FieldConfig, LocaleSettings};
    pub use crate::engine::{
        create_from_config, filter_numeric_text, DecimalFormatter, NumericFilter, TextNumberSync,
        TextNumberSyncBuilder,
    };
    pub use crate::interfaces::{
        CallbackObserver, LoggingObserver, NoOpObserver, NumberFormatter, SyncEvent, SyncObserver,
    };
    pub use crate::numeric::{FormatterError, FormatterResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A host that, like a reactive UI, feeds every pushed value straight back
    /// into the synchronizer.
    #[test]
    fn test_echoing_host_settles() {
        let pending_text: Rc<RefCell<Vec<String>>> = Rc::default();
        let pending_number: Rc<RefCell<Vec<Option<Decimal>>>> = Rc::default();
        let text_sink = Rc::clone(&pending_text);
        let number_sink = Rc::clone(&pending_number);

        let mut field = TextNumberSyncBuilder::decimal()
            .with_locale(LocaleSettings::en_us())
            .with_observer(CallbackObserver::new(
                move |text: &str| text_sink.borrow_mut().push(text.to_string()),
                move |number| number_sink.borrow_mut().push(number),
            ))
            .build()
            .unwrap();

        field.submit_text_change("4x2.5.0");

        // Drain the echoes; every one must be a no-op
        let mut rounds = 0;
        loop {
            let texts: Vec<String> = pending_text.borrow_mut().drain(..).collect();
            let numbers: Vec<Option<Decimal>> = pending_number.borrow_mut().drain(..).collect();
            if texts.is_empty() && numbers.is_empty() {
                break;
            }
            for text in texts {
                assert!(field.submit_text_change(&text).is_empty());
            }
            for number in numbers {
                assert!(field.submit_number_change(number).unwrap().is_empty());
            }
            rounds += 1;
            assert!(rounds < 3, "host and field did not settle");
        }

        assert_eq!(field.text(), "42.50");
        assert_eq!(field.number(), Some(Decimal::new(425, 1)));
    }

    #[test]
    fn test_typing_sequence() {
        let mut field = TextNumberSyncBuilder::decimal()
            .with_locale(LocaleSettings::de_de())
            .build()
            .unwrap();

        let typed = ["1", "12", "12,", "12,5", "12,5,", "12,5a"];
        let expected_text = ["1", "12", "12,", "12,5", "12,5", "12,5"];
        let expected_number = [
            Some(Decimal::from(1)),
            Some(Decimal::from(12)),
            Some(Decimal::from(12)),
            Some(Decimal::new(125, 1)),
            Some(Decimal::new(125, 1)),
            Some(Decimal::new(125, 1)),
        ];

        for ((input, text), number) in typed.iter().zip(expected_text).zip(expected_number) {
            field.submit_text_change(input);
            assert_eq!(field.text(), text, "after typing {:?}", input);
            assert_eq!(field.number(), number, "after typing {:?}", input);
        }
    }

    #[test]
    fn test_devanagari_round_trip() {
        let mut field = TextNumberSyncBuilder::integer()
            .with_locale(LocaleSettings::en_us())
            .build()
            .unwrap();

        field.submit_text_change("५");
        assert_eq!(field.text(), "५");
        assert_eq!(field.number(), Some(Decimal::from(5)));

        field.submit_number_change(Some(Decimal::from(6))).unwrap();
        assert_eq!(field.text(), "6");
    }

    #[test]
    fn test_external_value_then_edit() {
        let mut field = TextNumberSyncBuilder::decimal()
            .with_locale(LocaleSettings::en_us())
            .build()
            .unwrap();

        field
            .submit_number_change(Some(Decimal::new(1999, 2)))
            .unwrap();
        assert_eq!(field.text(), "19.99");

        field.submit_text_change("19.9");
        assert_eq!(field.number(), Some(Decimal::new(199, 1)));

        field.submit_number_change(None).unwrap();
        assert_eq!(field.text(), "");
        assert_eq!(field.number(), None);
    }
}
