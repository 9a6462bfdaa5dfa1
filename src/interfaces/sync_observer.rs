// ============================================================================
// Sync Observer Interface
// Defines the contract for pushing corrected values back to the host UI
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the text/number synchronizer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SyncEvent {
    /// Typed text contained characters that were filtered out
    TextCorrected { from: String, to: String },

    /// Canonical text was parsed (`None` when it is not a number yet)
    NumberParsed {
        text: String,
        number: Option<Decimal>,
    },

    /// An external number was rendered into the text buffer
    TextFormatted {
        number: Option<Decimal>,
        text: String,
    },
}

impl SyncEvent {
    /// Text the host should display after this event, if it changed
    pub fn text(&self) -> Option<&str> {
        match self {
            SyncEvent::TextCorrected { to, .. } => Some(to),
            SyncEvent::TextFormatted { text, .. } => Some(text),
            SyncEvent::NumberParsed { .. } => None,
        }
    }

    /// Number the host should store after this event, if it changed
    pub fn number(&self) -> Option<Option<Decimal>> {
        match self {
            SyncEvent::NumberParsed { number, .. } => Some(*number),
            _ => None,
        }
    }
}

/// Observer trait for the host UI layer.
///
/// Called after the synchronizer has committed its own state, so the values
/// passed in are final for the current step.
pub trait SyncObserver {
    /// The text buffer must show `text`
    fn on_text_change(&mut self, _text: &str) {}

    /// The bound number is now `number`
    fn on_number_change(&mut self, _number: Option<Decimal>) {}

    /// Handle a single event. The default dispatches to the two hooks above.
    fn on_event(&mut self, event: &SyncEvent) {
        if let Some(text) = event.text() {
            self.on_text_change(text);
        }
        if let Some(number) = event.number() {
            self.on_number_change(number);
        }
    }

    /// Batch event handler
    fn on_events(&mut self, events: &[SyncEvent]) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer, for hosts that read state back from the synchronizer
pub struct NoOpObserver;

impl SyncObserver for NoOpObserver {}

/// Logging observer
pub struct LoggingObserver;

impl SyncObserver for LoggingObserver {
    fn on_event(&mut self, event: &SyncEvent) {
        tracing::debug!("Numeric field event: {:?}", event);
    }
}

/// Adapts a pair of closures into an observer.
///
/// # Example
/// ```
/// use numeric_text::interfaces::{CallbackObserver, SyncEvent, SyncObserver};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let shown = Rc::new(RefCell::new(String::new()));
/// let sink = Rc::clone(&shown);
/// let mut observer = CallbackObserver::new(
///     move |text: &str| *sink.borrow_mut() = text.to_string(),
///     |_number| {},
/// );
///
/// observer.on_event(&SyncEvent::TextCorrected {
///     from: "1a".to_string(),
///     to: "1".to_string(),
/// });
/// assert_eq!(shown.borrow().as_str(), "1");
/// ```
pub struct CallbackObserver<T, N>
where
    T: FnMut(&str),
    N: FnMut(Option<Decimal>),
{
    on_text: T,
    on_number: N,
}

impl<T, N> CallbackObserver<T, N>
where
    T: FnMut(&str),
    N: FnMut(Option<Decimal>),
{
    pub fn new(on_text: T, on_number: N) -> Self {
        Self { on_text, on_number }
    }
}

impl<T, N> SyncObserver for CallbackObserver<T, N>
where
    T: FnMut(&str),
    N: FnMut(Option<Decimal>),
{
    fn on_text_change(&mut self, text: &str) {
        (self.on_text)(text);
    }

    fn on_number_change(&mut self, number: Option<Decimal>) {
        (self.on_number)(number);
    }
}
