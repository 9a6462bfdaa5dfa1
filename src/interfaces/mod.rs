// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod number_formatter;
mod sync_observer;

pub use number_formatter::NumberFormatter;
pub use sync_observer::{CallbackObserver, LoggingObserver, NoOpObserver, SyncEvent, SyncObserver};
