// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_text::prelude::*;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Numeric Text Example ===\n");

    // Filtering on its own
    let locale = LocaleSettings::current();
    println!(
        "Process locale decimal separator: {:?}\n",
        locale.decimal_separator
    );

    let en = LocaleSettings::en_us();
    for input in ["12.3.4", "12a.3b4", "a.1234.", "५"] {
        println!(
            "filter({:?}) = {:?}",
            input,
            filter_numeric_text(input, true, &en)
        );
    }
    println!();

    // A field whose host just displays whatever it is told
    let display = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&display);

    let mut field = TextNumberSyncBuilder::decimal()
        .with_locale(LocaleSettings::de_de())
        .with_initial(Decimal::new(125, 1))
        .with_observer(CallbackObserver::new(
            move |text: &str| *sink.borrow_mut() = text.to_string(),
            |number| println!("  -> number is now {:?}", number),
        ))
        .build()
        .expect("valid configuration");

    println!("Initial text: {:?}", field.text());

    for typed in ["12,5x", "12,5,7", "abc", ","] {
        println!("User typed {:?}", typed);
        field.submit_text_change(typed);
        println!("  -> text shows {:?}", field.text());
    }

    println!("\nHost sets the number to 1234,5678");
    field
        .submit_number_change(Some(Decimal::new(12345678, 4)))
        .expect("default formatter never fails");
    println!("  -> display shows {:?}", display.borrow());

    println!("\nHost clears the number");
    field
        .submit_number_change(None)
        .expect("default formatter never fails");
    println!("  -> display shows {:?}", display.borrow());

    println!("\n=== Example Complete ===");
}
