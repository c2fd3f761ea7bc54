// Logging setup for the irms binary

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global fmt subscriber. Later calls are ignored.
pub fn init_tracing(level: tracing::Level) {
    INIT.call_once(|| {
        let result = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
        if let Err(e) = result {
            eprintln!("Failed to install tracing subscriber: {e}");
        }
    });
}
