/*!

# Overview

The `log` module provides logging with a numeric verbosity threshold layered over the `tracing` crate. The log level
describes what _kind_ of message is logged, and the numeric threshold describes how _verbose_ the logger must be for
the message to be emitted.

```
use rulestore::log::*;

// Anything logged above threshold 1 is suppressed.
set_global_logging_threshold(1);

warning!(2, "dropped rule {}", "r1");  // Not emitted
info!(1, "loaded {} rules", 42);       // Emitted
trace!(0, "finalized");                // Emitted
```

## Threshold

The global logging threshold is shared by all levels. A message logged at threshold `t` is emitted only when
`t <= get_global_logging_threshold()`. A message with threshold 0 is always emitted. Loading a definition logs
per-rule placements at a high threshold and per-definition summaries at a low one, so the default threshold of 3 shows
summaries and warnings without drowning in detail.

## Levels

Available levels are:  Critical, Error, Warning, Info, Debug, Trace.

```ignore
// With threshold
level!(threshold, "format string", args...);

// Without threshold (threshold 0, always emitted). Only for format strings without arguments.
level!("format string");
```

The logger is initialized on first use; no explicit initialization is required. The global threshold is an atomic, so
it may be changed from any thread.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
  atomic::{AtomicU8, Ordering},
  LazyLock
};

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

// The macros refer to `tracing` through this path so that downstream crates need not depend on it.
#[doc(hidden)]
pub use tracing;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  // A host application may already have installed its own subscriber, in which case we log through theirs.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3); // Default threshold

/// Sets the global threshold.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


/// Serializes tests that change the global threshold.
#[cfg(test)]
pub(crate) static THRESHOLD_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_round_trips_and_macros_expand() {
    let _guard   = THRESHOLD_TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous = get_global_logging_threshold();

    set_global_logging_threshold(4);
    assert_eq!(get_global_logging_threshold(), 4);

    info!(2, "loaded {} rules", 7);
    debug!(5, "NOT logged: {:?}", "placement");
    warning!("A definition without rules.");
    critical!(1, "structural defect in {}", "foo");

    set_global_logging_threshold(previous);
  }
}
