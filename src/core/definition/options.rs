/*!

Run options carried by a definition. They are fixed when the definition data is constructed.

*/

use crate::log::set_global_logging_threshold;

/// Whether warnings recorded while loading are also written to the log.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum WarningPolicy {
  None,
  #[default]
  Normal,
  All,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GlobalOptions {
  /// The logging threshold. See [`crate::log`].
  pub verbosity: u8,
  pub warnings : WarningPolicy,
  pub debug    : bool,
}

impl Default for GlobalOptions {
  fn default() -> Self {
    GlobalOptions {
      verbosity: 3,
      warnings : WarningPolicy::default(),
      debug    : false,
    }
  }
}

impl GlobalOptions {
  /// Makes `verbosity` the global logging threshold.
  pub fn apply_logging(&self) {
    set_global_logging_threshold(self.verbosity);
  }
}

/// Options of the rewriting engine consuming the definition.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct RunOptions {
  /// Explore all successors rather than following one rewrite sequence.
  pub search          : bool,
  /// Maximum number of rewrite steps, unbounded if `None`.
  pub depth           : Option<usize>,
  pub pattern_matching: bool,
  /// Delegate I/O to an external helper process.
  pub io_server       : bool,
}


#[cfg(test)]
mod tests {
  use std::sync::PoisonError;

  use super::*;
  use crate::log::{get_global_logging_threshold, THRESHOLD_TEST_LOCK};

  #[test]
  fn verbosity_becomes_the_logging_threshold() {
    let _guard   = THRESHOLD_TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = get_global_logging_threshold();

    let options = GlobalOptions { verbosity: 6, ..GlobalOptions::default() };
    options.apply_logging();
    assert_eq!(get_global_logging_threshold(), 6);

    GlobalOptions::default().apply_logging();
    assert_eq!(get_global_logging_threshold(), 3);

    crate::log::set_global_logging_threshold(previous);
  }
}
