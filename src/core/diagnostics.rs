/*!

Non-fatal problems found while loading a definition are recorded as `Warning`s through a [`Diagnostics`] sink. The sink
is passed to each load operation that may produce one; nothing holds on to it.

*/

use std::fmt::{Display, Formatter};

use crate::{
  core::{
    definition::options::WarningPolicy,
    rule::SharedRule,
  },
  warning,
};

#[derive(Clone, Debug)]
pub struct Warning {
  pub message: String,
  /// The rule the warning is about, if any.
  pub rule   : Option<SharedRule>,
}

impl Warning {
  pub fn about_rule(message: impl Into<String>, rule: SharedRule) -> Self {
    Warning {
      message: message.into(),
      rule   : Some(rule),
    }
  }
}

impl Display for Warning {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.rule {
      Some(rule) => write!(f, "{}:\n\t{}", self.message, rule),
      None       => write!(f, "{}", self.message),
    }
  }
}

pub trait Diagnostics {
  fn record_warning(&mut self, warning: Warning);
}

/// Collects warnings in order, also logging them according to its `WarningPolicy`.
#[derive(Clone, Default, Debug)]
pub struct DiagnosticLog {
  policy  : WarningPolicy,
  warnings: Vec<Warning>,
}

impl DiagnosticLog {
  pub fn new(policy: WarningPolicy) -> Self {
    DiagnosticLog {
      policy,
      warnings: Vec::new(),
    }
  }

  pub fn warnings(&self) -> &[Warning] {
    &self.warnings
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.warnings.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.warnings.is_empty()
  }
}

impl Diagnostics for DiagnosticLog {
  fn record_warning(&mut self, recorded: Warning) {
    match self.policy {
      WarningPolicy::None   => {}
      WarningPolicy::Normal => warning!(1, "{}", recorded),
      WarningPolicy::All    => warning!(0, "{}", recorded),
    }
    self.warnings.push(recorded);
  }
}

impl Diagnostics for Vec<Warning> {
  fn record_warning(&mut self, warning: Warning) {
    self.push(warning);
  }
}
