use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
};

#[derive(Copy, Clone, Eq, PartialEq)]
pub enum RuleStoreError {
  /// The rule index was queried but none was ever attached.
  IndexNotBuilt,
  /// A second rule index was selected for a store that already has one.
  IndexAlreadyAttached,
}

impl Display for RuleStoreError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      RuleStoreError::IndexNotBuilt        => write!(f, "the rule index has not been built"),
      RuleStoreError::IndexAlreadyAttached => write!(f, "a rule index is already selected for this rule store"),
    }
  }
}

impl Debug for RuleStoreError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for RuleStoreError {}
