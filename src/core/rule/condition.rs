/*!

Rules can have a side condition that must hold for the rule to apply. A condition is a conjunction of the atoms
below; an unconditional rule has none.

*/

use std::fmt::Display;

use crate::core::{
  sort::Sort,
  term::Term,
};

pub type Conditions = Vec<Condition>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Condition {
  /// Equality conditions, `x = y`.
  ///
  /// Boolean side conditions are shortcut versions of equality conditions of the form `expr = true`.
  Equality {
    lhs_term: Term,
    rhs_term: Term
  },

  /// Also called a sort test condition, `X :: Y`
  SortMembership {
    term: Term,
    sort: Sort
  },

  /// Also called an assignment condition, `pattern := term`
  Match {
    pattern: Term,
    term   : Term
  },
}

impl Display for Condition {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {

      Condition::Equality { lhs_term, rhs_term } => {
        write!(f, "{} = {}", lhs_term, rhs_term)
      }

      Condition::SortMembership { term, sort } => {
        write!(f, "{} :: {}", term, sort)
      }

      Condition::Match { pattern, term } => {
        write!(f, "{} := {}", pattern, term)
      }

    }
  }
}
