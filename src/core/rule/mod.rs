/*!

A `Rule` is a side condition, a left-hand pattern, a right-hand replacement, and its attribute set. The properties
that classification needs (the symbol a rule defines, whether it is a sort predicate and on which symbol, its
[category](crate::core::rule::category::RuleCategory)) are derived once, in `Rule::new`, and never change afterward.

Rules are shared between containers (a sort predicate rule lives in two) and between threads during execution, so the
containers hold `SharedRule`s.

*/

pub mod category;
pub mod condition;

use std::{
  fmt::{Display, Formatter},
  sync::Arc,
};

use crate::{
  abstractions::{join_string, IString},
  core::{
    attribute::{Attributes, RuleAttribute},
    term::Term,
  },
};

pub use category::{RuleCategory, RuleError};
pub use condition::{Condition, Conditions};

pub type SharedRule = Arc<Rule>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rule {
  name      : Option<IString>,
  conditions: Conditions,
  lhs_term  : Term,
  rhs_term  : Term,
  attributes: Attributes,
  category  : RuleCategory,
}

impl Rule {
  pub fn new(lhs_term: Term, rhs_term: Term, conditions: Conditions, attributes: Attributes) -> Result<Rule, RuleError> {
    let category = RuleCategory::classify(&lhs_term, &attributes)?;
    Ok(Rule {
      name: None,
      conditions,
      lhs_term,
      rhs_term,
      attributes,
      category,
    })
  }

  /// An unconditional rewrite with no attributes. Such a rule is always an ordinary rule.
  pub fn unconditional(lhs_term: Term, rhs_term: Term) -> Rule {
    Rule {
      name      : None,
      conditions: Conditions::new(),
      lhs_term,
      rhs_term,
      attributes: Attributes::new(),
      category  : RuleCategory::Ordinary,
    }
  }

  pub fn with_name(mut self, name: &str) -> Rule {
    self.name = Some(IString::from(name));
    self
  }

  // region Accessors

  #[inline(always)]
  pub fn name(&self) -> Option<&IString> {
    self.name.as_ref()
  }

  #[inline(always)]
  pub fn lhs(&self) -> &Term {
    &self.lhs_term
  }

  #[inline(always)]
  pub fn rhs(&self) -> &Term {
    &self.rhs_term
  }

  #[inline(always)]
  pub fn conditions(&self) -> &[Condition] {
    &self.conditions
  }

  #[inline(always)]
  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  #[inline(always)]
  pub fn contains_attribute(&self, attribute: RuleAttribute) -> bool {
    self.attributes.contains(attribute)
  }

  #[inline(always)]
  pub fn category(&self) -> &RuleCategory {
    &self.category
  }

  /// The head symbol of the left-hand side.
  #[inline(always)]
  pub fn defined_symbol(&self) -> Option<&IString> {
    self.lhs_term.head_symbol()
  }

  pub fn is_function(&self) -> bool {
    matches!(self.category, RuleCategory::Function { .. } | RuleCategory::SortPredicateFunction { .. })
  }

  pub fn is_sort_predicate(&self) -> bool {
    matches!(self.category, RuleCategory::SortPredicateFunction { .. })
  }

  /// For a sort predicate rule, the symbol of the argument whose sort it tests.
  pub fn sort_predicate_symbol(&self) -> Option<&IString> {
    match &self.category {
      RuleCategory::SortPredicateFunction { predicate_symbol, .. } => Some(predicate_symbol),
      _ => None,
    }
  }

  /// The symbol an anywhere rule is keyed by. `None` for other rules.
  pub fn anywhere_symbol(&self) -> Option<&IString> {
    match &self.category {
      RuleCategory::Anywhere { symbol } => symbol.as_ref(),
      _ => None,
    }
  }

  #[inline(always)]
  pub fn is_constructor_headed(&self) -> bool {
    self.lhs_term.is_application()
  }

  #[inline(always)]
  pub fn is_unconditional(&self) -> bool {
    self.conditions.is_empty()
  }

  // endregion
}

impl Display for Rule {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "rule ")?;
    if let Some(name) = &self.name {
      write!(f, "[{}]: ", name)?;
    }
    write!(f, "{} => {}", self.lhs_term, self.rhs_term)?;

    if !self.conditions.is_empty() {
      write!(f, " requires {}", join_string(self.conditions.iter(), " ∧ "))?;
    }

    if !self.attributes.is_empty() {
      write!(f, " {}", self.attributes)?;
    }

    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::Sort;

  #[test]
  fn derived_properties() {
    let int = Sort::new("Int");
    let rule = Rule::new(
      Term::apply("isInt", vec![Term::apply("succ", vec![Term::variable("N", int.clone())])]),
      Term::token(Sort::new("Bool"), "true"),
      vec![Condition::SortMembership { term: Term::variable("N", int.clone()), sort: int }],
      Attributes::from_keys(["function", "predicate"]),
    ).unwrap().with_name("succ-is-int");

    assert!(rule.is_function());
    assert!(rule.is_sort_predicate());
    assert!(!rule.is_unconditional());
    assert_eq!(rule.defined_symbol().map(|s| &**s), Some("isInt"));
    assert_eq!(rule.sort_predicate_symbol().map(|s| &**s), Some("succ"));
    assert_eq!(rule.anywhere_symbol(), None);
    assert_eq!(
      rule.to_string(),
      "rule [succ-is-int]: isInt(succ(N:Int)) => #token(\"true\", \"Bool\") requires N:Int :: Int [function, predicate]"
    );
  }

  #[test]
  fn unconditional_rules_are_ordinary() {
    let rule = Rule::unconditional(Term::constant("a"), Term::constant("b"));
    assert_eq!(rule.category(), &RuleCategory::Ordinary);
    assert!(rule.is_constructor_headed());
    assert_eq!(rule.to_string(), "rule a => b");
  }
}
