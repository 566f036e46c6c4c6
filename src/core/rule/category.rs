/*!

Every rule falls into exactly one `RuleCategory`, decided once when the rule is constructed. The attribute flags are
tested in a fixed priority order and the first one present wins:

| Priority | Attribute          | Category                                     |
|:---------|:-------------------|:---------------------------------------------|
| 1        | function           | `Function` or `SortPredicateFunction`        |
| 2        | pattern            | `Pattern`                                    |
| 3        | pattern-folding    | `PatternFolding`                             |
| 4        | macro              | `Macro`                                      |
| 5        | anywhere           | `Anywhere`                                   |
| 6        | none of the above  | `Ordinary`                                   |

A function rule that also carries the predicate attribute is a `SortPredicateFunction`; its argument must be a
constructor application. It is stored both with the function rules of its own symbol and with the predicate rules of
its argument's symbol.

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
};

use crate::{
  abstractions::IString,
  core::{
    attribute::{Attributes, RuleAttribute},
    term::Term,
  },
};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuleCategory {
  Function {
    symbol: IString,
  },
  SortPredicateFunction {
    symbol          : IString,
    predicate_symbol: IString,
  },
  Pattern {
    symbol: IString,
  },
  PatternFolding,
  Macro,
  /// The symbol is absent when the left-hand side is not a constructor application, which makes the rule unusable.
  Anywhere {
    symbol: Option<IString>,
  },
  Ordinary,
}

impl RuleCategory {
  pub fn classify(lhs_term: &Term, attributes: &Attributes) -> Result<RuleCategory, RuleError> {
    if !attributes.flags().intersects(RuleAttribute::Classifying) {
      return Ok(RuleCategory::Ordinary);
    }

    if attributes.contains(RuleAttribute::Function) {
      let symbol = defined_symbol(lhs_term, RuleAttribute::Function)?;
      if attributes.contains(RuleAttribute::SortPredicate) {
        let predicate_symbol = lhs_term.args()
                                       .first()
                                       .and_then(Term::head_symbol)
                                       .cloned()
                                       .ok_or_else(|| RuleError::MissingPredicateArgument { lhs: lhs_term.to_string() })?;
        return Ok(RuleCategory::SortPredicateFunction { symbol, predicate_symbol });
      }
      Ok(RuleCategory::Function { symbol })
    } else if attributes.contains(RuleAttribute::Pattern) {
      Ok(RuleCategory::Pattern { symbol: defined_symbol(lhs_term, RuleAttribute::Pattern)? })
    } else if attributes.contains(RuleAttribute::PatternFolding) {
      Ok(RuleCategory::PatternFolding)
    } else if attributes.contains(RuleAttribute::Macro) {
      Ok(RuleCategory::Macro)
    } else if attributes.contains(RuleAttribute::Anywhere) {
      Ok(RuleCategory::Anywhere { symbol: lhs_term.head_symbol().cloned() })
    } else {
      Ok(RuleCategory::Ordinary)
    }
  }

  /// The symbol the rule is keyed by in its primary container, if the container is keyed.
  pub fn symbol(&self) -> Option<&IString> {
    match self {
      RuleCategory::Function { symbol }
      | RuleCategory::SortPredicateFunction { symbol, .. }
      | RuleCategory::Pattern { symbol } => Some(symbol),
      RuleCategory::Anywhere { symbol }  => symbol.as_ref(),
      RuleCategory::PatternFolding
      | RuleCategory::Macro
      | RuleCategory::Ordinary           => None,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      RuleCategory::Function { .. }              => "function",
      RuleCategory::SortPredicateFunction { .. } => "sort predicate function",
      RuleCategory::Pattern { .. }               => "pattern",
      RuleCategory::PatternFolding               => "pattern folding",
      RuleCategory::Macro                        => "macro",
      RuleCategory::Anywhere { .. }              => "anywhere",
      RuleCategory::Ordinary                     => "ordinary",
    }
  }
}

impl Display for RuleCategory {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.symbol() {
      Some(symbol) => write!(f, "{} rule on {}", self.name(), symbol),
      None         => write!(f, "{} rule", self.name()),
    }
  }
}

fn defined_symbol(lhs_term: &Term, attribute: RuleAttribute) -> Result<IString, RuleError> {
  lhs_term.head_symbol()
          .cloned()
          .ok_or_else(|| RuleError::MissingDefinedSymbol { attribute, lhs: lhs_term.to_string() })
}


#[derive(Clone, Eq, PartialEq)]
pub enum RuleError {
  /// A function or pattern rule must define a symbol, so its left-hand side must be a constructor application.
  MissingDefinedSymbol {
    attribute: RuleAttribute,
    lhs      : String,
  },
  /// The argument of a sort predicate rule must be a constructor application, whose symbol keys the rule.
  MissingPredicateArgument {
    lhs: String,
  },
}

impl Display for RuleError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      RuleError::MissingDefinedSymbol { attribute, lhs } => {
        write!(
          f,
          "a [{}] rule must rewrite a constructor application, but its left-hand side is {}",
          attribute,
          lhs
        )
      }
      RuleError::MissingPredicateArgument { lhs } => {
        write!(f, "a sort predicate rule must test a constructor application, but its left-hand side is {}", lhs)
      }
    }
  }
}

impl Debug for RuleError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for RuleError {}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::Sort;

  fn attributes(keys: &[&str]) -> Attributes {
    Attributes::from_keys(keys.iter().copied())
  }

  #[test]
  fn priority_order_decides_category() {
    let lhs = Term::apply("foo", vec![Term::variable("X", Sort::new("Int"))]);

    let cases: &[(&[&str], RuleCategory)] = &[
      (&["function", "macro"],          RuleCategory::Function { symbol: IString::from("foo") }),
      (&["pattern", "macro"],           RuleCategory::Pattern { symbol: IString::from("foo") }),
      (&["pattern-folding", "anywhere"], RuleCategory::PatternFolding),
      (&["macro", "anywhere"],          RuleCategory::Macro),
      (&["anywhere"],                   RuleCategory::Anywhere { symbol: Some(IString::from("foo")) }),
      (&["structural"],                 RuleCategory::Ordinary),
      (&["predicate"],                  RuleCategory::Ordinary),
      (&[],                             RuleCategory::Ordinary),
    ];
    for (keys, expected) in cases {
      assert_eq!(&RuleCategory::classify(&lhs, &attributes(keys)).unwrap(), expected, "keys {:?}", keys);
    }
  }

  #[test]
  fn sort_predicate_needs_a_constructor_argument() {
    let keys = attributes(&["function", "predicate"]);

    let on_constructor = Term::apply("isExp", vec![Term::apply("bar", vec![])]);
    assert_eq!(
      RuleCategory::classify(&on_constructor, &keys).unwrap(),
      RuleCategory::SortPredicateFunction {
        symbol          : IString::from("isExp"),
        predicate_symbol: IString::from("bar"),
      }
    );

    let on_variable = Term::apply("isExp", vec![Term::variable("E", Sort::new("Exp"))]);
    assert!(matches!(
      RuleCategory::classify(&on_variable, &keys),
      Err(RuleError::MissingPredicateArgument { .. })
    ));
    assert!(matches!(
      RuleCategory::classify(&Term::constant("isExp"), &keys),
      Err(RuleError::MissingPredicateArgument { .. })
    ));
  }

  #[test]
  fn function_rule_on_a_variable_is_rejected() {
    let lhs    = Term::variable("X", Sort::new("K"));
    let result = RuleCategory::classify(&lhs, &attributes(&["function"]));
    assert!(matches!(result, Err(RuleError::MissingDefinedSymbol { attribute: RuleAttribute::Function, .. })));

    // An anywhere rule is accepted here and rejected when it is added to a store.
    let result = RuleCategory::classify(&lhs, &attributes(&["anywhere"]));
    assert_eq!(result.unwrap(), RuleCategory::Anywhere { symbol: None });
  }
}
