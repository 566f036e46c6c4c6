/*!

A minimal term representation: enough structure for rules to be classified and indexed. Matching and unification
belong to the rewriting engine and are not implemented here.

An `Application` is a constructor application `label(args…)`, the only shape that has a dispatch symbol. A `Sequence`
is a computation sequence `t1 ~> t2 ~> …`, which is not headed by any single symbol.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{join_string, IString},
  core::sort::Sort,
};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Term {
  Variable {
    name: IString,
    sort: Sort,
  },
  Application {
    label: IString,
    args : Vec<Term>,
  },
  Token {
    sort : Sort,
    value: IString,
  },
  Sequence(Vec<Term>),
}

impl Term {
  pub fn variable(name: &str, sort: Sort) -> Term {
    Term::Variable { name: IString::from(name), sort }
  }

  pub fn apply(label: &str, args: Vec<Term>) -> Term {
    Term::Application { label: IString::from(label), args }
  }

  pub fn constant(label: &str) -> Term {
    Term::apply(label, Vec::new())
  }

  pub fn token(sort: Sort, value: &str) -> Term {
    Term::Token { sort, value: IString::from(value) }
  }

  /// The dispatch symbol of a constructor application.
  #[inline(always)]
  pub fn head_symbol(&self) -> Option<&IString> {
    match self {
      Term::Application { label, .. } => Some(label),
      _ => None,
    }
  }

  #[inline(always)]
  pub fn is_application(&self) -> bool {
    matches!(self, Term::Application { .. })
  }

  #[inline(always)]
  pub fn is_variable(&self) -> bool {
    matches!(self, Term::Variable { .. })
  }

  /// The immediate subterms.
  pub fn args(&self) -> &[Term] {
    match self {
      Term::Application { args, .. } => args,
      Term::Sequence(items)          => items,
      _                              => &[],
    }
  }

  /// A term is ground if it contains no variables.
  pub fn is_ground(&self) -> bool {
    match self {
      Term::Variable { .. } => false,
      Term::Token { .. }    => true,
      _                     => self.args().iter().all(Term::is_ground),
    }
  }
}

impl Display for Term {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Term::Variable { name, sort } => write!(f, "{}:{}", name, sort),

      Term::Application { label, args } if args.is_empty() => write!(f, "{}", label),

      Term::Application { label, args } => write!(f, "{}({})", label, join_string(args.iter(), ", ")),

      Term::Token { sort, value } => write!(f, "#token(\"{}\", \"{}\")", value, sort),

      Term::Sequence(items) if items.is_empty() => write!(f, "."),

      Term::Sequence(items) => write!(f, "{}", join_string(items.iter(), " ~> ")),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn head_symbols_and_groundness() {
    let x    = Term::variable("X", Sort::new("Int"));
    let term = Term::apply("_+_", vec![x.clone(), Term::token(Sort::new("Int"), "1")]);

    assert_eq!(term.head_symbol().map(|s| &**s), Some("_+_"));
    assert_eq!(x.head_symbol(), None);
    assert!(!term.is_ground());
    assert!(Term::constant("nil").is_ground());
    assert_eq!(term.to_string(), "_+_(X:Int, #token(\"1\", \"Int\"))");
    assert_eq!(Term::Sequence(vec![Term::constant("a"), x]).to_string(), "a ~> X:Int");
  }
}
