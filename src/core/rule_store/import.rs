/*!

Import of rules from a module in another term representation. Only unconditional left-to-right rewrites are taken;
each side is converted by a [`TermConverter`] and the result goes through the same classification as any other rule,
so an imported rule cannot be told apart from a natively loaded one.

*/

use crate::{
  core::{
    diagnostics::Diagnostics,
    rule::Rule,
    rule_store::RuleStoreBuilder,
    term::Term,
  },
  debug,
};

/// A sentence of a module in some external representation `T`.
#[derive(Clone, Debug)]
pub enum ModuleSentence<T> {
  /// An unconditional rewrite `left => right`.
  Rewrite {
    left : T,
    right: T,
  },
  /// Anything else: syntax, imports, claims, and so on.
  Declaration,
}

/// Converts terms of an external representation into [`Term`]s. A converter is bound to the evaluation context it
/// was created for.
pub trait TermConverter {
  type Source;

  fn convert(&self, term: &Self::Source) -> Term;
}

impl RuleStoreBuilder {
  /// Converts and adds every rewrite among `sentences`, in order. Returns the number of rewrites converted.
  pub fn add_module_rules<'s, C, I>(&mut self, sentences: I, converter: &C, diagnostics: &mut dyn Diagnostics) -> usize
    where C: TermConverter,
          C::Source: 's,
          I: IntoIterator<Item = &'s ModuleSentence<C::Source>>
  {
    let mut imported = 0;

    for sentence in sentences {
      if let ModuleSentence::Rewrite { left, right } = sentence {
        let rule = Rule::unconditional(converter.convert(left), converter.convert(right));
        self.add_rule(rule, diagnostics);
        imported += 1;
      }
    }

    debug!(3, "imported {} rewrites from module", imported);
    imported
  }
}
