/*!

A `RuleIndex` narrows the rules worth attempting on a term to a small candidate set, faster than scanning every
container. It is built once from the categorized containers, after loading, and is read-only afterward.

[`HeadSymbolIndex`] is a plain discrimination on the head symbol of the term. Rules whose left-hand side has no head
symbol (a variable, a token, a sequence) are candidates for every term.

*/

use crate::{
  abstractions::{HashMap, IString},
  core::{
    rule::SharedRule,
    rule_store::RuleContainers,
    term::Term,
  },
};

pub trait RuleIndex: Send + Sync {
  /// Builds the index over the rules of a fully loaded store.
  fn build(rules: &RuleContainers) -> Self where Self: Sized;

  /// The rules that might apply at the root of `term`, in the order they should be tried. The order is the same on
  /// every run.
  fn candidates(&self, term: &Term) -> Vec<SharedRule>;
}


#[derive(Clone, Default, Debug)]
pub struct HeadSymbolIndex {
  function_rules: HashMap<IString, Vec<SharedRule>>,
  anywhere_rules: HashMap<IString, Vec<SharedRule>>,
  /// Ordinary rules with their declaration positions, by head symbol.
  rules_by_head : HashMap<IString, Vec<(usize, SharedRule)>>,
  wildcard_rules: Vec<(usize, SharedRule)>,
}

impl RuleIndex for HeadSymbolIndex {
  fn build(rules: &RuleContainers) -> Self {
    let mut index = HeadSymbolIndex {
      function_rules: rules.function_rules().clone(),
      anywhere_rules: rules.anywhere_rules()
                           .iter()
                           .map(|(symbol, set)| (symbol.clone(), sorted_by_text(set.iter())))
                           .collect(),
      ..HeadSymbolIndex::default()
    };

    for (position, rule) in rules.rules().iter().enumerate() {
      match rule.lhs().head_symbol() {
        Some(symbol) => index.rules_by_head.entry(symbol.clone()).or_default().push((position, rule.clone())),
        None         => index.wildcard_rules.push((position, rule.clone())),
      }
    }

    index
  }

  /// Function rules in declaration order, then anywhere rules ordered by their text, then ordinary rules in
  /// declaration order.
  fn candidates(&self, term: &Term) -> Vec<SharedRule> {
    let mut candidates = Vec::new();

    let headed: &[(usize, SharedRule)] = match term.head_symbol() {
      Some(symbol) => {
        if let Some(rules) = self.function_rules.get(symbol) {
          candidates.extend(rules.iter().cloned());
        }
        if let Some(rules) = self.anywhere_rules.get(symbol) {
          candidates.extend(rules.iter().cloned());
        }
        self.rules_by_head.get(symbol).map(Vec::as_slice).unwrap_or(&[])
      }
      None => &[],
    };

    // Merge the two position-sorted lists to restore declaration order.
    let (mut i, mut j) = (0, 0);
    let wildcard       = &self.wildcard_rules;
    while i < headed.len() || j < wildcard.len() {
      let take_headed = j == wildcard.len() || (i < headed.len() && headed[i].0 < wildcard[j].0);
      if take_headed {
        candidates.push(headed[i].1.clone());
        i += 1;
      } else {
        candidates.push(wildcard[j].1.clone());
        j += 1;
      }
    }

    candidates
  }
}

/// Anywhere rules are stored unordered; this fixes an order that does not depend on hashing.
fn sorted_by_text<'a>(rules: impl Iterator<Item = &'a SharedRule>) -> Vec<SharedRule> {
  let mut rules: Vec<(String, SharedRule)> = rules.map(|rule| (rule.to_string(), rule.clone())).collect();
  rules.sort_by(|a, b| a.0.cmp(&b.0));
  rules.into_iter().map(|(_, rule)| rule).collect()
}
