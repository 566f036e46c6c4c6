/*!

The categorized rule containers. Their ordering and uniqueness contracts:

| Container               | Keyed by                      | Ordering                                  |
|:------------------------|:------------------------------|:------------------------------------------|
| `function_rules`        | defined symbol                | declaration order within a symbol         |
| `sort_predicate_rules`  | symbol of predicate argument  | unordered, equal rules coalesce           |
| `pattern_rules`         | defined symbol                | declaration order within a symbol         |
| `pattern_folding_rules` | (flat)                        | declaration order                         |
| `macros`                | (flat)                        | declaration order                         |
| `anywhere_rules`        | symbol of left-hand side      | unordered, equal rules coalesce           |
| `rules`                 | (flat)                        | declaration order                         |

Function rules sharing a symbol are tried by the rewriting engine in declaration order: the first declared equation
whose left-hand side matches wins.

The containers are only written through [`RuleStoreBuilder`](crate::core::rule_store::RuleStoreBuilder); every
accessor here hands out shared references.

*/

use std::fmt::{Debug, Formatter};

use crate::{
  abstractions::{join_iter, HashMap, HashSet, IString},
  core::rule::SharedRule,
};

const DISPLAY_INDENT: usize = 2;

#[derive(Clone, Default)]
pub struct RuleContainers {
  pub(crate) function_rules       : HashMap<IString, Vec<SharedRule>>,
  pub(crate) sort_predicate_rules : HashMap<IString, HashSet<SharedRule>>,
  pub(crate) pattern_rules        : HashMap<IString, Vec<SharedRule>>,
  pub(crate) pattern_folding_rules: Vec<SharedRule>,
  pub(crate) macros               : Vec<SharedRule>,
  pub(crate) anywhere_rules       : HashMap<IString, HashSet<SharedRule>>,
  pub(crate) rules                : Vec<SharedRule>,
}

impl RuleContainers {
  // region Accessors

  pub fn function_rules(&self) -> &HashMap<IString, Vec<SharedRule>> {
    &self.function_rules
  }

  /// The function rules defining `symbol`, in declaration order.
  pub fn function_rules_on(&self, symbol: &IString) -> &[SharedRule] {
    self.function_rules.get(symbol).map(Vec::as_slice).unwrap_or(&[])
  }

  /// The sort predicate rules testing for `symbol`. Empty if there are none.
  pub fn sort_predicate_rules_on(&self, symbol: &IString) -> impl Iterator<Item = &SharedRule> + '_ {
    self.sort_predicate_rules.get(symbol).into_iter().flatten()
  }

  pub fn pattern_rules(&self) -> &HashMap<IString, Vec<SharedRule>> {
    &self.pattern_rules
  }

  pub fn pattern_rules_on(&self, symbol: &IString) -> &[SharedRule] {
    self.pattern_rules.get(symbol).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn pattern_folding_rules(&self) -> &[SharedRule] {
    &self.pattern_folding_rules
  }

  pub fn macros(&self) -> &[SharedRule] {
    &self.macros
  }

  pub fn anywhere_rules(&self) -> &HashMap<IString, HashSet<SharedRule>> {
    &self.anywhere_rules
  }

  pub fn anywhere_rules_on(&self, symbol: &IString) -> impl Iterator<Item = &SharedRule> + '_ {
    self.anywhere_rules.get(symbol).into_iter().flatten()
  }

  /// The ordinary rules, in declaration order.
  pub fn rules(&self) -> &[SharedRule] {
    &self.rules
  }

  // endregion

  /// The number of placements across all containers. A sort predicate rule counts twice.
  pub fn len(&self) -> usize {
    let keyed = |map: &HashMap<IString, Vec<SharedRule>>| map.values().map(Vec::len).sum::<usize>();
    let sets  = |map: &HashMap<IString, HashSet<SharedRule>>| map.values().map(HashSet::len).sum::<usize>();

    keyed(&self.function_rules)
        + sets(&self.sort_predicate_rules)
        + keyed(&self.pattern_rules)
        + self.pattern_folding_rules.len()
        + self.macros.len()
        + sets(&self.anywhere_rules)
        + self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Formats the containers with `prefix` for each line, skipping empty categories.
  pub(crate) fn debug_fmt(&self, f: &mut Formatter<'_>, prefix: &str) -> std::fmt::Result {
    let inner_prefix = format!("{}{}", prefix, " ".repeat(DISPLAY_INDENT));

    format_keyed(f, &inner_prefix, "function rules", self.function_rules.iter().map(|(k, v)| (k, v.iter())))?;
    format_keyed(f, &inner_prefix, "sort predicate rules", self.sort_predicate_rules.iter().map(|(k, v)| (k, v.iter())))?;
    format_keyed(f, &inner_prefix, "pattern rules", self.pattern_rules.iter().map(|(k, v)| (k, v.iter())))?;
    format_named_list(f, &inner_prefix, "pattern folding rules", self.pattern_folding_rules.iter())?;
    format_named_list(f, &inner_prefix, "macros", self.macros.iter())?;
    format_keyed(f, &inner_prefix, "anywhere rules", self.anywhere_rules.iter().map(|(k, v)| (k, v.iter())))?;
    format_named_list(f, &inner_prefix, "rules", self.rules.iter())
  }
}

impl Debug for RuleContainers {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "RuleContainers {{")?;
    self.debug_fmt(f, "")?;
    writeln!(f, "}}")
  }
}


/// Helper function to format a named list of rules:
/// ```txt
/// macros: [
///   rule1
///   rule2
/// ]
/// ```
fn format_named_list<'a>(
  f     : &mut Formatter<'_>,
  prefix: &str,
  name  : &str,
  mut list: impl ExactSizeIterator<Item = &'a SharedRule>
) -> std::fmt::Result
{
  if list.len() == 0 {
    return Ok(());
  }
  let tab = " ".repeat(DISPLAY_INDENT);
  writeln!(f, "{}{}: [", prefix, name)?;
  list.try_for_each(|rule| writeln!(f, "{}{}{}", prefix, tab, rule))?;
  writeln!(f, "{}]", prefix)
}

/// Like `format_named_list`, but with the rules grouped under their symbols.
fn format_keyed<'a, R>(
  f     : &mut Formatter<'_>,
  prefix: &str,
  name  : &str,
  map   : impl ExactSizeIterator<Item = (&'a IString, R)>
) -> std::fmt::Result
  where R: Iterator<Item = &'a SharedRule>
{
  if map.len() == 0 {
    return Ok(());
  }
  let tab = " ".repeat(DISPLAY_INDENT);
  writeln!(f, "{}{}: [", prefix, name)?;
  for (symbol, rules) in map {
    let rules = join_iter(rules.map(|rule| rule.to_string()), |_| format!("\n{}{}{}", prefix, tab, tab));
    writeln!(f, "{}{}{}:\n{}{}{}{}", prefix, tab, symbol, prefix, tab, tab, rules.collect::<String>())?;
  }
  writeln!(f, "{}]", prefix)
}
