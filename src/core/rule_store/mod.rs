/*!

The `RuleStore` is the central aggregate of a loaded definition: it owns the categorized rule containers, the set of
dispatch symbols observed while loading, a shared [`DefinitionData`] bundle, the sort memo cache, and the attached
[`RuleIndex`].

## Lifecycle

A store is assembled by a [`RuleStoreBuilder`] during the single-threaded load phase and finalized into a `RuleStore`.
From then on its containers, data, and index are read-only and the store may be shared by any number of rewriting
workers. The sort cache is the only state that still changes; see [`SortMemoCache`] for its concurrency policy.

*/

mod builder;
mod containers;
mod error;
pub mod import;

use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use crate::{
  abstractions::{HashSet, IString},
  core::{
    definition::DefinitionData,
    rule::SharedRule,
    rule_index::RuleIndex,
    sort_cache::{EvaluationSlot, ResolvedSort, SortMemoCache},
    term::Term,
  },
};

pub use builder::RuleStoreBuilder;
pub use containers::RuleContainers;
pub use error::RuleStoreError;

pub struct RuleStore {
  data            : Arc<DefinitionData>,
  containers      : RuleContainers,
  dispatch_symbols: HashSet<IString>,
  index           : Option<Box<dyn RuleIndex>>,
  sort_cache      : SortMemoCache,
}

impl RuleStore {
  /// The sort, signature, and attribute data this store was built over.
  #[inline(always)]
  pub fn data(&self) -> &Arc<DefinitionData> {
    &self.data
  }

  #[inline(always)]
  pub fn containers(&self) -> &RuleContainers {
    &self.containers
  }

  // region Rule accessors

  pub fn function_rules_on(&self, symbol: &IString) -> &[SharedRule] {
    self.containers.function_rules_on(symbol)
  }

  pub fn sort_predicate_rules_on(&self, symbol: &IString) -> impl Iterator<Item = &SharedRule> + '_ {
    self.containers.sort_predicate_rules_on(symbol)
  }

  pub fn anywhere_rules_on(&self, symbol: &IString) -> impl Iterator<Item = &SharedRule> + '_ {
    self.containers.anywhere_rules_on(symbol)
  }

  pub fn pattern_rules_on(&self, symbol: &IString) -> &[SharedRule] {
    self.containers.pattern_rules_on(symbol)
  }

  pub fn pattern_folding_rules(&self) -> &[SharedRule] {
    self.containers.pattern_folding_rules()
  }

  pub fn macros(&self) -> &[SharedRule] {
    self.containers.macros()
  }

  /// The ordinary rules, in declaration order.
  pub fn rules(&self) -> &[SharedRule] {
    self.containers.rules()
  }

  // endregion

  pub fn dispatch_symbols(&self) -> &HashSet<IString> {
    &self.dispatch_symbols
  }

  pub fn index(&self) -> Result<&dyn RuleIndex, RuleStoreError> {
    self.index.as_deref().ok_or(RuleStoreError::IndexNotBuilt)
  }

  /// The candidate rules for `term` according to the attached index.
  pub fn candidates(&self, term: &Term) -> Result<Vec<SharedRule>, RuleStoreError> {
    Ok(self.index()?.candidates(term))
  }

  #[inline(always)]
  pub fn sort_cache(&self) -> &SortMemoCache {
    &self.sort_cache
  }

  /// Resolves the sort of `term` in `slot`, running `resolve` only if the pair has not been resolved before.
  pub fn resolve_sort<F>(&self, term: &Term, slot: EvaluationSlot, resolve: F) -> ResolvedSort
    where F: FnOnce(&Term) -> ResolvedSort
  {
    self.sort_cache.get_or_resolve(term, slot, resolve)
  }
}

impl Debug for RuleStore {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "RuleStore {{")?;
    writeln!(f, "  sorts: {}", self.data.lattice().len())?;
    writeln!(f, "  dispatch symbols: {}", self.dispatch_symbols.len())?;
    writeln!(f, "  indexed: {}", self.index.is_some())?;
    self.containers.debug_fmt(f, "")?;
    writeln!(f, "}}")
  }
}
