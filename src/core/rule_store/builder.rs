/*!

The load phase. A `RuleStoreBuilder` accumulates rules one at a time, placing each into its containers according to its
[category](crate::core::rule::RuleCategory), and is finalized into an immutable [`RuleStore`].

The rule index is chosen during loading but built only by `finalize`, over the complete containers. Rules added after
`build_index` are therefore indexed like any other.

A malformed anywhere rule does not abort loading. It is dropped and a warning naming it is recorded through the
[`Diagnostics`] sink passed to the insertion.

*/

use std::sync::Arc;

use crate::{
  abstractions::{HashSet, IString},
  core::{
    definition::{
      grammar::GrammarContext,
      module_signature::ModuleSignature,
      DefinitionData,
      DefinitionError,
    },
    diagnostics::{Diagnostics, Warning},
    rule::{RuleCategory, SharedRule},
    rule_index::RuleIndex,
    rule_store::{RuleContainers, RuleStore, RuleStoreError},
    sort_cache::SortMemoCache,
  },
  info,
  trace,
};

/// Builds a boxed index of a concrete type over the finished containers.
type IndexConstructor = fn(&RuleContainers) -> Box<dyn RuleIndex>;

fn construct_index<I: RuleIndex + 'static>(rules: &RuleContainers) -> Box<dyn RuleIndex> {
  Box::new(I::build(rules))
}

pub struct RuleStoreBuilder {
  data            : Arc<DefinitionData>,
  containers      : RuleContainers,
  dispatch_symbols: HashSet<IString>,
  index           : Option<IndexConstructor>,
}

impl RuleStoreBuilder {
  /// Starts an empty store over an existing data bundle, which may be shared with sibling stores.
  pub fn new(data: Arc<DefinitionData>) -> Self {
    RuleStoreBuilder {
      data,
      containers      : RuleContainers::default(),
      dispatch_symbols: HashSet::new(),
      index           : None,
    }
  }

  pub fn from_grammar(grammar: GrammarContext) -> Result<Self, DefinitionError> {
    Ok(Self::new(Arc::new(DefinitionData::from_grammar(grammar)?)))
  }

  pub fn from_module(module: ModuleSignature) -> Result<Self, DefinitionError> {
    Ok(Self::new(Arc::new(DefinitionData::from_module(module)?)))
  }

  #[inline(always)]
  pub fn data(&self) -> &Arc<DefinitionData> {
    &self.data
  }

  /// The rules placed so far.
  #[inline(always)]
  pub fn rules(&self) -> &RuleContainers {
    &self.containers
  }

  pub fn add_rule(&mut self, rule: impl Into<SharedRule>, diagnostics: &mut dyn Diagnostics) {
    let rule: SharedRule = rule.into();
    let containers       = &mut self.containers;

    match rule.category() {

      RuleCategory::Function { symbol } => {
        containers.function_rules.entry(symbol.clone()).or_default().push(rule.clone());
      }

      RuleCategory::SortPredicateFunction { symbol, predicate_symbol } => {
        containers.function_rules.entry(symbol.clone()).or_default().push(rule.clone());
        containers.sort_predicate_rules.entry(predicate_symbol.clone()).or_default().insert(rule.clone());
      }

      RuleCategory::Pattern { symbol } => {
        containers.pattern_rules.entry(symbol.clone()).or_default().push(rule.clone());
      }

      RuleCategory::PatternFolding => containers.pattern_folding_rules.push(rule.clone()),

      RuleCategory::Macro => containers.macros.push(rule.clone()),

      RuleCategory::Anywhere { symbol } => {
        match symbol {
          Some(symbol) if !self.data.signatures().is_function_symbol(symbol) => {
            containers.anywhere_rules.entry(symbol.clone()).or_default().insert(rule.clone());
          }
          _ => {
            diagnostics.record_warning(Warning::about_rule(
              "anywhere rules must rewrite a constructor application; dropping",
              rule.clone()
            ));
            return;
          }
        }
      }

      RuleCategory::Ordinary => containers.rules.push(rule.clone()),

    }

    trace!(5, "added {}: {}", rule.category(), rule);
  }

  /// Adds each rule in order, exactly as `add_rule` would.
  pub fn add_rules<I, R>(&mut self, rules: I, diagnostics: &mut dyn Diagnostics)
    where I: IntoIterator<Item = R>,
          R: Into<SharedRule>
  {
    for rule in rules {
      self.add_rule(rule, diagnostics);
    }
  }

  pub fn add_dispatch_symbol(&mut self, symbol: IString) {
    self.dispatch_symbols.insert(symbol);
  }

  pub fn add_dispatch_symbols(&mut self, symbols: impl IntoIterator<Item = IString>) {
    self.dispatch_symbols.extend(symbols);
  }

  pub fn dispatch_symbols(&self) -> &HashSet<IString> {
    &self.dispatch_symbols
  }

  /// Selects `I` as the store's rule index. The index is built by `finalize`, over every rule added before or after
  /// this call. A store takes exactly one index.
  pub fn build_index<I: RuleIndex + 'static>(&mut self) -> Result<(), RuleStoreError> {
    if self.index.is_some() {
      return Err(RuleStoreError::IndexAlreadyAttached);
    }
    let construct: IndexConstructor = construct_index::<I>;
    self.index = Some(construct);
    Ok(())
  }

  /// Whether an index has been selected.
  pub fn has_index(&self) -> bool {
    self.index.is_some()
  }

  /// Ends the load phase, building the selected index over the complete containers.
  pub fn finalize(self) -> RuleStore {
    let index = self.index.map(|construct| construct(&self.containers));
    if index.is_some() {
      info!(3, "built rule index over {} rule placements", self.containers.len());
    }

    info!(
      2,
      "finalized rule store: {} rule placements, {} dispatch symbols, {}",
      self.containers.len(),
      self.dispatch_symbols.len(),
      if index.is_some() { "indexed" } else { "no index" }
    );

    RuleStore {
      data            : self.data,
      containers      : self.containers,
      dispatch_symbols: self.dispatch_symbols,
      index,
      sort_cache      : SortMemoCache::new(),
    }
  }
}
