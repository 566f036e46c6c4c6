/*!

The `SortMemoCache` remembers the sort resolved for a term in a given evaluation slot, so that the rewriting engine does
not recompute it every time the same pair comes up.

## Concurrency

The cache is the one part of a [`RuleStore`](crate::core::rule_store::RuleStore) that keeps changing during execution,
while several workers may be reading the store at once. It is therefore a concurrency-safe map behind an `RwLock`, with
idempotent, at-least-once compute semantics: on a miss the resolution runs without holding the lock, and when two
workers race on the same key both compute, the first insertion wins, and both return the stored value. Resolution is a
pure function of the term and slot, so the redundant computation is harmless.

Entries are never evicted and are not invalidated by rule changes, which is sound because a finalized store's rules
never change.

*/

use std::sync::{PoisonError, RwLock};

use crate::{
  abstractions::HashMap,
  core::{
    sort::Sort,
    term::Term,
  },
};

/// Identifies the evaluation context a sort was resolved in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EvaluationSlot(pub u32);

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResolvedSort {
  pub sort    : Sort,
  /// Whether `sort` is the least sort of the term rather than an upper bound.
  pub is_exact: bool,
}

impl ResolvedSort {
  pub fn exact(sort: Sort) -> Self {
    ResolvedSort { sort, is_exact: true }
  }
}

#[derive(Default, Debug)]
pub struct SortMemoCache {
  // Keyed by slot first so that lookups borrow the term instead of cloning it into a key.
  table: RwLock<HashMap<EvaluationSlot, HashMap<Term, ResolvedSort>>>,
}

impl SortMemoCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, term: &Term, slot: EvaluationSlot) -> Option<ResolvedSort> {
    let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
    table.get(&slot).and_then(|terms| terms.get(term)).cloned()
  }

  /// Returns the cached sort for `(term, slot)`, computing and storing it with `resolve` on a miss.
  pub fn get_or_resolve<F>(&self, term: &Term, slot: EvaluationSlot, resolve: F) -> ResolvedSort
    where F: FnOnce(&Term) -> ResolvedSort
  {
    if let Some(resolved) = self.get(term, slot) {
      return resolved;
    }

    let resolved  = resolve(term);
    let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
    table.entry(slot)
         .or_default()
         .entry(term.clone())
         .or_insert(resolved)
         .clone()
  }

  pub fn len(&self) -> usize {
    let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
    table.values().map(HashMap::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}


#[cfg(test)]
mod tests {
  use std::{
    cell::Cell,
    sync::atomic::{AtomicUsize, Ordering},
  };

  use super::*;

  #[test]
  fn second_lookup_is_served_from_the_cache() {
    let cache = SortMemoCache::new();
    let term  = Term::apply("_+_", vec![Term::token(Sort::new("Int"), "1"), Term::token(Sort::new("Int"), "2")]);
    let slot  = EvaluationSlot(7);
    let calls = Cell::new(0);

    let resolve = |_: &Term| {
      calls.set(calls.get() + 1);
      ResolvedSort::exact(Sort::new("Int"))
    };

    let first  = cache.get_or_resolve(&term, slot, resolve);
    let second = cache.get_or_resolve(&term, slot, resolve);

    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn slots_are_distinct_keys() {
    let cache = SortMemoCache::new();
    let term  = Term::constant("x");

    cache.get_or_resolve(&term, EvaluationSlot(0), |_| ResolvedSort::exact(Sort::new("Exp")));
    let other = cache.get_or_resolve(
      &term,
      EvaluationSlot(1),
      |_| ResolvedSort { sort: Sort::new("K"), is_exact: false }
    );

    assert_eq!(other.sort, Sort::new("K"));
    assert_eq!(cache.get(&term, EvaluationSlot(0)).map(|r| r.sort), Some(Sort::new("Exp")));
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn concurrent_resolution_agrees() {
    let cache = SortMemoCache::new();
    let calls = AtomicUsize::new(0);
    let terms: Vec<Term> = (0..16).map(|i| Term::constant(&format!("c{}", i % 4))).collect();

    std::thread::scope(|scope| {
      for term in terms.iter() {
        let (cache, calls) = (&cache, &calls);
        scope.spawn(move || {
          cache.get_or_resolve(term, EvaluationSlot(0), |t| {
            calls.fetch_add(1, Ordering::SeqCst);
            ResolvedSort::exact(Sort::new(&t.to_string()))
          })
        });
      }
    });

    assert_eq!(cache.len(), 4);
    let computed = calls.load(Ordering::SeqCst);
    assert!((4..=16).contains(&computed));
    for i in 0..4 {
      let name = format!("c{}", i);
      assert_eq!(cache.get(&Term::constant(&name), EvaluationSlot(0)).map(|r| r.sort), Some(Sort::new(&name)));
    }
  }
}
