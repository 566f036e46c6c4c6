/*!

A `NatSet` is a set of small natural numbers, used wherever a set of indices is needed. The subsort closure stores,
for each sort, the indices of every sort below it.

*/

use bit_set::BitSet;

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct NatSet(BitSet);

impl NatSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `value`, returning `true` if it was not already present.
  #[inline(always)]
  pub fn insert(&mut self, value: usize) -> bool {
    self.0.insert(value)
  }

  #[inline(always)]
  pub fn contains(&self, value: usize) -> bool {
    self.0.contains(value)
  }

  /// In-place union: `self = self ∪ other`.
  #[inline(always)]
  pub fn union_in_place(&mut self, other: &NatSet) {
    self.0.union_with(&other.0);
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter()
  }
}

impl FromIterator<usize> for NatSet {
  fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
    NatSet(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn union_and_membership() {
    let mut a: NatSet = [0, 2].into_iter().collect();
    let b: NatSet     = [2, 5].into_iter().collect();

    assert!(!a.contains(5));
    a.union_in_place(&b);
    assert!(a.contains(0) && a.contains(2) && a.contains(5));
    assert_eq!(a.len(), 3);
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
  }
}
