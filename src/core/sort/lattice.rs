/*!

The `SortLattice` is the registry of every sort known to a definition together with the closure of the subsort
relation. See the [module level documentation](crate::core::sort) for how the closure is computed.

Sorts are stored in a vector and referred to internally by their index in it. The subsort adjacency lists, the kind
(connected component) of each sort, and the closure are all expressed in terms of these indices.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{join_string, HashMap, NatSet},
  core::sort::{
    lattice_error::SortLatticeError,
    Sort,
    BuiltinSort
  },
  debug,
};

const NO_KIND: usize = usize::MAX;

#[derive(Clone, Debug)]
struct SortNode {
  sort      : Sort,
  /// Adjacency lists, only immediately adjacent sorts as declared.
  subsorts  : Vec<usize>,
  supersorts: Vec<usize>,
  kind      : usize,
  /// Indices of every sort `<=` this one, including itself.
  leq_sorts : NatSet,
}

impl SortNode {
  fn new(sort: Sort) -> Self {
    SortNode {
      sort,
      subsorts  : Vec::new(),
      supersorts: Vec::new(),
      kind      : NO_KIND,
      leq_sorts : NatSet::new(),
    }
  }
}

/// A connected component of the subsort relation.
#[derive(Clone, Debug, Default)]
struct Kind {
  sorts        : Vec<usize>,
  maximal_sorts: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct SortLattice {
  nodes: Vec<SortNode>,
  index: HashMap<Sort, usize>,
  kinds: Vec<Kind>,
}

impl SortLattice {
  /// Builds the lattice from the declared `sorts` and `(subsort, supersort)` pairs. The built-in sorts are always
  /// included. Sorts mentioned only in a subsort pair are registered implicitly.
  pub fn new<S, P>(sorts: S, subsort_pairs: P) -> Result<SortLattice, SortLatticeError>
    where S: IntoIterator<Item = Sort>,
          P: IntoIterator<Item = (Sort, Sort)>
  {
    let mut lattice = SortLattice {
      nodes: Vec::new(),
      index: HashMap::new(),
      kinds: Vec::new(),
    };

    for builtin in BuiltinSort::ALL {
      lattice.get_or_create_sort(builtin.sort());
    }
    for sort in sorts {
      lattice.get_or_create_sort(sort);
    }
    for (subsort, supersort) in subsort_pairs {
      lattice.insert_subsort(subsort, supersort);
    }

    lattice.compute_kinds()?;
    lattice.compute_leq_sorts()?;

    debug!(
      2,
      "closed sort lattice with {} sorts in {} kinds",
      lattice.nodes.len(),
      lattice.kinds.len()
    );
    Ok(lattice)
  }

  fn get_or_create_sort(&mut self, sort: Sort) -> usize {
    if let Some(&i) = self.index.get(&sort) {
      return i;
    }
    let i = self.nodes.len();
    self.index.insert(sort.clone(), i);
    self.nodes.push(SortNode::new(sort));
    i
  }

  /// Records `subsort < supersort` in both adjacency lists. Reflexive and repeated pairs are ignored.
  fn insert_subsort(&mut self, subsort: Sort, supersort: Sort) {
    let sub = self.get_or_create_sort(subsort);
    let sup = self.get_or_create_sort(supersort);
    if sub == sup || self.nodes[sup].subsorts.contains(&sub) {
      return;
    }
    self.nodes[sup].subsorts.push(sub);
    self.nodes[sub].supersorts.push(sup);
  }

  /// Partitions the sorts into connected components.
  fn compute_kinds(&mut self) -> Result<(), SortLatticeError> {
    for start in 0..self.nodes.len() {
      if self.nodes[start].kind != NO_KIND {
        continue;
      }

      let kind_index = self.kinds.len();
      let mut kind   = Kind::default();
      let mut stack  = vec![start];
      self.nodes[start].kind = kind_index;

      while let Some(i) = stack.pop() {
        kind.sorts.push(i);
        if self.nodes[i].supersorts.is_empty() {
          kind.maximal_sorts.push(i);
        }
        let neighbors: Vec<usize> = self.nodes[i].subsorts.iter()
                                        .chain(self.nodes[i].supersorts.iter())
                                        .copied()
                                        .collect();
        for j in neighbors {
          if self.nodes[j].kind == NO_KIND {
            self.nodes[j].kind = kind_index;
            stack.push(j);
          }
        }
      }

      if kind.maximal_sorts.is_empty() {
        return Err(SortLatticeError::NoMaximalSort { problem_sort: self.nodes[start].sort.clone() });
      }
      self.kinds.push(kind);
    }
    Ok(())
  }

  /// Computes the transitive closure of `<=`. A sort is visited only after all of its subsorts have been, so its
  /// closure is the union of theirs. Sorts on a cycle are never visited.
  fn compute_leq_sorts(&mut self) -> Result<(), SortLatticeError> {
    let mut unresolved_subsort_count: Vec<usize> = self.nodes.iter().map(|n| n.subsorts.len()).collect();
    let mut ready: Vec<usize> = (0..self.nodes.len()).filter(|&i| unresolved_subsort_count[i] == 0).collect();
    let mut visited_sort_count = 0;

    while let Some(i) = ready.pop() {
      visited_sort_count += 1;

      let mut leq_sorts = NatSet::new();
      leq_sorts.insert(i);
      for &subsort in self.nodes[i].subsorts.iter() {
        leq_sorts.union_in_place(&self.nodes[subsort].leq_sorts);
      }
      self.nodes[i].leq_sorts = leq_sorts;

      for k in 0..self.nodes[i].supersorts.len() {
        let supersort = self.nodes[i].supersorts[k];
        unresolved_subsort_count[supersort] -= 1;
        if unresolved_subsort_count[supersort] == 0 {
          ready.push(supersort);
        }
      }
    }

    if visited_sort_count != self.nodes.len() {
      let problem = unresolved_subsort_count.iter().position(|&count| count > 0).unwrap_or(0);
      return Err(SortLatticeError::CycleDetected { problem_sort: self.nodes[problem].sort.clone() });
    }
    Ok(())
  }

  // region Queries

  /// Is `subsort <= supersort`? The relation is reflexive. Unknown sorts are only related to themselves.
  pub fn is_subsort(&self, subsort: &Sort, supersort: &Sort) -> bool {
    if subsort == supersort {
      return true;
    }
    match (self.index.get(subsort), self.index.get(supersort)) {
      (Some(&sub), Some(&sup)) => {
        self.nodes[sub].kind == self.nodes[sup].kind && self.nodes[sup].leq_sorts.contains(sub)
      }
      _ => false,
    }
  }

  /// Are the two sorts in the same connected component?
  pub fn same_kind(&self, a: &Sort, b: &Sort) -> bool {
    match (self.index.get(a), self.index.get(b)) {
      (Some(&a), Some(&b)) => self.nodes[a].kind == self.nodes[b].kind,
      _ => a == b,
    }
  }

  /// Every sort known to the lattice, in registration order (built-in sorts first).
  pub fn all_sorts(&self) -> impl Iterator<Item = &Sort> + '_ {
    self.nodes.iter().map(|node| &node.sort)
  }

  #[inline(always)]
  pub fn contains(&self, sort: &Sort) -> bool {
    self.index.contains_key(sort)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  #[inline(always)]
  pub fn kind_count(&self) -> usize {
    self.kinds.len()
  }

  /// The strict subsorts of `sort`, transitively. Empty for unknown sorts.
  pub fn subsorts_of(&self, sort: &Sort) -> Vec<&Sort> {
    match self.index.get(sort) {
      Some(&i) => {
        self.nodes[i].leq_sorts
            .iter()
            .filter(|&j| j != i)
            .map(|j| &self.nodes[j].sort)
            .collect()
      }
      None => Vec::new(),
    }
  }

  /// The sorts at the top of the kind containing `sort`. Empty for unknown sorts.
  pub fn maximal_sorts_of(&self, sort: &Sort) -> Vec<&Sort> {
    match self.index.get(sort) {
      Some(&i) => {
        self.kinds[self.nodes[i].kind]
            .maximal_sorts
            .iter()
            .map(|&j| &self.nodes[j].sort)
            .collect()
      }
      None => Vec::new(),
    }
  }

  // endregion
}

impl Display for SortLattice {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for kind in self.kinds.iter() {
      let iter = kind.sorts.iter().map(|&i| &self.nodes[i].sort);
      writeln!(f, "{{{}}}", join_string(iter, ", "))?;
    }
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn sorts(names: &[&str]) -> Vec<Sort> {
    names.iter().map(|&n| Sort::new(n)).collect()
  }

  fn pairs(pairs: &[(&str, &str)]) -> Vec<(Sort, Sort)> {
    pairs.iter().map(|&(a, b)| (Sort::new(a), Sort::new(b))).collect()
  }

  #[test]
  fn closure_is_transitive_and_reflexive() {
    let lattice = SortLattice::new(
      sorts(&["Exp", "AExp", "Id"]),
      pairs(&[("Id", "AExp"), ("AExp", "Exp"), ("Int", "AExp")])
    ).unwrap();

    let (id, exp, int, aexp) = (Sort::new("Id"), Sort::new("Exp"), Sort::new("Int"), Sort::new("AExp"));
    assert!(lattice.is_subsort(&id, &exp));
    assert!(lattice.is_subsort(&int, &exp));
    assert!(lattice.is_subsort(&exp, &exp));
    assert!(!lattice.is_subsort(&exp, &id));
    assert!(!lattice.is_subsort(&id, &int));
    assert_eq!(lattice.maximal_sorts_of(&aexp), vec![&exp]);

    let below = lattice.subsorts_of(&exp);
    let mut below_exp: Vec<&str> = below.iter().map(|s| &**s.name()).collect();
    below_exp.sort();
    assert_eq!(below_exp, vec!["AExp", "Id", "Int"]);
  }

  #[test]
  fn diamond_and_incomparable_sorts() {
    let lattice = SortLattice::new(
      sorts(&["Top", "Left", "Right", "Bottom", "Other"]),
      pairs(&[("Left", "Top"), ("Right", "Top"), ("Bottom", "Left"), ("Bottom", "Right")])
    ).unwrap();

    let (top, left, right, bottom, other) =
        (Sort::new("Top"), Sort::new("Left"), Sort::new("Right"), Sort::new("Bottom"), Sort::new("Other"));
    assert!(lattice.is_subsort(&bottom, &top));
    assert!(!lattice.is_subsort(&left, &right));
    assert!(!lattice.is_subsort(&right, &left));
    assert!(!lattice.same_kind(&top, &other));
    assert!(!lattice.is_subsort(&other, &top));
    // 8 built-in singleton kinds, the diamond, and `Other`.
    assert_eq!(lattice.kind_count(), 10);
  }

  #[test]
  fn unknown_sorts_are_only_related_to_themselves() {
    let lattice = SortLattice::new(Vec::new(), Vec::new()).unwrap();
    let ghost   = Sort::new("Ghost");
    assert!(lattice.is_subsort(&ghost, &ghost));
    assert!(!lattice.is_subsort(&ghost, &Sort::new("Int")));
    assert!(!lattice.contains(&ghost));
    assert!(lattice.subsorts_of(&ghost).is_empty());
  }

  #[test]
  fn builtin_sorts_are_always_present() {
    let lattice = SortLattice::new(sorts(&["Exp"]), Vec::new()).unwrap();
    for builtin in BuiltinSort::ALL {
      assert!(lattice.contains(&builtin.sort()));
    }
    assert_eq!(lattice.len(), 9);
  }

  #[test]
  fn cycle_without_maximal_sort_is_rejected() {
    let result = SortLattice::new(
      sorts(&["A", "B", "C"]),
      pairs(&[("A", "B"), ("B", "C"), ("C", "A")])
    );
    assert!(matches!(result, Err(SortLatticeError::NoMaximalSort { .. })));
  }

  #[test]
  fn cycle_below_a_maximal_sort_is_rejected() {
    let result = SortLattice::new(
      sorts(&["A", "B", "Top"]),
      pairs(&[("A", "B"), ("B", "A"), ("B", "Top")])
    );
    match result {
      Err(SortLatticeError::CycleDetected { problem_sort }) => {
        assert!(problem_sort == Sort::new("A") || problem_sort == Sort::new("B"));
      }
      other => panic!("expected a cycle, got {:?}", other.map(|l| l.len())),
    }
  }
}
