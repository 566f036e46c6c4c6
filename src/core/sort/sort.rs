/*!

A `Sort` is a named syntactic category. Sorts compare by name.

The eight [`BuiltinSort`]s exist in every definition regardless of what the grammar declares.

*/

use std::fmt::Display;

use once_cell::sync::Lazy;

use crate::abstractions::{HashSet, IString};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Sort {
  name: IString,
}

impl Sort {
  pub fn new(name: &str) -> Sort {
    Sort { name: IString::from(name) }
  }

  #[inline(always)]
  pub fn name(&self) -> &IString {
    &self.name
  }

  /// Is this one of the built-in sorts?
  pub fn builtin(&self) -> Option<BuiltinSort> {
    BuiltinSort::ALL.into_iter().find(|b| &*self.name == b.name())
  }
}

impl From<&str> for Sort {
  fn from(name: &str) -> Self {
    Sort::new(name)
  }
}

impl From<IString> for Sort {
  fn from(name: IString) -> Self {
    Sort { name }
  }
}

impl Display for Sort {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}


#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinSort {
  Bool,
  Int,
  Float,
  Char,
  String,
  // Bulk data sorts
  List,
  Set,
  Map,
}

impl BuiltinSort {
  pub const ALL: [BuiltinSort; 8] = [
    BuiltinSort::Bool,
    BuiltinSort::Int,
    BuiltinSort::Float,
    BuiltinSort::Char,
    BuiltinSort::String,
    BuiltinSort::List,
    BuiltinSort::Set,
    BuiltinSort::Map,
  ];

  pub fn name(self) -> &'static str {
    match self {
      BuiltinSort::Bool   => "Bool",
      BuiltinSort::Int    => "Int",
      BuiltinSort::Float  => "Float",
      BuiltinSort::Char   => "Char",
      BuiltinSort::String => "String",
      BuiltinSort::List   => "List",
      BuiltinSort::Set    => "Set",
      BuiltinSort::Map    => "Map",
    }
  }

  #[inline(always)]
  pub fn sort(self) -> Sort {
    Sort::new(self.name())
  }

  /// Is this one of the bulk data sorts (sequence, set, mapping)?
  pub fn is_bulk(self) -> bool {
    matches!(self, BuiltinSort::List | BuiltinSort::Set | BuiltinSort::Map)
  }
}

/// The set of sorts that exist in every definition.
pub static BUILTIN_SORTS: Lazy<HashSet<Sort>> = Lazy::new(|| {
  BuiltinSort::ALL.into_iter().map(BuiltinSort::sort).collect()
});


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_sorts_are_recognized() {
    assert_eq!(BUILTIN_SORTS.len(), 8);
    assert_eq!(Sort::new("Map").builtin(), Some(BuiltinSort::Map));
    assert_eq!(Sort::new("Exp").builtin(), None);
    assert!(BuiltinSort::Set.is_bulk());
    assert!(!BuiltinSort::Char.is_bulk());
  }
}
