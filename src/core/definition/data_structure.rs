/*!

Bulk data sorts (lists, sets, maps) are implemented natively by the rewriting engine. A `DataStructureSort` names the
symbols the grammar uses for construction of such a sort: the binary constructor, the element (or map binding)
constructor, and the unit.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::IString,
  core::sort::{BuiltinSort, Sort},
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BulkKind {
  List,
  Set,
  Map,
}

impl BulkKind {
  /// The built-in sort implementing this kind of collection.
  pub fn builtin(self) -> BuiltinSort {
    match self {
      BulkKind::List => BuiltinSort::List,
      BulkKind::Set  => BuiltinSort::Set,
      BulkKind::Map  => BuiltinSort::Map,
    }
  }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DataStructureSort {
  pub sort       : Sort,
  pub kind       : BulkKind,
  pub constructor: IString,
  pub element    : IString,
  pub unit       : IString,
}

impl DataStructureSort {
  pub fn new(sort: Sort, kind: BulkKind, constructor: &str, element: &str, unit: &str) -> Self {
    DataStructureSort {
      sort,
      kind,
      constructor: IString::from(constructor),
      element    : IString::from(element),
      unit       : IString::from(unit),
    }
  }

  /// Is `symbol` one of the symbols building values of this sort?
  pub fn is_constructed_by(&self, symbol: &IString) -> bool {
    *symbol == self.constructor || *symbol == self.element || *symbol == self.unit
  }
}

impl Display for DataStructureSort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} as {} [constructor {}, element {}, unit {}]",
      self.sort,
      self.kind.builtin().name(),
      self.constructor,
      self.element,
      self.unit
    )
  }
}
