/*!

The configuration of a definition is a tree of named cells. The `ConfigurationStructure` records, for each cell, its
sort, its place in the tree, and how many instances of it may occur.

*/

use crate::{
  abstractions::{HashMap, IString},
  core::sort::Sort,
};

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum Multiplicity {
  #[default]
  One,
  Optional,
  Many,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CellInfo {
  pub name        : IString,
  pub sort        : Sort,
  pub parent      : Option<IString>,
  pub children    : Vec<IString>,
  pub multiplicity: Multiplicity,
}

#[derive(Clone, Default, Debug)]
pub struct ConfigurationStructure {
  cells: HashMap<IString, CellInfo>,
  root : Option<IString>,
}

impl ConfigurationStructure {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a cell below `parent`, or as the root if `parent` is `None`. The parent must already be present.
  pub fn insert_cell(&mut self, name: &str, sort: Sort, parent: Option<&str>, multiplicity: Multiplicity) {
    let name   = IString::from(name);
    let parent = parent.map(IString::from);

    match &parent {
      Some(parent) => {
        if let Some(parent_cell) = self.cells.get_mut(parent) {
          parent_cell.children.push(name.clone());
        }
      }
      None => self.root = Some(name.clone()),
    }

    self.cells.insert(
      name.clone(),
      CellInfo {
        name,
        sort,
        parent,
        children: Vec::new(),
        multiplicity,
      }
    );
  }

  pub fn cell(&self, name: &IString) -> Option<&CellInfo> {
    self.cells.get(name)
  }

  pub fn root(&self) -> Option<&CellInfo> {
    self.root.as_ref().and_then(|root| self.cells.get(root))
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cells_form_a_tree() {
    let mut structure = ConfigurationStructure::new();
    structure.insert_cell("T", Sort::new("Bag"), None, Multiplicity::One);
    structure.insert_cell("k", Sort::new("K"), Some("T"), Multiplicity::One);
    structure.insert_cell("thread", Sort::new("Bag"), Some("T"), Multiplicity::Many);

    let root = structure.root().unwrap();
    assert_eq!(&*root.name, "T");
    assert_eq!(root.children.len(), 2);
    assert_eq!(structure.cell(&IString::from("thread")).unwrap().multiplicity, Multiplicity::Many);
    assert_eq!(structure.cell(&IString::from("k")).unwrap().parent, Some(IString::from("T")));
  }
}
