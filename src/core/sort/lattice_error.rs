/*!

When computing the closure of the subsort relation, encountering a cycle is an error condition.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::core::sort::Sort;

#[derive(Clone, Eq, PartialEq)]
pub enum SortLatticeError {
  /// Some sorts of the connected component could not be ordered below their supersorts.
  CycleDetected {
    problem_sort: Sort,
  },
  /// Every sort of the connected component has a supersort.
  NoMaximalSort {
    problem_sort: Sort,
  },
}

impl SortLatticeError {
  pub fn problem_sort(&self) -> &Sort {
    match self {
      SortLatticeError::CycleDetected { problem_sort }
      | SortLatticeError::NoMaximalSort { problem_sort } => problem_sort,
    }
  }
}

impl Display for SortLatticeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      SortLatticeError::CycleDetected { problem_sort } => {
        write!(
          f,
          "the connected component in the sort graph that contains sort \"{}\" could not be ordered due to a cycle",
          problem_sort
        )
      }

      SortLatticeError::NoMaximalSort { problem_sort } => {
        write!(
          f,
          "the connected component in the sort graph that contains sort \"{}\" has no maximal sorts due to a cycle",
          problem_sort
        )
      }

    }
  }
}

impl Debug for SortLatticeError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for SortLatticeError {}
