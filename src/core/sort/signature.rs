/*!

A `SortSignature` is one overload of a dispatch symbol: the sorts of its arguments and the sort of its result.

*/

use std::fmt::Display;

use crate::{
  abstractions::join_string,
  core::sort::Sort,
};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SortSignature {
  pub parameters: Vec<Sort>,
  pub result    : Sort,
}

impl SortSignature {
  pub fn new(parameters: Vec<Sort>, result: Sort) -> Self {
    SortSignature { parameters, result }
  }

  #[inline(always)]
  pub fn arity(&self) -> usize {
    self.parameters.len()
  }
}

impl Display for SortSignature {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.parameters.is_empty() {
      write!(f, "-> {}", self.result)
    } else {
      write!(f, "{} -> {}", join_string(self.parameters.iter(), " "), self.result)
    }
  }
}
