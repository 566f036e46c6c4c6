/*!

The inputs of a definition built from a structured module, whose signatures and attributes were already computed
elsewhere. This path carries no bulk data sorts, fresh-name functions, or configuration structure.

*/

use crate::{
  abstractions::{HashMap, HashSet, IString},
  core::{
    attribute::Attributes,
    sort::{Sort, SortSignature},
  },
};

#[derive(Clone, Default, Debug)]
pub struct ModuleSignature {
  pub sorts     : Vec<Sort>,
  pub subsorts  : Vec<(Sort, Sort)>,
  pub signatures: HashMap<IString, HashSet<SortSignature>>,
  pub attributes: HashMap<IString, Attributes>,
}

impl ModuleSignature {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one overload of `symbol`.
  pub fn add_signature(&mut self, symbol: &str, signature: SortSignature) {
    self.signatures.entry(IString::from(symbol)).or_default().insert(signature);
  }
}
