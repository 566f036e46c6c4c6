/*!

The `SignatureTable` maps each dispatch symbol to its set of overloaded [`SortSignature`]s and to the attribute set
shared by all of its productions. It is built once, by grouping the productions of a grammar by symbol, and is
immutable afterward.

All productions of one symbol must carry identical attributes. Otherwise which category a rule on that symbol belongs to
would depend on which production one looked at, so a mismatch fails construction.

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
};

use crate::{
  abstractions::{join_string, HashMap, HashSet, IString},
  core::{
    attribute::{Attributes, RuleAttribute},
    sort::{Sort, SortSignature},
  },
};

/// A production `result ::= symbol(arguments…) [attributes]` of the grammar.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Production {
  pub symbol        : IString,
  pub argument_sorts: Vec<Sort>,
  pub result_sort   : Sort,
  pub attributes    : Attributes,
}

impl Production {
  pub fn new(symbol: &str, argument_sorts: Vec<Sort>, result_sort: Sort, attributes: Attributes) -> Self {
    Production {
      symbol: IString::from(symbol),
      argument_sorts,
      result_sort,
      attributes,
    }
  }

  #[inline(always)]
  pub fn arity(&self) -> usize {
    self.argument_sorts.len()
  }

  pub fn signature(&self) -> SortSignature {
    SortSignature::new(self.argument_sorts.clone(), self.result_sort.clone())
  }
}

impl Display for Production {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "syntax {} ::= {}({})", self.result_sort, self.symbol, join_string(self.argument_sorts.iter(), ", "))?;
    if !self.attributes.is_empty() {
      write!(f, " {}", self.attributes)?;
    }
    Ok(())
  }
}


#[derive(Clone, Default, Debug)]
pub struct SignatureTable {
  signatures : HashMap<IString, HashSet<SortSignature>>,
  attributes : HashMap<IString, Attributes>,
  list_labels: HashMap<IString, Vec<Production>>,
}

impl SignatureTable {
  /// Groups `productions` by symbol. `list_productions` are the productions of list constructors.
  pub fn from_productions<P, L>(productions: P, list_productions: L) -> Result<SignatureTable, SignatureError>
    where P: IntoIterator<Item = Production>,
          L: IntoIterator<Item = Production>
  {
    let mut table = SignatureTable::default();
    // The first production of each symbol is kept so a mismatch can name both sides.
    let mut representatives: HashMap<IString, Production> = HashMap::new();

    for production in productions {
      match representatives.get(&production.symbol) {
        Some(first) if first.attributes != production.attributes => {
          return Err(SignatureError::AttributeMismatch {
            symbol: production.symbol.clone(),
            first : first.to_string(),
            second: production.to_string(),
          });
        }
        Some(_) => {}
        None => {
          table.attributes.insert(production.symbol.clone(), production.attributes.clone());
          representatives.insert(production.symbol.clone(), production.clone());
        }
      }
      table.signatures
           .entry(production.symbol.clone())
           .or_default()
           .insert(production.signature());
    }

    for production in list_productions {
      table.list_labels.entry(production.symbol.clone()).or_default().push(production);
    }

    Ok(table)
  }

  /// Assembles a table from signatures and attributes computed elsewhere, as from a structured module.
  pub fn from_parts(
    signatures: HashMap<IString, HashSet<SortSignature>>,
    attributes: HashMap<IString, Attributes>
  ) -> SignatureTable
  {
    SignatureTable {
      signatures,
      attributes,
      list_labels: HashMap::new(),
    }
  }

  /// The overloads of `symbol`. Empty if the symbol is unknown.
  pub fn signatures_of(&self, symbol: &IString) -> impl Iterator<Item = &SortSignature> + '_ {
    self.signatures.get(symbol).into_iter().flatten()
  }

  pub fn attributes_of(&self, symbol: &IString) -> Option<&Attributes> {
    self.attributes.get(symbol)
  }

  pub fn attributes(&self) -> &HashMap<IString, Attributes> {
    &self.attributes
  }

  pub fn is_function_symbol(&self, symbol: &IString) -> bool {
    self.attributes_of(symbol)
        .is_some_and(|attributes| attributes.contains(RuleAttribute::Function))
  }

  /// The productions of a list constructor. Empty if `symbol` is not one.
  pub fn list_labels_of(&self, symbol: &IString) -> &[Production] {
    self.list_labels.get(symbol).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn is_list_label(&self, symbol: &IString) -> bool {
    self.list_labels.contains_key(symbol)
  }

  /// Every symbol with signatures or attributes.
  pub fn symbols(&self) -> HashSet<&IString> {
    self.signatures.keys().chain(self.attributes.keys()).collect()
  }

  /// Every sort mentioned by a signature.
  pub fn mentioned_sorts(&self) -> impl Iterator<Item = &Sort> + '_ {
    self.signatures
        .values()
        .flatten()
        .flat_map(|signature| signature.parameters.iter().chain(std::iter::once(&signature.result)))
  }
}


#[derive(Clone, Eq, PartialEq)]
pub enum SignatureError {
  AttributeMismatch {
    symbol: IString,
    first : String,
    second: String,
  },
}

impl Display for SignatureError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      SignatureError::AttributeMismatch { symbol, first, second } => {
        write!(f, "mismatched attributes for productions of {}:\n\t{}\nand\n\t{}", symbol, first, second)
      }
    }
  }
}

impl Debug for SignatureError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for SignatureError {}


#[cfg(test)]
mod tests {
  use super::*;

  fn plus(argument: &str, result: &str, keys: &[&str]) -> Production {
    Production::new(
      "_+_",
      vec![Sort::new(argument), Sort::new(argument)],
      Sort::new(result),
      Attributes::from_keys(keys.iter().copied())
    )
  }

  #[test]
  fn overloads_are_grouped_by_symbol() {
    let table = SignatureTable::from_productions(
      vec![
        plus("Int", "Int", &["function"]),
        plus("Float", "Float", &["function"]),
        plus("Int", "Int", &["function"]),
      ],
      Vec::new()
    ).unwrap();

    let symbol = IString::from("_+_");
    assert_eq!(table.signatures_of(&symbol).count(), 2);
    assert!(table.is_function_symbol(&symbol));
    assert_eq!(table.signatures_of(&IString::from("unknown")).count(), 0);
    assert!(table.list_labels_of(&symbol).is_empty());
  }

  #[test]
  fn mismatched_attributes_are_fatal() {
    let result = SignatureTable::from_productions(
      vec![plus("Int", "Int", &["function"]), plus("Float", "Float", &[])],
      Vec::new()
    );
    match result {
      Err(SignatureError::AttributeMismatch { symbol, .. }) => assert_eq!(&*symbol, "_+_"),
      Ok(_) => panic!("mismatched attributes were accepted"),
    }
  }

  #[test]
  fn list_labels_are_recorded() {
    let cons = Production::new("_,_", vec![Sort::new("Exp"), Sort::new("Exps")], Sort::new("Exps"), Attributes::new());
    let table = SignatureTable::from_productions(vec![cons.clone()], vec![cons.clone()]).unwrap();

    assert!(table.is_list_label(&cons.symbol));
    assert_eq!(table.list_labels_of(&cons.symbol), &[cons]);
  }
}
