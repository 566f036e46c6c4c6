/*!

A `DefinitionData` bundle is the sort and signature data of a loaded definition: the sort lattice, the signature
table, the built-in token sorts, and a handful of optional tables. It is built once by one of two constructors and then
shared (behind an `Arc`) by every rule store that differs only in its rules.

| Table                  | `from_grammar` | `from_module` |
|:-----------------------|:---------------|:--------------|
| sort lattice           | yes            | yes           |
| signatures, attributes | yes            | yes           |
| list constructors      | yes            | empty         |
| bulk data sorts        | yes            | absent        |
| fresh-name functions   | yes            | absent        |
| configuration          | yes            | absent        |

An absent table is not the same as an empty one. Lookups into optional tables return a [`Lookup`], which makes the
caller handle the absent case explicitly.

*/

pub mod configuration;
pub mod data_structure;
pub mod grammar;
pub mod module_signature;
pub mod options;

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
  hash::Hash,
};

use crate::{
  abstractions::{HashMap, HashSet, IString},
  core::{
    attribute::Attributes,
    signature_table::{Production, SignatureError, SignatureTable},
    sort::{Sort, SortLattice, SortLatticeError, SortSignature, BUILTIN_SORTS},
  },
  error,
  info,
};

use configuration::ConfigurationStructure;
use data_structure::DataStructureSort;
use grammar::GrammarContext;
use module_signature::ModuleSignature;
use options::{GlobalOptions, RunOptions};

/// Token sorts every module-built definition knows about.
const MODULE_TOKEN_SORTS: [&str; 3] = ["#Int", "#String", "#Id"];

/// The result of a lookup into a table that a definition may not have.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Lookup<T> {
  /// The definition was built without this table.
  NotProvided,
  /// The table exists but has no entry for the key.
  Missing,
  Found(T),
}

impl<T> Lookup<T> {
  pub fn found(self) -> Option<T> {
    match self {
      Lookup::Found(value) => Some(value),
      _                    => None,
    }
  }

  pub fn is_provided(&self) -> bool {
    !matches!(self, Lookup::NotProvided)
  }
}

fn lookup_in<'a, K: Hash + Eq, V>(table: &'a Option<HashMap<K, V>>, key: &K) -> Lookup<&'a V> {
  match table {
    None        => Lookup::NotProvided,
    Some(table) => table.get(key).map_or(Lookup::Missing, Lookup::Found),
  }
}


#[derive(Debug)]
pub struct DefinitionData {
  lattice             : SortLattice,
  builtin_sorts       : HashSet<Sort>,
  signatures          : SignatureTable,
  data_structure_sorts: Option<HashMap<Sort, DataStructureSort>>,
  fresh_function_names: Option<HashMap<Sort, IString>>,
  configuration       : Option<ConfigurationStructure>,
  global_options      : GlobalOptions,
  run_options         : RunOptions,
}

impl DefinitionData {
  /// Builds the full data set from a grammar. Fails if the subsort relation has a cycle or if two productions of one
  /// symbol disagree on their attributes.
  pub fn from_grammar(grammar: GrammarContext) -> Result<DefinitionData, DefinitionError> {
    let GrammarContext {
      sorts,
      subsorts,
      token_sorts,
      productions,
      list_productions,
      data_structure_sorts,
      fresh_function_names,
      configuration,
      global_options,
      run_options,
    } = grammar;

    let signatures = SignatureTable::from_productions(productions, list_productions)
        .map_err(DefinitionError::from)
        .inspect_err(|e| error!(1, "cannot build signature table: {}", e))?;

    let mut builtin_sorts: HashSet<Sort> = (*BUILTIN_SORTS).clone();
    builtin_sorts.extend(token_sorts.iter().cloned());

    let lattice = build_lattice(sorts, &token_sorts, &signatures, subsorts)?;

    let data_structure_sorts = data_structure_sorts
        .into_iter()
        .map(|data_structure_sort| (data_structure_sort.sort.clone(), data_structure_sort))
        .collect();

    info!(
      2,
      "built definition data from grammar: {} sorts, {} symbols",
      lattice.len(),
      signatures.symbols().len()
    );

    Ok(DefinitionData {
      lattice,
      builtin_sorts,
      signatures,
      data_structure_sorts: Some(data_structure_sorts),
      fresh_function_names: Some(fresh_function_names),
      configuration       : Some(configuration),
      global_options,
      run_options,
    })
  }

  /// Builds the reduced data set of a structured module. Bulk data sorts, fresh-name functions and the configuration
  /// structure are absent.
  pub fn from_module(module: ModuleSignature) -> Result<DefinitionData, DefinitionError> {
    let ModuleSignature { sorts, subsorts, signatures, attributes } = module;

    let signatures  = SignatureTable::from_parts(signatures, attributes);
    let token_sorts: Vec<Sort> = MODULE_TOKEN_SORTS.iter().map(|&name| Sort::new(name)).collect();

    let mut builtin_sorts: HashSet<Sort> = (*BUILTIN_SORTS).clone();
    builtin_sorts.extend(token_sorts.iter().cloned());

    let lattice = build_lattice(sorts, &token_sorts, &signatures, subsorts)?;

    info!(2, "built definition data from module: {} sorts", lattice.len());

    Ok(DefinitionData {
      lattice,
      builtin_sorts,
      signatures,
      data_structure_sorts: None,
      fresh_function_names: None,
      configuration       : None,
      global_options      : GlobalOptions::default(),
      run_options         : RunOptions::default(),
    })
  }

  // region Sorts

  #[inline(always)]
  pub fn lattice(&self) -> &SortLattice {
    &self.lattice
  }

  pub fn all_sorts(&self) -> impl Iterator<Item = &Sort> + '_ {
    self.lattice.all_sorts()
  }

  /// The fixed built-in sorts together with the declared token sorts.
  pub fn builtin_sorts(&self) -> &HashSet<Sort> {
    &self.builtin_sorts
  }

  #[inline(always)]
  pub fn is_subsort(&self, subsort: &Sort, supersort: &Sort) -> bool {
    self.lattice.is_subsort(subsort, supersort)
  }

  /// The bulk data sort description of `sort`.
  pub fn data_structure_sort_of(&self, sort: &Sort) -> Lookup<&DataStructureSort> {
    lookup_in(&self.data_structure_sorts, sort)
  }

  /// The bulk data sort whose constructor, element, or unit symbol is `symbol`.
  pub fn data_structure_sort_of_symbol(&self, symbol: &IString) -> Lookup<&DataStructureSort> {
    match &self.data_structure_sorts {
      None        => Lookup::NotProvided,
      Some(table) => {
        table.values()
             .find(|data_structure_sort| data_structure_sort.is_constructed_by(symbol))
             .map_or(Lookup::Missing, Lookup::Found)
      }
    }
  }

  pub fn fresh_function_name_of(&self, sort: &Sort) -> Lookup<&IString> {
    lookup_in(&self.fresh_function_names, sort)
  }

  // endregion

  // region Signatures

  #[inline(always)]
  pub fn signatures(&self) -> &SignatureTable {
    &self.signatures
  }

  pub fn signatures_of(&self, symbol: &IString) -> impl Iterator<Item = &SortSignature> + '_ {
    self.signatures.signatures_of(symbol)
  }

  pub fn attributes_of(&self, symbol: &IString) -> Option<&Attributes> {
    self.signatures.attributes_of(symbol)
  }

  pub fn list_labels_of(&self, symbol: &IString) -> &[Production] {
    self.signatures.list_labels_of(symbol)
  }

  // endregion

  pub fn configuration_structure(&self) -> Option<&ConfigurationStructure> {
    self.configuration.as_ref()
  }

  #[inline(always)]
  pub fn global_options(&self) -> &GlobalOptions {
    &self.global_options
  }

  #[inline(always)]
  pub fn run_options(&self) -> &RunOptions {
    &self.run_options
  }
}

/// Every declared, token, and signature-mentioned sort goes into the lattice.
fn build_lattice(
  sorts      : Vec<Sort>,
  token_sorts: &[Sort],
  signatures : &SignatureTable,
  subsorts   : Vec<(Sort, Sort)>,
) -> Result<SortLattice, DefinitionError>
{
  let all_sorts = sorts
      .into_iter()
      .chain(token_sorts.iter().cloned())
      .chain(signatures.mentioned_sorts().cloned())
      .collect::<Vec<_>>();

  SortLattice::new(all_sorts, subsorts)
      .map_err(DefinitionError::from)
      .inspect_err(|e| error!(1, "cannot close sort lattice: {}", e))
}


/// A structural defect of the definition. Loading cannot continue.
#[derive(Clone, Eq, PartialEq)]
pub enum DefinitionError {
  Lattice(SortLatticeError),
  Signature(SignatureError),
}

impl Display for DefinitionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      DefinitionError::Lattice(err)   => Display::fmt(err, f),
      DefinitionError::Signature(err) => Display::fmt(err, f),
    }
  }
}

impl Debug for DefinitionError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for DefinitionError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      DefinitionError::Lattice(err)   => Some(err),
      DefinitionError::Signature(err) => Some(err),
    }
  }
}

impl From<SortLatticeError> for DefinitionError {
  fn from(err: SortLatticeError) -> Self {
    DefinitionError::Lattice(err)
  }
}

impl From<SignatureError> for DefinitionError {
  fn from(err: SignatureError) -> Self {
    DefinitionError::Signature(err)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::{
    attribute::RuleAttribute,
    definition::data_structure::BulkKind,
  };

  fn grammar() -> GrammarContext {
    let exp = Sort::new("Exp");
    let mut grammar = GrammarContext {
      sorts      : vec![exp.clone(), Sort::new("Id")],
      subsorts   : vec![(Sort::new("Id"), exp.clone()), (Sort::new("Int"), exp.clone())],
      token_sorts: vec![Sort::new("#Id"), Sort::new("Id")],
      productions: vec![
        Production::new("foo", vec![exp.clone(), exp.clone()], exp.clone(), Attributes::from_keys(["function"])),
        Production::new("bar", vec![exp.clone()], Sort::new("Stmt"), Attributes::from_keys(["anywhere"])),
      ],
      data_structure_sorts: vec![
        DataStructureSort::new(Sort::new("Map"), BulkKind::Map, "_Map_", "_|->_", ".Map"),
      ],
      ..GrammarContext::default()
    };
    grammar.fresh_function_names.insert(Sort::new("Id"), IString::from("freshId"));
    grammar
  }

  #[test]
  fn grammar_path_populates_every_table() {
    let data = DefinitionData::from_grammar(grammar()).unwrap();

    for builtin in BUILTIN_SORTS.iter() {
      assert!(data.builtin_sorts().contains(builtin));
      assert!(data.all_sorts().any(|s| s == builtin));
    }
    assert!(data.builtin_sorts().contains(&Sort::new("#Id")));
    assert!(data.all_sorts().any(|s| *s == Sort::new("#Id")));
    // Mentioned only by a production.
    assert!(data.all_sorts().any(|s| *s == Sort::new("Stmt")));
    assert!(data.is_subsort(&Sort::new("Int"), &Sort::new("Exp")));

    let foo = IString::from("foo");
    assert_eq!(data.signatures_of(&foo).count(), 1);
    assert!(data.attributes_of(&foo).unwrap().contains(RuleAttribute::Function));

    let map = data.data_structure_sort_of(&Sort::new("Map"));
    assert_eq!(map.found().map(|d| d.kind), Some(BulkKind::Map));
    assert_eq!(data.data_structure_sort_of(&Sort::new("Set")), Lookup::Missing);
    assert_eq!(
      data.data_structure_sort_of_symbol(&IString::from("_|->_")).found().map(|d| d.sort.clone()),
      Some(Sort::new("Map"))
    );
    assert_eq!(data.fresh_function_name_of(&Sort::new("Id")), Lookup::Found(&IString::from("freshId")));
    assert!(data.configuration_structure().is_some());
  }

  #[test]
  fn module_path_leaves_optional_tables_absent() {
    let mut module = ModuleSignature::new();
    module.sorts.push(Sort::new("Exp"));
    module.add_signature("foo", SortSignature::new(vec![Sort::new("Exp")], Sort::new("Exp")));

    let data = DefinitionData::from_module(module).unwrap();

    for sort in BUILTIN_SORTS.iter() {
      assert_eq!(data.data_structure_sort_of(sort), Lookup::NotProvided);
    }
    assert!(!data.data_structure_sort_of(&Sort::new("Exp")).is_provided());
    assert_eq!(data.data_structure_sort_of_symbol(&IString::from("_Map_")), Lookup::NotProvided);
    assert_eq!(data.fresh_function_name_of(&Sort::new("Exp")), Lookup::NotProvided);
    assert!(data.configuration_structure().is_none());
    assert!(data.builtin_sorts().contains(&Sort::new("#String")));
    assert_eq!(data.signatures_of(&IString::from("foo")).count(), 1);
  }

  #[test]
  fn structural_defects_abort_construction() {
    let mut bad_attributes = grammar();
    bad_attributes.productions.push(
      Production::new("foo", vec![Sort::new("Int"), Sort::new("Int")], Sort::new("Int"), Attributes::new())
    );
    assert!(matches!(DefinitionData::from_grammar(bad_attributes), Err(DefinitionError::Signature(_))));

    let mut cyclic = grammar();
    cyclic.subsorts.push((Sort::new("Exp"), Sort::new("Id")));
    assert!(matches!(DefinitionData::from_grammar(cyclic), Err(DefinitionError::Lattice(_))));
  }
}
