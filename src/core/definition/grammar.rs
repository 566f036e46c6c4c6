/*!

The raw tables a grammar frontend hands over to build a definition. This is the richest of the construction inputs;
see [`DefinitionData::from_grammar`](crate::core::definition::DefinitionData::from_grammar).

*/

use crate::{
  abstractions::{HashMap, IString},
  core::{
    definition::{
      configuration::ConfigurationStructure,
      data_structure::DataStructureSort,
      options::{GlobalOptions, RunOptions},
    },
    signature_table::Production,
    sort::Sort,
  },
};

#[derive(Clone, Default, Debug)]
pub struct GrammarContext {
  /// Sorts declared by the grammar.
  pub sorts               : Vec<Sort>,
  /// `(subsort, supersort)` pairs.
  pub subsorts            : Vec<(Sort, Sort)>,
  /// Sorts whose values are lexical tokens, such as `#Int` or `Id`.
  pub token_sorts         : Vec<Sort>,
  /// Every production; several may share a symbol.
  pub productions         : Vec<Production>,
  /// The productions of list constructors.
  pub list_productions    : Vec<Production>,
  pub data_structure_sorts: Vec<DataStructureSort>,
  /// The function generating fresh values of each sort.
  pub fresh_function_names: HashMap<Sort, IString>,
  pub configuration       : ConfigurationStructure,
  pub global_options      : GlobalOptions,
  pub run_options         : RunOptions,
}
