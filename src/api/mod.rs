/*!

The public API of the library. Everything a client needs to describe a definition, load its rules, and query the
resulting store is re-exported here.

```
use rulestore::api::*;

let grammar = GrammarContext {
  sorts      : vec![Sort::new("Exp")],
  productions: vec![
    Production::new("double", vec![Sort::new("Exp")], Sort::new("Exp"), Attributes::from_keys(["function"])),
  ],
  ..GrammarContext::default()
};

let mut builder     = RuleStoreBuilder::from_grammar(grammar).unwrap();
let mut diagnostics = DiagnosticLog::default();
let x               = Term::variable("X", Sort::new("Exp"));
let rule            = Rule::new(
  Term::apply("double", vec![x.clone()]),
  Term::apply("_+_", vec![x.clone(), x]),
  Vec::new(),
  Attributes::from_keys(["function"]),
).unwrap();

builder.add_rule(rule, &mut diagnostics);
builder.build_index::<HeadSymbolIndex>().unwrap();
let store = builder.finalize();

assert_eq!(store.function_rules_on(&IString::from("double")).len(), 1);
assert!(diagnostics.is_empty());
```

*/

pub use crate::{
  abstractions::IString,
  core::{
    attribute::{Attributes, RuleAttribute, RuleAttributes},
    definition::{
      configuration::{CellInfo, ConfigurationStructure, Multiplicity},
      data_structure::{BulkKind, DataStructureSort},
      grammar::GrammarContext,
      module_signature::ModuleSignature,
      options::{GlobalOptions, RunOptions, WarningPolicy},
      DefinitionData,
      DefinitionError,
      Lookup,
    },
    diagnostics::{DiagnosticLog, Diagnostics, Warning},
    parsing::{ParseError, ParseProvider, ParsingCoordinator},
    rule::{Condition, Conditions, Rule, RuleCategory, RuleError, SharedRule},
    rule_index::{HeadSymbolIndex, RuleIndex},
    rule_store::{
      import::{ModuleSentence, TermConverter},
      RuleContainers,
      RuleStore,
      RuleStoreBuilder,
      RuleStoreError,
    },
    signature_table::{Production, SignatureError, SignatureTable},
    sort::{BuiltinSort, Sort, SortLattice, SortLatticeError, SortSignature, BUILTIN_SORTS},
    sort_cache::{EvaluationSlot, ResolvedSort, SortMemoCache},
    term::Term,
  },
};
