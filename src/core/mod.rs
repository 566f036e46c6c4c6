/*!

The core data model: sorts and their lattice, terms, rules and their categories, the definition data a store is built
over, and the rule store itself.

Loading happens in two phases. During the load phase a [`RuleStoreBuilder`](rule_store::RuleStoreBuilder) classifies
each rule exactly once and places it into the containers of its category. Finalizing the builder yields a
[`RuleStore`](rule_store::RuleStore), which is read-only except for its sort memo cache and can be shared across
rewriting workers.

| Category                | Attribute          | Container                                       |
|:------------------------|:-------------------|:------------------------------------------------|
| function                | `function`         | `function_rules[symbol]`                        |
| sort predicate function | `function` + `predicate` | `function_rules[symbol]` and `sort_predicate_rules[argument symbol]` |
| pattern                 | `pattern`          | `pattern_rules[symbol]`                         |
| pattern folding         | `pattern-folding`  | `pattern_folding_rules`                         |
| macro                   | `macro`            | `macros`                                        |
| anywhere                | `anywhere`         | `anywhere_rules[symbol]`                        |
| ordinary                |                    | `rules`                                         |

*/

pub mod attribute;
pub mod definition;
pub mod diagnostics;
pub mod parsing;
pub mod rule;
pub mod rule_index;
pub mod rule_store;
pub mod signature_table;
pub mod sort;
pub mod sort_cache;
pub mod term;
