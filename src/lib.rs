/*!

A rule repository for term rewriting definitions. Rules are classified once, when they are loaded, into the category
that determines how the rewriting engine dispatches them: function equations, sort predicates, patterns, macros,
anywhere rules, and ordinary rewrites. The finalized [`RuleStore`](api::RuleStore) bundles the categorized rules with
the sort lattice, signature table, and attribute data of the definition, a rule index, and a sort memo cache shared
by concurrent rewriting workers.

See [`api`] for the public surface.

*/

pub mod api;
pub mod abstractions;
mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};
