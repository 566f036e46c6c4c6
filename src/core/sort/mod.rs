/*!

A sort (represented in code by the [`Sort`](crate::core::sort::Sort) struct) is a named syntactic category. Sorts are
organized into a lattice by a subsort relation, in which one sort can be a subsort (subtype) of another. Connected
components of this relation are called *kinds*. Two sorts in different kinds are always incomparable.

## Lifecycle and Ownership

The [`SortLattice`](crate::core::sort::lattice::SortLattice) is built once per definition, from the sorts the grammar
declares together with the fixed set of [built-in sorts](crate::core::sort::BuiltinSort). After construction it is
immutable and may be shared freely between threads.

## Computing the Closure of the Subsort Relation

Sorts and their subsort relationships are not given to the system as a complete relation. Rather, the smallest
partially ordered set containing the declared pairs has to be computed: if A < B and B < C then A < C. The closure is
computed once, at construction, by visiting sorts so that every sort is visited after all of its subsorts and taking,
for each sort, the union of the closures of its immediate subsorts. Each closure is stored as a
[`NatSet`](crate::abstractions::NatSet) of sort indices, so that a subsort query at runtime is a kind comparison
followed by a single bit test.

A declared relation such as A < B, B < C, C < A is malformed. A cycle leaves some sorts unvisited, and construction
fails with a [`SortLatticeError`](crate::core::sort::lattice_error::SortLatticeError).

*/

pub mod lattice;
pub mod signature;
pub(crate) mod lattice_error;
mod sort;

pub use sort::*;
pub use lattice::SortLattice;
pub use lattice_error::SortLatticeError;
pub use signature::SortSignature;
