use std::iter::once;
use std::fmt::Display;

/**
Interleaves a separator between the items of an iterator, which doesn't exist in the stdlib. (C.f. `Vec::join(…)`)

The separator is computed from the item that follows it.

    # use rulestore::abstractions::join_iter;
    let iter = ["Int", "Bool"].iter().cloned();
    let sep = ", ";
    assert_eq!(join_iter(iter, |_| sep).collect::<String>(), "Int, Bool");
*/
pub fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
    -> impl Iterator<Item = T>
{
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |s| once(sep(&s)).chain(once(s))))
}

/// Join a list of things that can be displayed as string with a given separator.
///
/// This is a convenience function that defers to `join_iter`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|t| t.to_string()), |_| sep.to_string()).collect::<String>()
}

#[cfg(test)]
mod tests {
  use super::{join_iter, join_string};

  #[test]
  fn join_iter_interleaves_separator() {
    let iter   = [1, 3, 5].iter().cloned();
    let joined = join_iter(iter, |v| v - 1).collect::<Vec<_>>();
    assert_eq!(joined, vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn join_string_of_sorts() {
    let sorts = ["Int", "Bool", "K"];
    assert_eq!(join_string(sorts.iter(), " "), "Int Bool K");
    assert_eq!(join_string(std::iter::empty::<&str>(), ", "), "");
  }
}
