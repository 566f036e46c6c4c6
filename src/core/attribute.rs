/*!

Attributes tag rules and the productions of a symbol. Six of them drive rule classification and are kept as flags; any
other attribute lands in an open key/value bag that classification never looks at.

*/

use std::{
  collections::BTreeMap,
  fmt::{Display, Formatter},
  hash::{Hash, Hasher},
};

use enumflags2::{bitflags, make_bitflags, BitFlags};

use crate::abstractions::join_iter;

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum RuleAttribute {
  Function,
  Macro,
  Anywhere,
  Pattern,
  PatternFolding,
  /// A function rule testing sort membership of its argument, `isFoo(…)`.
  SortPredicate,
}

pub type RuleAttributes = BitFlags<RuleAttribute, u8>;

impl RuleAttribute {
  #![allow(non_upper_case_globals)]

  /// Attributes that place a rule somewhere other than the ordinary rule list.
  pub const Classifying: RuleAttributes = make_bitflags!(
    RuleAttribute::{
      Function
      | Macro
      | Anywhere
      | Pattern
      | PatternFolding
    }
  );

  /// The key under which the attribute is written in a definition.
  pub fn key(self) -> &'static str {
    match self {
      RuleAttribute::Function       => "function",
      RuleAttribute::Macro          => "macro",
      RuleAttribute::Anywhere       => "anywhere",
      RuleAttribute::Pattern        => "pattern",
      RuleAttribute::PatternFolding => "pattern-folding",
      RuleAttribute::SortPredicate  => "predicate",
    }
  }

  pub fn from_key(key: &str) -> Option<RuleAttribute> {
    match key {
      "function"        => Some(RuleAttribute::Function),
      "macro"           => Some(RuleAttribute::Macro),
      "anywhere"        => Some(RuleAttribute::Anywhere),
      "pattern"         => Some(RuleAttribute::Pattern),
      "pattern-folding" => Some(RuleAttribute::PatternFolding),
      "predicate"       => Some(RuleAttribute::SortPredicate),
      _                 => None,
    }
  }
}

impl Display for RuleAttribute {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.key())
  }
}


/// The attribute set of a rule or production.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Attributes {
  flags: RuleAttributes,
  other: BTreeMap<String, String>,
}

impl Attributes {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds an attribute set from `(key, value)` pairs. Recognized keys become flags, and their values are discarded.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where I: IntoIterator<Item = (K, V)>,
          K: AsRef<str>,
          V: Into<String>
  {
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
      attributes.insert(key.as_ref(), value);
    }
    attributes
  }

  /// Builds an attribute set from bare keys, as in `[function, predicate]`.
  pub fn from_keys<I, K>(keys: I) -> Self
    where I: IntoIterator<Item = K>,
          K: AsRef<str>
  {
    Self::from_pairs(keys.into_iter().map(|key| (key, String::new())))
  }

  pub fn insert(&mut self, key: &str, value: impl Into<String>) {
    match RuleAttribute::from_key(key) {
      Some(flag) => self.flags.insert(flag),
      None       => { self.other.insert(key.to_string(), value.into()); }
    }
  }

  /// Builder-style variant of flag insertion.
  pub fn with(mut self, attribute: RuleAttribute) -> Self {
    self.flags.insert(attribute);
    self
  }

  #[inline(always)]
  pub fn contains(&self, attribute: RuleAttribute) -> bool {
    self.flags.contains(attribute)
  }

  #[inline(always)]
  pub fn flags(&self) -> RuleAttributes {
    self.flags
  }

  /// Looks up an attribute by key. Flags have the empty string as their value.
  pub fn get(&self, key: &str) -> Option<&str> {
    match RuleAttribute::from_key(key) {
      Some(flag) if self.flags.contains(flag) => Some(""),
      Some(_)                                 => None,
      None                                    => self.other.get(key).map(String::as_str),
    }
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.flags.is_empty() && self.other.is_empty()
  }
}

impl Hash for Attributes {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.flags.bits().hash(state);
    self.other.hash(state);
  }
}

impl Display for Attributes {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let flags = self.flags.iter().map(|flag| flag.key().to_string());
    let other = self.other.iter().map(|(key, value)| {
      if value.is_empty() { key.clone() } else { format!("{}({})", key, value) }
    });
    write!(f, "[{}]", join_iter(flags.chain(other), |_| ", ".to_string()).collect::<String>())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_keys_become_flags() {
    let attributes = Attributes::from_pairs([("function", ""), ("klabel", "_+_"), ("predicate", "")]);

    assert!(attributes.contains(RuleAttribute::Function));
    assert!(attributes.contains(RuleAttribute::SortPredicate));
    assert!(!attributes.contains(RuleAttribute::Macro));
    assert_eq!(attributes.get("klabel"), Some("_+_"));
    assert_eq!(attributes.get("function"), Some(""));
    assert_eq!(attributes.get("macro"), None);
    assert_eq!(attributes.to_string(), "[function, predicate, klabel(_+_)]");
  }

  #[test]
  fn equality_covers_the_open_bag() {
    let a = Attributes::from_keys(["function"]);
    let b = Attributes::from_keys(["function", "total"]);
    assert_ne!(a, b);
    assert_eq!(a, Attributes::new().with(RuleAttribute::Function));
  }
}
