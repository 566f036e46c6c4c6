/*!

Programs are parsed by an external parser, which the `ParsingCoordinator` delegates to. The provider is fixed when the
coordinator is constructed; a coordinator without one refuses every request.

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
  path::Path,
};

use crate::{
  core::{sort::Sort, term::Term},
  debug,
};

pub trait ParseProvider: Send + Sync {
  /// Parses the program at `path` against the syntax of `module`, starting from `start_sort`.
  fn parse(&self, path: &Path, module: &str, start_sort: &Sort) -> Result<Term, ParseError>;
}

#[derive(Default)]
pub struct ParsingCoordinator {
  provider: Option<Box<dyn ParseProvider>>,
}

impl ParsingCoordinator {
  pub fn new(provider: Option<Box<dyn ParseProvider>>) -> Self {
    ParsingCoordinator { provider }
  }

  pub fn has_provider(&self) -> bool {
    self.provider.is_some()
  }

  pub fn parse(&self, path: &Path, module: &str, start_sort: &Sort) -> Result<Term, ParseError> {
    let provider = self.provider.as_deref().ok_or(ParseError::NoProvider)?;
    debug!(4, "parsing {} in module {} at sort {}", path.display(), module, start_sort);
    provider.parse(path, module, start_sort)
  }
}


#[derive(Clone, Eq, PartialEq)]
pub enum ParseError {
  /// No parser was supplied.
  NoProvider,
  /// The parser rejected the input.
  Provider(String),
}

impl Display for ParseError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ParseError::NoProvider        => write!(f, "no parser is available"),
      ParseError::Provider(message) => write!(f, "parse error: {}", message),
    }
  }
}

impl Debug for ParseError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for ParseError {}


#[cfg(test)]
mod tests {
  use super::*;

  /// Parses every file to a constant named after its stem.
  struct StemParser;

  impl ParseProvider for StemParser {
    fn parse(&self, path: &Path, _module: &str, _start_sort: &Sort) -> Result<Term, ParseError> {
      path.file_stem()
          .and_then(|stem| stem.to_str())
          .map(Term::constant)
          .ok_or_else(|| ParseError::Provider(format!("no file name in {}", path.display())))
    }
  }

  #[test]
  fn parse_without_provider_fails() {
    let coordinator = ParsingCoordinator::default();
    let result      = coordinator.parse(Path::new("prog.imp"), "IMP", &Sort::new("Pgm"));

    assert!(!coordinator.has_provider());
    assert_eq!(result, Err(ParseError::NoProvider));
  }

  #[test]
  fn parse_delegates_to_provider() {
    let coordinator = ParsingCoordinator::new(Some(Box::new(StemParser)));

    assert_eq!(
      coordinator.parse(Path::new("/tmp/sum.imp"), "IMP", &Sort::new("Pgm")),
      Ok(Term::constant("sum"))
    );
    assert!(matches!(
      coordinator.parse(Path::new("/"), "IMP", &Sort::new("Pgm")),
      Err(ParseError::Provider(_))
    ));
  }
}
