use crate::contract::ClauseContext;
use crate::syntax::Id;

/// Target-language name of a source definition: underscores removed, first
/// character upper-cased, the rest lower-cased (`add_two` -> `Addtwo`).
pub fn mangle(name: &str) -> Id {
  let mut chars = name.chars().filter(|ch| *ch != '_');
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    None => Id::new(),
  }
}

/// Whether a definition becomes a Dafny function or a Dafny method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
  Function,
  Method,
}

impl DeclarationKind {
  /// Picks the kind from the source identifier; `function` is checked first.
  pub fn of(name: &str) -> Option<DeclarationKind> {
    if name.contains("function") {
      Some(DeclarationKind::Function)
    } else if name.contains("method") {
      Some(DeclarationKind::Method)
    } else {
      None
    }
  }

  pub fn keyword(self) -> &'static str {
    match self {
      DeclarationKind::Function => "function",
      DeclarationKind::Method => "method",
    }
  }

  pub fn clause_context(self) -> ClauseContext {
    match self {
      DeclarationKind::Function => ClauseContext::Function,
      DeclarationKind::Method => ClauseContext::Method,
    }
  }
}
