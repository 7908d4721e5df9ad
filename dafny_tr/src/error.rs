use thiserror::Error;

/// Everything that can stop a definition from being translated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
  #[error("unsupported construct: {kind}")]
  UnsupportedConstruct { kind: String },

  #[error("unsupported expression: {kind}")]
  UnsupportedExpression { kind: String },

  #[error("operator `{tag}` has no Dafny symbol")]
  UnmappedOperator { tag: String },

  #[error("missing type annotation on {name}")]
  MissingTypeAnnotation { name: String },

  #[error("malformed `{clause}` clause ({reason}): {line}")]
  MalformedClause { clause: String, line: String, reason: String },

  #[error("in definition `{name}`: {source}")]
  Definition {
    name: String,
    #[source]
    source: Box<TranslateError>,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  UnsupportedConstruct,
  UnsupportedExpression,
  UnmappedOperator,
  MissingTypeAnnotation,
  MalformedClause,
}

impl TranslateError {
  pub fn unsupported(kind: impl Into<String>) -> Self {
    TranslateError::UnsupportedConstruct { kind: kind.into() }
  }

  pub fn malformed(clause: &str, line: &str, reason: &str) -> Self {
    TranslateError::MalformedClause { clause: clause.into(), line: line.into(), reason: reason.into() }
  }

  /// Attaches the name of the definition the failure belongs to.
  pub fn in_definition(self, name: &str) -> Self {
    match self {
      err @ TranslateError::Definition { .. } => err,
      err => TranslateError::Definition { name: name.into(), source: Box::new(err) },
    }
  }

  /// The underlying failure kind, looking through definition context.
  pub fn kind(&self) -> ErrorKind {
    match self {
      TranslateError::UnsupportedConstruct { .. } => ErrorKind::UnsupportedConstruct,
      TranslateError::UnsupportedExpression { .. } => ErrorKind::UnsupportedExpression,
      TranslateError::UnmappedOperator { .. } => ErrorKind::UnmappedOperator,
      TranslateError::MissingTypeAnnotation { .. } => ErrorKind::MissingTypeAnnotation,
      TranslateError::MalformedClause { .. } => ErrorKind::MalformedClause,
      TranslateError::Definition { source, .. } => source.kind(),
    }
  }
}

pub type TrResult<A> = Result<A, TranslateError>;
