pub mod decl;
pub mod expr;
pub mod stmt;

use log::{debug, info, warn};

use crate::contract::{ClauseContext, ContractBlock};
use crate::error::{TrResult, TranslateError};
use crate::options::{FailurePolicy, TranslatorOptions};
use crate::syntax::{FunctionDef, Param, SyntaxNode};

/// Read-only state shared by every statement of one body.
pub struct BodyCtx<'a> {
  pub options: &'a TranslatorOptions,
  /// Binding that `return e` assigns to.
  pub result: &'a str,
}

/// The declaration or loop that owns the statements being rendered.
/// Annotation literals found in its body are absorbed into `contract`.
pub struct Scope<'a> {
  pub context: ClauseContext,
  pub params: &'a [Param],
  pub contract: ContractBlock,
}

/// Output of a module translation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Translation {
  /// Every successfully translated declaration, in source order.
  pub source: String,
  /// One `TranslateError::Definition` per skipped definition.
  pub failures: Vec<TranslateError>,
}

impl Translation {
  pub fn is_complete(&self) -> bool {
    self.failures.is_empty()
  }
}

#[derive(Debug, Default, Clone)]
pub struct Translator {
  options: TranslatorOptions,
}

impl Translator {
  pub fn new(options: TranslatorOptions) -> Self {
    Translator { options }
  }

  pub fn options(&self) -> &TranslatorOptions {
    &self.options
  }

  /// Translates every top-level definition of `module`, in order.
  /// Top-level nodes that are not definitions are skipped.
  pub fn translate_module(&self, module: &SyntaxNode) -> TrResult<Translation> {
    let defs = match module {
      SyntaxNode::Module { defs } => defs,
      other => return Err(TranslateError::unsupported(format!("{} at the top level", other.kind()))),
    };
    let mut decls = Vec::new();
    let mut failures = Vec::new();
    for node in defs {
      let def = match node {
        SyntaxNode::FunctionDef(def) => def,
        other => {
          debug!("ignoring top-level {}", other.kind());
          continue;
        }
      };
      match self.translate_definition(def) {
        Ok(decl) => decls.push(decl),
        Err(err) => match self.options.failure_policy {
          FailurePolicy::FailFast => return Err(err),
          FailurePolicy::BestEffort => {
            warn!("skipping definition: {err}");
            failures.push(err);
          }
        },
      }
    }
    info!("translated {} definition(s), {} failed", decls.len(), failures.len());
    Ok(Translation { source: decls.join("\n"), failures })
  }

  /// Translates one definition; errors carry the definition's name.
  pub fn translate_definition(&self, def: &FunctionDef) -> TrResult<String> {
    decl::render_definition(def, &self.options).map_err(|err| err.in_definition(&def.name))
  }
}

/// Translates `module` with default options.
pub fn translate_module(module: &SyntaxNode) -> TrResult<Translation> {
  Translator::default().translate_module(module)
}
