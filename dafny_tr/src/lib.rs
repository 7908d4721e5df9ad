//! Translates a small, annotated subset of Python into Dafny.
//!
//! The input is an already parsed [`SyntaxNode::Module`]; the output is Dafny
//! source text. Contracts are read from docstrings (`pre:`, `post:`, `mod:`,
//! `dec:`, `inv:`, `var:` lines).

pub mod contract;
pub mod error;
pub mod naming;
pub mod ops;
pub mod options;
pub mod print;
pub mod syntax;
pub mod translate;

pub use crate::contract::{ClauseContext, ContractBlock};
pub use crate::error::{ErrorKind, TrResult, TranslateError};
pub use crate::naming::{mangle, DeclarationKind};
pub use crate::options::{FailurePolicy, TranslatorOptions};
pub use crate::syntax::{FunctionDef, Param, SyntaxNode};
pub use crate::translate::{translate_module, Translation, Translator};
