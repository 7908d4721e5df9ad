pub mod compiler;
#[cfg(feature = "python")]
mod python;

use compiler::{Compile, FrontendError, FrontendResult};
use dafny_tr::{SyntaxNode, Translation, Translator, TranslatorOptions};
use rustpython_parser::mode::Mode;
use rustpython_parser::parser as pyparser;

/// Parses Python source into the translator's syntax tree.
/// `path` is only used in parse error messages.
pub fn parse(code: &str, path: &str) -> FrontendResult<SyntaxNode> {
  let tree = pyparser::parse(code, Mode::Module, path).map_err(|err| FrontendError::Parse(err.to_string()))?;
  tree.compile()
}

pub fn translate_with(code: &str, path: &str, options: TranslatorOptions) -> FrontendResult<Translation> {
  let module = parse(code, path)?;
  let translation = Translator::new(options).translate_module(&module)?;
  Ok(translation)
}

/// Python source in, Dafny source out, with default options.
pub fn translate(code: &str) -> FrontendResult<Translation> {
  translate_with(code, "<pydafny>", TranslatorOptions::default())
}
