//! Contract clauses embedded in docstrings.
//!
//! Each line of an annotation literal is stripped and classified by its
//! prefix (`pre`, `post`, `mod`, `dec`, `inv`, `var`). The clause text is
//! whatever follows the first colon. Lines that carry no clause legal in the
//! current context are kept as comments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TrResult, TranslateError};
use crate::syntax::Param;

static CLAUSE_PREFIX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(var|pre|post|mod|dec|inv)").expect("clause prefix pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clause {
  Var, Pre, Post, Mod, Dec, Inv,
}

impl Clause {
  pub fn keyword(self) -> &'static str {
    match self {
      Clause::Var  => "var",
      Clause::Pre  => "pre",
      Clause::Post => "post",
      Clause::Mod  => "mod",
      Clause::Dec  => "dec",
      Clause::Inv  => "inv",
    }
  }

  fn from_keyword(keyword: &str) -> Option<Clause> {
    match keyword {
      "var"  => Some(Clause::Var),
      "pre"  => Some(Clause::Pre),
      "post" => Some(Clause::Post),
      "mod"  => Some(Clause::Mod),
      "dec"  => Some(Clause::Dec),
      "inv"  => Some(Clause::Inv),
      _ => None,
    }
  }
}

/// Where an annotation appears. Decides which prefixes are clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseContext {
  Function,
  Method,
  Loop,
}

impl ClauseContext {
  pub fn accepts(self, clause: Clause) -> bool {
    use Clause::*;
    match self {
      ClauseContext::Function => matches!(clause, Pre | Post | Mod | Dec),
      ClauseContext::Method   => matches!(clause, Var | Pre | Post | Mod | Dec),
      ClauseContext::Loop     => matches!(clause, Inv | Mod | Dec),
    }
  }
}

/// The contract of one function, method or loop. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractBlock {
  pub precondition: Option<String>,
  pub postcondition: Option<String>,
  pub frame: Option<String>,
  pub rank: Option<String>,
  pub invariant: Option<String>,
  /// Named return values declared by a `var` line, in declaration order.
  pub return_bindings: Vec<(String, String)>,
  /// Residual docstring lines, without the comment marker.
  pub comment: Vec<String>,
}

impl ContractBlock {
  /// Parses an optional annotation. `params` are the enclosing definition's
  /// parameters; `var` bindings that repeat one of them are skipped.
  pub fn parse(text: Option<&str>, context: ClauseContext, params: &[Param]) -> TrResult<ContractBlock> {
    let mut block = ContractBlock::default();
    if let Some(text) = text {
      block.absorb(text, context, params)?;
    }
    Ok(block)
  }

  /// Applies every line of `text` to this block. Later clauses overwrite
  /// earlier ones with the same prefix.
  pub fn absorb(&mut self, text: &str, context: ClauseContext, params: &[Param]) -> TrResult<()> {
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
      let clause = CLAUSE_PREFIX
        .captures(line)
        .and_then(|caps| Clause::from_keyword(&caps[1]))
        .filter(|clause| context.accepts(*clause));
      match clause {
        Some(clause) => self.set(clause, line, params)?,
        None => self.comment.push(line.to_string()),
      }
    }
    Ok(())
  }

  pub fn has_clauses(&self) -> bool {
    self.precondition.is_some()
      || self.postcondition.is_some()
      || self.frame.is_some()
      || self.rank.is_some()
      || self.invariant.is_some()
      || !self.return_bindings.is_empty()
  }

  fn set(&mut self, clause: Clause, line: &str, params: &[Param]) -> TrResult<()> {
    let body = clause_body(clause, line)?;
    match clause {
      Clause::Var  => self.return_bindings = parse_bindings(line, body, params)?,
      Clause::Pre  => self.precondition = Some(body.to_string()),
      Clause::Post => self.postcondition = Some(body.to_string()),
      Clause::Mod  => self.frame = Some(body.to_string()),
      Clause::Dec  => self.rank = Some(body.to_string()),
      Clause::Inv  => self.invariant = Some(body.to_string()),
    }
    Ok(())
  }
}

// Text after the first colon, trimmed. A clause line must have one.
fn clause_body(clause: Clause, line: &str) -> TrResult<&str> {
  let keyword = clause.keyword();
  match line.split_once(':') {
    None => Err(TranslateError::malformed(keyword, line, "missing `:`")),
    Some((_, body)) if body.trim().is_empty() => Err(TranslateError::malformed(keyword, line, "empty clause")),
    Some((_, body)) => Ok(body.trim()),
  }
}

fn parse_bindings(line: &str, body: &str, params: &[Param]) -> TrResult<Vec<(String, String)>> {
  let mut bindings = Vec::new();
  for item in split_top_level(body) {
    let item = item.trim();
    if item.is_empty() {
      continue;
    }
    let (name, ty) = match item.split_once(':') {
      Some((name, ty)) if !name.trim().is_empty() && !ty.trim().is_empty() => (name.trim(), ty.trim()),
      _ => return Err(TranslateError::malformed("var", line, "expected `name: type`")),
    };
    if params.iter().any(|param| param.name == name) {
      continue;
    }
    bindings.push((name.to_string(), ty.to_string()));
  }
  Ok(bindings)
}

// Splits on `,` and `;` outside of brackets, so `map<int, int>` stays whole.
fn split_top_level(text: &str) -> Vec<&str> {
  let mut items = Vec::new();
  let mut depth = 0usize;
  let mut start = 0;
  for (i, ch) in text.char_indices() {
    match ch {
      '<' | '(' | '[' => depth += 1,
      '>' | ')' | ']' => depth = depth.saturating_sub(1),
      ',' | ';' if depth == 0 => {
        items.push(&text[start..i]);
        start = i + 1;
      }
      _ => {}
    }
  }
  items.push(&text[start..]);
  items
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;
  use pretty_assertions::assert_eq;

  fn parse(text: &str, context: ClauseContext) -> ContractBlock {
    ContractBlock::parse(Some(text), context, &[]).unwrap()
  }

  #[test]
  fn absent_annotation_is_empty() {
    let block = ContractBlock::parse(None, ClauseContext::Method, &[]).unwrap();
    assert_eq!(block, ContractBlock::default());
    assert!(!block.has_clauses());
  }

  #[test]
  fn function_clauses() {
    let block = parse("pre: x > 0\npost: result == x\nmod: a\ndec: n", ClauseContext::Function);
    assert_eq!(block.precondition.as_deref(), Some("x > 0"));
    assert_eq!(block.postcondition.as_deref(), Some("result == x"));
    assert_eq!(block.frame.as_deref(), Some("a"));
    assert_eq!(block.rank.as_deref(), Some("n"));
    assert!(block.comment.is_empty());
  }

  #[test]
  fn text_after_first_colon_only() {
    let block = parse("  post:  m == (if a > b: a)  ", ClauseContext::Function);
    assert_eq!(block.postcondition.as_deref(), Some("m == (if a > b: a)"));
  }

  #[test]
  fn later_clause_wins() {
    let block = parse("pre: a\npre: b", ClauseContext::Function);
    assert_eq!(block.precondition.as_deref(), Some("b"));
  }

  #[test]
  fn residual_lines_become_comments() {
    let block = parse("Adds two numbers.\n\n  Nothing fancy.\npre: true", ClauseContext::Function);
    assert_eq!(block.comment, vec!["Adds two numbers.", "Nothing fancy."]);
    assert_eq!(block.precondition.as_deref(), Some("true"));
  }

  #[test]
  fn prefixes_are_case_sensitive() {
    let block = parse("Pre: x", ClauseContext::Function);
    assert_eq!(block.precondition, None);
    assert_eq!(block.comment, vec!["Pre: x"]);
  }

  #[test]
  fn var_bindings_in_methods() {
    let params = [Param::new("a", "int")];
    let block = ContractBlock::parse(Some("var: a: int, x: int; y: map<int, bool>"), ClauseContext::Method, &params).unwrap();
    assert_eq!(block.return_bindings, vec![
      ("x".to_string(), "int".to_string()),
      ("y".to_string(), "map<int, bool>".to_string()),
    ]);
  }

  #[test]
  fn var_is_a_comment_outside_methods() {
    let block = parse("var: x: int", ClauseContext::Function);
    assert!(block.return_bindings.is_empty());
    assert_eq!(block.comment, vec!["var: x: int"]);
  }

  #[test]
  fn loop_context_accepts_only_inv_mod_dec() {
    let block = parse("inv: i <= n\npre: i >= 0\ndec: n - i\nmod: a\npost: done", ClauseContext::Loop);
    assert_eq!(block.invariant.as_deref(), Some("i <= n"));
    assert_eq!(block.rank.as_deref(), Some("n - i"));
    assert_eq!(block.frame.as_deref(), Some("a"));
    assert_eq!(block.precondition, None);
    assert_eq!(block.comment, vec!["pre: i >= 0", "post: done"]);
  }

  #[test]
  fn inv_is_a_comment_in_declarations() {
    let block = parse("inv: x", ClauseContext::Method);
    assert_eq!(block.invariant, None);
    assert_eq!(block.comment, vec!["inv: x"]);
  }

  #[test]
  fn malformed_lines() {
    for text in ["var x int", "var: x", "var: : int", "pre x > 0", "dec:"] {
      let err = ContractBlock::parse(Some(text), ClauseContext::Method, &[]).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::MalformedClause, "{text}");
    }
  }

  #[test]
  fn absorb_merges_into_existing_block() {
    let mut block = parse("pre: a\npost: b", ClauseContext::Method);
    block.absorb("post: c\nnote", ClauseContext::Method, &[]).unwrap();
    assert_eq!(block.precondition.as_deref(), Some("a"));
    assert_eq!(block.postcondition.as_deref(), Some("c"));
    assert_eq!(block.comment, vec!["note"]);
  }
}
