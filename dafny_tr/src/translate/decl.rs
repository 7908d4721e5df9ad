//! Assembles complete Dafny declarations: functions, methods and loops.
//!
//! The body is rendered before the header so that annotation literals met
//! inside it can still contribute clauses.

use log::debug;

use super::expr::render_expr;
use super::stmt::render_block;
use super::{BodyCtx, Scope};
use crate::contract::{ClauseContext, ContractBlock};
use crate::error::{TrResult, TranslateError};
use crate::naming::{mangle, DeclarationKind};
use crate::options::TranslatorOptions;
use crate::print::{comment_lines, line, vec_to_string};
use crate::syntax::{FunctionDef, Param, SyntaxNode};

const RESULT: &str = "result";

fn render_params(params: &[Param]) -> TrResult<String> {
  let mut typed = Vec::with_capacity(params.len());
  for param in params {
    match &param.declared_type {
      Some(ty) => typed.push((param.name.as_str(), ty.as_str())),
      None => return Err(TranslateError::MissingTypeAnnotation { name: format!("parameter `{}`", param.name) }),
    }
  }
  Ok(vec_to_string(&typed, &|pair: &(&str, &str)| format!("{}: {}", pair.0, pair.1), ", "))
}

// Present clauses in fixed order, one per line.
fn render_clauses(clauses: &[(&str, &Option<String>)], depth: usize) -> String {
  clauses
    .iter()
    .filter_map(|&(keyword, clause)| clause.as_ref().map(|text| line(&format!("{keyword} {text};"), depth)))
    .collect()
}

/// The body is rendered before the parameters and the signature, so an
/// unsupported construct is reported ahead of a missing type.
pub fn render_definition(def: &FunctionDef, options: &TranslatorOptions) -> TrResult<String> {
  let kind = DeclarationKind::of(&def.name).ok_or_else(|| TranslateError::unsupported("untagged definition"))?;
  let name = mangle(&def.name);
  let context = kind.clause_context();
  let contract = ContractBlock::parse(def.annotation.as_deref(), context, &def.params)?;
  let return_bindings = contract.return_bindings.clone();

  let result = match kind {
    DeclarationKind::Method => return_bindings.first().map(|(name, _)| name.clone()),
    DeclarationKind::Function => None,
  }
  .unwrap_or_else(|| RESULT.to_string());

  let ctx = BodyCtx { options, result: &result };
  let mut scope = Scope { context, params: &def.params, contract };
  let body = render_block(&def.body, 0, &ctx, &mut scope)?;
  let contract = scope.contract;

  let params = render_params(&def.params)?;
  let signature = match kind {
    DeclarationKind::Function => match &def.returns {
      Some(ty) => format!(": {ty}"),
      None => return Err(TranslateError::MissingTypeAnnotation { name: format!("return value of `{}`", def.name) }),
    },
    DeclarationKind::Method => {
      if let Some(ty) = &def.returns {
        debug!("`{}` declares return type {ty}, methods return through `var` bindings", def.name);
      }
      if return_bindings.is_empty() {
        String::new()
      } else {
        let bindings = vec_to_string(&return_bindings, &|pair: &(String, String)| format!("{}: {}", pair.0, pair.1), ", ");
        format!(" returns ({bindings})")
      }
    },
  };

  let width = options.indent_width;
  let mut out = comment_lines(&contract.comment, 0);
  out.push_str(&line(&format!("{} {name}({params}){signature}", kind.keyword()), 0));
  out.push_str(&render_clauses(&[
    ("requires", &contract.precondition),
    ("ensures", &contract.postcondition),
    ("modifies", &contract.frame),
    ("decreases", &contract.rank),
  ], width));
  out.push_str(&line("{", 0));
  out.push_str(&body);
  out.push_str(&line("}", 0));
  Ok(out)
}

/// Loop mode: the annotation only knows `inv`, `mod` and `dec`.
pub fn render_loop(
  condition: &SyntaxNode,
  annotation: Option<&str>,
  body: &[SyntaxNode],
  depth: usize,
  ctx: &BodyCtx,
) -> TrResult<String> {
  let contract = ContractBlock::parse(annotation, ClauseContext::Loop, &[])?;
  let condition = render_expr(condition, ctx.options)?;
  let mut scope = Scope { context: ClauseContext::Loop, params: &[], contract };
  let body = render_block(body, depth, ctx, &mut scope)?;
  let contract = scope.contract;

  let mut out = comment_lines(&contract.comment, depth);
  out.push_str(&line(&format!("while {condition}"), depth));
  out.push_str(&render_clauses(&[
    ("invariant", &contract.invariant),
    ("modifies", &contract.frame),
    ("decreases", &contract.rank),
  ], depth + ctx.options.indent_width));
  out.push_str(&line("{", depth));
  out.push_str(&body);
  out.push_str(&line("}", depth));
  Ok(out)
}
