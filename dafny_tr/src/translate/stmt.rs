use log::debug;

use super::decl::render_loop;
use super::expr::render_expr;
use super::{BodyCtx, Scope};
use crate::error::{TrResult, TranslateError};
use crate::print::line;
use crate::syntax::SyntaxNode;

/// Renders `stmts` one nesting level deeper than `depth`.
pub fn render_block(stmts: &[SyntaxNode], depth: usize, ctx: &BodyCtx, scope: &mut Scope) -> TrResult<String> {
  let depth = depth + ctx.options.indent_width;
  let mut out = String::new();
  for stmt in stmts {
    out.push_str(&render_stmt(stmt, depth, ctx, scope)?);
  }
  Ok(out)
}

pub fn render_stmt(stmt: &SyntaxNode, depth: usize, ctx: &BodyCtx, scope: &mut Scope) -> TrResult<String> {
  let options = ctx.options;
  match stmt {
    // the value comes first, then the target
    SyntaxNode::Assign { target, value } => {
      let value = render_expr(value, options)?;
      let target = render_expr(target, options)?;
      Ok(line(&format!("{value} := {target};"), depth))
    },
    SyntaxNode::If { condition, body, orelse } => {
      if !orelse.is_empty() {
        return Err(TranslateError::unsupported("else-branch"));
      }
      let condition = render_expr(condition, options)?;
      let body = render_block(body, depth, ctx, scope)?;
      let head = line(&format!("if {condition} {{"), depth);
      let tail = line("}", depth);
      Ok(format!("{head}{body}{tail}"))
    },
    SyntaxNode::While { condition, annotation, body } => {
      render_loop(condition, annotation.as_deref(), body, depth, ctx)
    },
    SyntaxNode::Return { value: Some(value) } => {
      let value = render_expr(value, options)?;
      Ok(line(&format!("{} := {value};", ctx.result), depth))
    },
    SyntaxNode::Return { value: None } => Ok(String::new()),
    // docstrings inside a body feed the enclosing contract
    SyntaxNode::AnnotationLiteral { text } => {
      scope.contract.absorb(text, scope.context, scope.params)?;
      Ok(String::new())
    },
    SyntaxNode::Expression { value } => {
      debug!("dropping bare {} statement", value.kind());
      Ok(String::new())
    },
    SyntaxNode::For { .. } => Err(TranslateError::unsupported("for-loop")),
    SyntaxNode::FunctionDef(def) => Err(TranslateError::unsupported(format!("nested definition `{}`", def.name))),
    SyntaxNode::Opaque { kind } => Err(TranslateError::unsupported(kind.as_str())),
    SyntaxNode::Module { .. }
    | SyntaxNode::BinaryOp { .. }
    | SyntaxNode::UnaryOp { .. }
    | SyntaxNode::BoolOp { .. }
    | SyntaxNode::Compare { .. }
    | SyntaxNode::Identifier { .. }
    | SyntaxNode::Literal { .. } => Err(TranslateError::unsupported(format!("{} used as a statement", stmt.kind()))),
  }
}
