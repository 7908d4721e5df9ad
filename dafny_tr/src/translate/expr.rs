//! Expression nodes to Dafny expression text.
//!
//! Binary and boolean operators are written without surrounding spaces,
//! comparisons with one space on each side. A compound operand that binds
//! more loosely than its parent is parenthesised.

use log::warn;

use crate::error::{TrResult, TranslateError};
use crate::ops::BinOper;
use crate::options::TranslatorOptions;
use crate::syntax::SyntaxNode;

const BOOL_PREC: u8 = 2;
const CMP_PREC: u8 = 3;
const UNARY_PREC: u8 = 8;
const ATOM_PREC: u8 = 9;

fn precedence(node: &SyntaxNode) -> u8 {
  match node {
    SyntaxNode::BoolOp { .. } => BOOL_PREC,
    SyntaxNode::Compare { .. } => CMP_PREC,
    SyntaxNode::BinaryOp { op, .. } => op.precedence(),
    SyntaxNode::UnaryOp { .. } => UNARY_PREC,
    _ => ATOM_PREC,
  }
}

// Renders `node` as an operand of an operator with precedence `parent`.
// `tight` also wraps operands of equal precedence.
fn operand(node: &SyntaxNode, parent: u8, tight: bool, options: &TranslatorOptions) -> TrResult<String> {
  let text = render_expr(node, options)?;
  let prec = precedence(node);
  if prec < parent || (tight && prec == parent) {
    Ok(format!("({text})"))
  } else {
    Ok(text)
  }
}

pub fn render_expr(node: &SyntaxNode, options: &TranslatorOptions) -> TrResult<String> {
  match node {
    SyntaxNode::Identifier { name } => Ok(name.clone()),
    SyntaxNode::Literal { value } => Ok(value.clone()),
    SyntaxNode::BinaryOp { op, left, right } => {
      let symbol = op.symbol()?;
      let prec = op.precedence();
      let right_assoc = *op == BinOper::Pow;
      let left = operand(left, prec, right_assoc, options)?;
      let right = operand(right, prec, !right_assoc, options)?;
      Ok(format!("{left}{symbol}{right}"))
    },
    SyntaxNode::UnaryOp { op, operand: value } => {
      let symbol = op.symbol()?;
      let value = operand(value, UNARY_PREC, false, options)?;
      Ok(format!("{symbol}{value}"))
    },
    SyntaxNode::BoolOp { op, operands } => {
      let symbol = op.symbol()?;
      if operands.is_empty() {
        return Err(TranslateError::UnsupportedExpression { kind: "empty boolean operation".into() });
      }
      let operands = operands
        .iter()
        .map(|x| operand(x, BOOL_PREC, true, options))
        .collect::<TrResult<Vec<String>>>()?;
      Ok(operands.join(symbol))
    },
    SyntaxNode::Compare { left, ops, comparators } => {
      let (op, right) = match (ops.first(), comparators.first()) {
        (Some(op), Some(right)) => (op, right),
        _ => return Err(TranslateError::UnsupportedExpression { kind: "empty comparison".into() }),
      };
      if ops.len() > 1 || comparators.len() > 1 {
        if options.strict_comparisons {
          return Err(TranslateError::unsupported("comparison chain"));
        }
        warn!("comparison chain with {} links, only the first one is translated", ops.len());
      }
      let symbol = op.symbol()?;
      let left = operand(left, CMP_PREC, true, options)?;
      let right = operand(right, CMP_PREC, true, options)?;
      Ok(format!("{left} {symbol} {right}"))
    },
    other => Err(TranslateError::UnsupportedExpression { kind: other.kind().to_string() }),
  }
}
