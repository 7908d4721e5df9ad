use dafny_tr::ops::{BinOper, BoolOper, CmpOper, UnaryOper};
use dafny_tr::{FunctionDef, Param, SyntaxNode, TranslateError};
use rustpython_parser::ast::*;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
  #[error("could not parse source: {0}")]
  Parse(String),
  #[error("{feature} is not supported")]
  NotSupported { feature: String },
  #[error(transparent)]
  Translate(#[from] TranslateError),
}

pub type FrontendResult<S> = Result<S, FrontendError>;

fn not_supported<A>(feature: &str) -> FrontendResult<A> {
  Err(FrontendError::NotSupported { feature: feature.into() })
}

// Constructs the translator must reject are kept in the tree, by name.
fn opaque(kind: &str) -> SyntaxNode {
  SyntaxNode::Opaque { kind: kind.into() }
}

pub trait Compile<S> {
  fn compile(&self) -> FrontendResult<S>;
}

// just throw away the locations
impl<T, S> Compile<T> for Located<S>
where
  S: Compile<T>,
{
  fn compile(&self) -> FrontendResult<T> {
    self.node.compile()
  }
}

impl Compile<SyntaxNode> for Mod {
  fn compile(&self) -> FrontendResult<SyntaxNode> {
    match self {
      Mod::Module { body, .. } => {
        let defs = compile_block(body)?;
        Ok(SyntaxNode::Module { defs })
      },
      _ => not_supported("Anything but a module"),
    }
  }
}

/// A leading string literal is the docstring of the enclosing block.
fn split_docstring(body: &[Stmt]) -> (Option<String>, &[Stmt]) {
  match body.split_first() {
    Some((first, rest)) => match &first.node {
      StmtKind::Expr { value } => match &value.node {
        ExprKind::Constant { value: Constant::Str(text), .. } => (Some(text.clone()), rest),
        _ => (None, body),
      },
      _ => (None, body),
    },
    None => (None, body),
  }
}

fn compile_block(body: &[Stmt]) -> FrontendResult<Vec<SyntaxNode>> {
  let stmts = body.iter().map(|x| x.compile()).collect::<FrontendResult<Vec<Option<SyntaxNode>>>>()?;
  Ok(stmts.into_iter().flatten().collect())
}

// Whatever cannot be lowered is recorded as an opaque statement so the
// definition, and only it, fails in the translator.
fn lowered<T>(result: FrontendResult<T>, unsupported: &mut Vec<SyntaxNode>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(FrontendError::NotSupported { feature }) => {
      unsupported.push(opaque(&feature));
      None
    },
    Err(err) => {
      unsupported.push(opaque(&err.to_string()));
      None
    },
  }
}

fn compile_params(arguments: &Arguments, unsupported: &mut Vec<SyntaxNode>) -> Vec<Param> {
  if arguments.vararg.is_some() || arguments.kwarg.is_some() {
    unsupported.push(opaque("variadic parameters"));
  }
  let mut params = vec![];
  for loc in arguments.posonlyargs.iter().chain(&arguments.args).chain(&arguments.kwonlyargs) {
    let ArgData { arg, annotation, .. } = &loc.node;
    let declared_type = annotation.as_deref().and_then(|ty| lowered(type_name(ty), unsupported));
    params.push(Param { name: arg.clone(), declared_type });
  }
  params
}

fn compile_definition(name: &str, args: &Arguments, returns: Option<&Expr>, body: &[Stmt]) -> FunctionDef {
  let mut unsupported = vec![];
  let params = compile_params(args, &mut unsupported);
  let returns = returns.and_then(|ty| lowered(type_name(ty), &mut unsupported));
  let (annotation, body) = split_docstring(body);
  let body = lowered(compile_block(body), &mut unsupported).unwrap_or_default();
  if !unsupported.is_empty() {
    debug!("`{name}` has {} construct(s) the frontend cannot lower", unsupported.len());
  }
  let body = unsupported.into_iter().chain(body).collect();
  FunctionDef { name: name.to_string(), params, returns, annotation, body }
}

/// Reads a type annotation. Python's generic containers get their Dafny names.
pub fn type_name(annotation: &Expr) -> FrontendResult<String> {
  match &annotation.node {
    ExprKind::Name { id, .. } => Ok(id.clone()),
    // forward references are taken verbatim
    ExprKind::Constant { value: Constant::Str(text), .. } => Ok(text.clone()),
    ExprKind::Subscript { value, slice, .. } => {
      let base = match type_name(value)?.as_str() {
        "list" | "List" => String::from("seq"),
        "dict" | "Dict" => String::from("map"),
        "set" | "Set" => String::from("set"),
        other => other.to_string(),
      };
      let args = match &slice.node {
        ExprKind::Tuple { elts, .. } => elts.iter().map(type_name).collect::<FrontendResult<Vec<String>>>()?,
        _ => vec![type_name(slice)?],
      };
      Ok(format!("{base}<{}>", args.join(", ")))
    },
    other => not_supported(&format!("type annotation of kind {}", expr_kind_name(other))),
  }
}

fn stmt_kind_name(stmt: &StmtKind) -> &'static str {
  match stmt {
    StmtKind::AsyncFunctionDef { .. } => "async function definition",
    StmtKind::ClassDef { .. } => "class definition",
    StmtKind::Delete { .. } => "delete statement",
    StmtKind::AnnAssign { .. } => "annotated assignment",
    StmtKind::AsyncFor { .. } => "async for-loop",
    StmtKind::With { .. } | StmtKind::AsyncWith { .. } => "with statement",
    StmtKind::Match { .. } => "match statement",
    StmtKind::Raise { .. } => "raise statement",
    StmtKind::Try { .. } => "try statement",
    StmtKind::Assert { .. } => "assert statement",
    StmtKind::Import { .. } | StmtKind::ImportFrom { .. } => "import",
    StmtKind::Global { .. } => "global statement",
    StmtKind::Nonlocal { .. } => "nonlocal statement",
    StmtKind::Break { .. } => "break",
    StmtKind::Continue { .. } => "continue",
    _ => "statement",
  }
}

fn expr_kind_name(expr: &ExprKind) -> &'static str {
  match expr {
    ExprKind::Call { .. } => "call",
    ExprKind::BinOp { .. } => "binary operation",
    ExprKind::Attribute { .. } => "attribute",
    ExprKind::Subscript { .. } => "subscript",
    ExprKind::List { .. } => "list",
    ExprKind::Tuple { .. } => "tuple",
    ExprKind::Dict { .. } => "dict",
    ExprKind::Set { .. } => "set",
    ExprKind::Lambda { .. } => "lambda",
    ExprKind::IfExp { .. } => "conditional expression",
    ExprKind::ListComp { .. } | ExprKind::SetComp { .. } | ExprKind::DictComp { .. } => "comprehension",
    ExprKind::GeneratorExp { .. } => "generator expression",
    ExprKind::NamedExpr { .. } => "named expression",
    ExprKind::Slice { .. } => "slice",
    ExprKind::JoinedStr { .. } | ExprKind::FormattedValue { .. } => "f-string",
    ExprKind::Starred { .. } => "starred expression",
    _ => "expression",
  }
}

impl Compile<Option<SyntaxNode>> for StmtKind {
  fn compile(&self) -> FrontendResult<Option<SyntaxNode>> {
    let node = match self {
      StmtKind::FunctionDef { name, args, body, returns, .. } => {
        SyntaxNode::FunctionDef(compile_definition(name, args, returns.as_deref(), body))
      },
      StmtKind::Return { value } => {
        let value = match value {
          Some(value) => Some(Box::new(value.compile()?)),
          None => None,
        };
        SyntaxNode::Return { value }
      },
      StmtKind::Assign { targets, value, .. } => match targets.as_slice() {
        [target] => SyntaxNode::assign(target.compile()?, value.compile()?),
        _ => opaque("multiple assignment targets"),
      },
      // `x += e` is `x = x + e`
      StmtKind::AugAssign { target, op, value } => {
        let target: SyntaxNode = target.compile()?;
        let value = SyntaxNode::binop(op.compile()?, target.clone(), value.compile()?);
        SyntaxNode::assign(target, value)
      },
      StmtKind::For { target, iter, body, .. } => {
        let target = Box::new(target.compile()?);
        let iter = Box::new(iter.compile()?);
        let body = compile_block(body)?;
        SyntaxNode::For { target, iter, body }
      },
      StmtKind::While { test, body, orelse } => {
        if orelse.is_empty() {
          let condition = Box::new(test.compile()?);
          let (annotation, body) = split_docstring(body);
          let body = compile_block(body)?;
          SyntaxNode::While { condition, annotation, body }
        } else {
          opaque("while-else")
        }
      },
      StmtKind::If { test, body, orelse } => {
        let condition = Box::new(test.compile()?);
        let body = compile_block(body)?;
        let orelse = compile_block(orelse)?;
        SyntaxNode::If { condition, body, orelse }
      },
      StmtKind::Expr { value } => match &value.node {
        ExprKind::Constant { value: Constant::Str(text), .. } => SyntaxNode::AnnotationLiteral { text: text.clone() },
        _ => SyntaxNode::Expression { value: Box::new(value.compile()?) },
      },
      StmtKind::Pass => return Ok(None),
      other => opaque(stmt_kind_name(other)),
    };
    Ok(Some(node))
  }
}

impl Compile<SyntaxNode> for Constant {
  fn compile(&self) -> FrontendResult<SyntaxNode> {
    let value = match self {
      Constant::Bool(boolean) => boolean.to_string(),
      Constant::Int(numb) => numb.to_string(),
      Constant::Float(numb) => match real_literal(*numb) {
        Some(value) => value,
        None => return Ok(opaque("non-finite float")),
      },
      Constant::Str(string) => string_literal(string),
      Constant::None => return Ok(opaque("None")),
      _ => return Ok(opaque("constant")),
    };
    Ok(SyntaxNode::Literal { value })
  }
}

/// Dafny reals are plain decimals: no exponent, always a fractional part.
fn real_literal(numb: f64) -> Option<String> {
  if !numb.is_finite() {
    return None;
  }
  let text = numb.to_string();
  Some(if text.contains('.') { text } else { format!("{text}.0") })
}

fn string_literal(text: &str) -> String {
  let mut out = String::from("\"");
  for chr in text.chars() {
    match chr {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\0' => out.push_str("\\0"),
      ' '..='~' => out.push(chr),
      other => out.push_str(&format!("\\U{{{:x}}}", other as u32)),
    }
  }
  out.push('"');
  out
}

impl Compile<BinOper> for Operator {
  fn compile(&self) -> FrontendResult<BinOper> {
    let op = match self {
      Operator::Add      => BinOper::Add,
      Operator::Sub      => BinOper::Sub,
      Operator::Mult     => BinOper::Mult,
      Operator::MatMult  => BinOper::MatMult,
      Operator::Div      => BinOper::Div,
      Operator::Mod      => BinOper::Mod,
      Operator::Pow      => BinOper::Pow,
      Operator::LShift   => BinOper::LShift,
      Operator::RShift   => BinOper::RShift,
      Operator::BitOr    => BinOper::BitOr,
      Operator::BitXor   => BinOper::BitXor,
      Operator::BitAnd   => BinOper::BitAnd,
      Operator::FloorDiv => BinOper::FloorDiv,
    };
    Ok(op)
  }
}

impl Compile<UnaryOper> for Unaryop {
  fn compile(&self) -> FrontendResult<UnaryOper> {
    let op = match self {
      Unaryop::Invert => UnaryOper::Invert,
      Unaryop::Not    => UnaryOper::Not,
      Unaryop::UAdd   => UnaryOper::UAdd,
      Unaryop::USub   => UnaryOper::USub,
    };
    Ok(op)
  }
}

impl Compile<BoolOper> for Boolop {
  fn compile(&self) -> FrontendResult<BoolOper> {
    let op = match self {
      Boolop::And => BoolOper::And,
      Boolop::Or  => BoolOper::Or,
    };
    Ok(op)
  }
}

impl Compile<CmpOper> for Cmpop {
  fn compile(&self) -> FrontendResult<CmpOper> {
    let op = match self {
      Cmpop::Eq    => CmpOper::Eq,
      Cmpop::NotEq => CmpOper::NotEq,
      Cmpop::Lt    => CmpOper::Lt,
      Cmpop::LtE   => CmpOper::LtE,
      Cmpop::Gt    => CmpOper::Gt,
      Cmpop::GtE   => CmpOper::GtE,
      Cmpop::Is    => CmpOper::Is,
      Cmpop::IsNot => CmpOper::IsNot,
      Cmpop::In    => CmpOper::In,
      Cmpop::NotIn => CmpOper::NotIn,
    };
    Ok(op)
  }
}

impl Compile<SyntaxNode> for ExprKind {
  fn compile(&self) -> FrontendResult<SyntaxNode> {
    match self {
      ExprKind::Name { id, .. } => Ok(SyntaxNode::Identifier { name: id.clone() }),
      ExprKind::Constant { value, .. } => value.compile(),
      ExprKind::BinOp { left, op, right } => {
        let left = Box::new(left.compile()?);
        let right = Box::new(right.compile()?);
        let op = op.compile()?;
        Ok(SyntaxNode::BinaryOp { op, left, right })
      },
      ExprKind::UnaryOp { op, operand } => {
        let operand = Box::new(operand.compile()?);
        let op = op.compile()?;
        Ok(SyntaxNode::UnaryOp { op, operand })
      },
      ExprKind::BoolOp { op, values } => {
        let operands = values.iter().map(|x| x.compile()).collect::<FrontendResult<Vec<SyntaxNode>>>()?;
        let op = op.compile()?;
        Ok(SyntaxNode::BoolOp { op, operands })
      },
      ExprKind::Compare { left, ops, comparators } => {
        let left = Box::new(left.compile()?);
        let ops = ops.iter().map(|x| x.compile()).collect::<FrontendResult<Vec<CmpOper>>>()?;
        let comparators = comparators.iter().map(|x| x.compile()).collect::<FrontendResult<Vec<SyntaxNode>>>()?;
        Ok(SyntaxNode::Compare { left, ops, comparators })
      },
      other => Ok(opaque(expr_kind_name(other))),
    }
  }
}
