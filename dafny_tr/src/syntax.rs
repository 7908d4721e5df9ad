use crate::ops::{BinOper, BoolOper, CmpOper, UnaryOper};

pub type Id = String;

/// The source tree handed to the translator by a frontend.
///
/// `For`, `Expression` and `Opaque` exist so that a frontend can describe
/// constructs the translator must reject (or drop) instead of hiding them.
#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNode {
  Module {
    defs: Vec<SyntaxNode>,
  },
  FunctionDef(FunctionDef),
  While {
    condition: Box<SyntaxNode>,
    annotation: Option<String>,
    body: Vec<SyntaxNode>,
  },
  If {
    condition: Box<SyntaxNode>,
    body: Vec<SyntaxNode>,
    orelse: Vec<SyntaxNode>,
  },
  For {
    target: Box<SyntaxNode>,
    iter: Box<SyntaxNode>,
    body: Vec<SyntaxNode>,
  },
  Assign {
    target: Box<SyntaxNode>,
    value: Box<SyntaxNode>,
  },
  Return {
    value: Option<Box<SyntaxNode>>,
  },
  Expression {
    value: Box<SyntaxNode>,
  },
  AnnotationLiteral {
    text: String,
  },
  BinaryOp {
    op: BinOper,
    left: Box<SyntaxNode>,
    right: Box<SyntaxNode>,
  },
  UnaryOp {
    op: UnaryOper,
    operand: Box<SyntaxNode>,
  },
  BoolOp {
    op: BoolOper,
    operands: Vec<SyntaxNode>,
  },
  Compare {
    left: Box<SyntaxNode>,
    ops: Vec<CmpOper>,
    comparators: Vec<SyntaxNode>,
  },
  Identifier {
    name: Id,
  },
  Literal {
    value: String,
  },
  Opaque {
    kind: String,
  },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
  pub name: Id,
  pub params: Vec<Param>,
  pub returns: Option<String>,
  pub annotation: Option<String>,
  pub body: Vec<SyntaxNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
  pub name: Id,
  pub declared_type: Option<String>,
}

impl Param {
  pub fn new(name: &str, declared_type: &str) -> Self {
    Param { name: name.into(), declared_type: Some(declared_type.into()) }
  }

  pub fn untyped(name: &str) -> Self {
    Param { name: name.into(), declared_type: None }
  }
}

impl SyntaxNode {
  /// Human readable node kind, used in error messages.
  pub fn kind(&self) -> &str {
    match self {
      SyntaxNode::Module { .. } => "module",
      SyntaxNode::FunctionDef(_) => "function definition",
      SyntaxNode::While { .. } => "while-loop",
      SyntaxNode::If { .. } => "if statement",
      SyntaxNode::For { .. } => "for-loop",
      SyntaxNode::Assign { .. } => "assignment",
      SyntaxNode::Return { .. } => "return",
      SyntaxNode::Expression { .. } => "expression statement",
      SyntaxNode::AnnotationLiteral { .. } => "annotation literal",
      SyntaxNode::BinaryOp { .. } => "binary operation",
      SyntaxNode::UnaryOp { .. } => "unary operation",
      SyntaxNode::BoolOp { .. } => "boolean operation",
      SyntaxNode::Compare { .. } => "comparison",
      SyntaxNode::Identifier { .. } => "identifier",
      SyntaxNode::Literal { .. } => "literal",
      SyntaxNode::Opaque { kind } => kind,
    }
  }

  // Shorthands for building trees by hand.

  pub fn ident(name: &str) -> Self {
    SyntaxNode::Identifier { name: name.into() }
  }

  pub fn lit(value: &str) -> Self {
    SyntaxNode::Literal { value: value.into() }
  }

  pub fn binop(op: BinOper, left: SyntaxNode, right: SyntaxNode) -> Self {
    SyntaxNode::BinaryOp { op, left: Box::new(left), right: Box::new(right) }
  }

  pub fn boolop(op: BoolOper, operands: Vec<SyntaxNode>) -> Self {
    SyntaxNode::BoolOp { op, operands }
  }

  pub fn compare(left: SyntaxNode, op: CmpOper, right: SyntaxNode) -> Self {
    SyntaxNode::Compare { left: Box::new(left), ops: vec![op], comparators: vec![right] }
  }

  pub fn assign(target: SyntaxNode, value: SyntaxNode) -> Self {
    SyntaxNode::Assign { target: Box::new(target), value: Box::new(value) }
  }

  pub fn ret(value: SyntaxNode) -> Self {
    SyntaxNode::Return { value: Some(Box::new(value)) }
  }

  pub fn annotation(text: &str) -> Self {
    SyntaxNode::AnnotationLiteral { text: text.into() }
  }
}
