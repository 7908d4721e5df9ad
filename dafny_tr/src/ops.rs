//! Operator tables: source operator tags to Dafny symbols.
//!
//! A tag without a Dafny counterpart is a lookup failure, never an empty
//! symbol.

use crate::error::{TrResult, TranslateError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolOper {
  And, Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOper {
  Add, Sub, Mult, Div,
  Mod, Pow, LShift, RShift,
  BitOr, BitXor, BitAnd, FloorDiv,
  MatMult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOper {
  Invert, Not, UAdd, USub,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOper {
  Eq, NotEq, Lt, LtE,
  Gt, GtE, Is, IsNot,
  In, NotIn,
}

fn unmapped<A>(tag: &str) -> TrResult<A> {
  Err(TranslateError::UnmappedOperator { tag: tag.into() })
}

impl BoolOper {
  pub fn tag(self) -> &'static str {
    match self {
      BoolOper::And => "And",
      BoolOper::Or  => "Or",
    }
  }

  pub fn symbol(self) -> TrResult<&'static str> {
    match self {
      BoolOper::And => Ok("&&"),
      BoolOper::Or  => Ok("||"),
    }
  }
}

impl BinOper {
  pub const ALL: [BinOper; 13] = [
    BinOper::Add, BinOper::Sub, BinOper::Mult, BinOper::Div,
    BinOper::Mod, BinOper::Pow, BinOper::LShift, BinOper::RShift,
    BinOper::BitOr, BinOper::BitXor, BinOper::BitAnd, BinOper::FloorDiv,
    BinOper::MatMult,
  ];

  pub fn tag(self) -> &'static str {
    match self {
      BinOper::Add      => "Add",
      BinOper::Sub      => "Sub",
      BinOper::Mult     => "Mult",
      BinOper::Div      => "Div",
      BinOper::Mod      => "Mod",
      BinOper::Pow      => "Pow",
      BinOper::LShift   => "LShift",
      BinOper::RShift   => "RShift",
      BinOper::BitOr    => "BitOr",
      BinOper::BitXor   => "BitXor",
      BinOper::BitAnd   => "BitAnd",
      BinOper::FloorDiv => "FloorDiv",
      BinOper::MatMult  => "MatMult",
    }
  }

  pub fn symbol(self) -> TrResult<&'static str> {
    match self {
      BinOper::Add    => Ok("+"),
      BinOper::Sub    => Ok("-"),
      BinOper::Mult   => Ok("*"),
      BinOper::Div    => Ok("/"),
      BinOper::Mod    => Ok("%"),
      BinOper::Pow    => Ok("^"),
      BinOper::LShift => Ok("<<"),
      BinOper::RShift => Ok(">>"),
      op => unmapped(op.tag()),
    }
  }

  /// Binding strength, higher binds tighter.
  pub fn precedence(self) -> u8 {
    match self {
      BinOper::LShift | BinOper::RShift => 4,
      BinOper::Add | BinOper::Sub => 5,
      BinOper::Pow => 7,
      _ => 6,
    }
  }
}

impl UnaryOper {
  pub fn tag(self) -> &'static str {
    match self {
      UnaryOper::Invert => "Invert",
      UnaryOper::Not    => "Not",
      UnaryOper::UAdd   => "UAdd",
      UnaryOper::USub   => "USub",
    }
  }

  // None of these has been given a Dafny spelling yet.
  pub fn symbol(self) -> TrResult<&'static str> {
    unmapped(self.tag())
  }
}

impl CmpOper {
  pub const ALL: [CmpOper; 10] = [
    CmpOper::Eq, CmpOper::NotEq, CmpOper::Lt, CmpOper::LtE,
    CmpOper::Gt, CmpOper::GtE, CmpOper::Is, CmpOper::IsNot,
    CmpOper::In, CmpOper::NotIn,
  ];

  pub fn tag(self) -> &'static str {
    match self {
      CmpOper::Eq    => "Eq",
      CmpOper::NotEq => "NotEq",
      CmpOper::Lt    => "Lt",
      CmpOper::LtE   => "LtE",
      CmpOper::Gt    => "Gt",
      CmpOper::GtE   => "GtE",
      CmpOper::Is    => "Is",
      CmpOper::IsNot => "IsNot",
      CmpOper::In    => "In",
      CmpOper::NotIn => "NotIn",
    }
  }

  pub fn symbol(self) -> TrResult<&'static str> {
    match self {
      CmpOper::Eq    => Ok("=="),
      CmpOper::NotEq => Ok("!="),
      CmpOper::Lt    => Ok("<"),
      CmpOper::LtE   => Ok("<="),
      CmpOper::Gt    => Ok(">"),
      CmpOper::GtE   => Ok(">="),
      op => unmapped(op.tag()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;
  use pretty_assertions::assert_eq;

  #[test]
  fn bool_table() {
    assert_eq!(BoolOper::And.symbol(), Ok("&&"));
    assert_eq!(BoolOper::Or.symbol(), Ok("||"));
  }

  #[test]
  fn binary_table_maps_arithmetic_and_shifts() {
    let mapped: Vec<(&str, &str)> = BinOper::ALL
      .iter()
      .filter_map(|op| op.symbol().ok().map(|sym| (op.tag(), sym)))
      .collect();
    assert_eq!(mapped, vec![
      ("Add", "+"), ("Sub", "-"), ("Mult", "*"), ("Div", "/"),
      ("Mod", "%"), ("Pow", "^"), ("LShift", "<<"), ("RShift", ">>"),
    ]);
  }

  #[test]
  fn bitwise_and_floor_division_are_unmapped() {
    for op in [BinOper::BitOr, BinOper::BitXor, BinOper::BitAnd, BinOper::FloorDiv] {
      let err = op.symbol().unwrap_err();
      assert_eq!(err.kind(), ErrorKind::UnmappedOperator);
      assert_eq!(err, TranslateError::UnmappedOperator { tag: op.tag().into() });
    }
  }

  #[test]
  fn every_unary_operator_is_unmapped() {
    for op in [UnaryOper::Invert, UnaryOper::Not, UnaryOper::UAdd, UnaryOper::USub] {
      assert_eq!(op.symbol(), Err(TranslateError::UnmappedOperator { tag: op.tag().into() }));
    }
  }

  #[test]
  fn comparison_table() {
    let mapped: Vec<&str> = CmpOper::ALL.iter().filter_map(|op| op.symbol().ok()).collect();
    assert_eq!(mapped, vec!["==", "!=", "<", "<=", ">", ">="]);
    for op in [CmpOper::Is, CmpOper::IsNot, CmpOper::In, CmpOper::NotIn] {
      assert!(op.symbol().is_err(), "{} should be unmapped", op.tag());
    }
  }
}
