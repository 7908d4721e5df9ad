use dafny_tr::ops::{BinOper, BoolOper, CmpOper};
use dafny_tr::{
  translate_module, ErrorKind, FailurePolicy, FunctionDef, Param, SyntaxNode as N, TranslateError, Translator,
  TranslatorOptions,
};
use pretty_assertions::assert_eq;

fn def(name: &str, params: Vec<Param>, returns: Option<&str>, annotation: &str, body: Vec<N>) -> N {
  N::FunctionDef(FunctionDef {
    name: name.into(),
    params,
    returns: returns.map(String::from),
    annotation: Some(annotation.into()),
    body,
  })
}

fn identity() -> N {
  def(
    "function_identity",
    vec![Param::new("x", "int")],
    Some("int"),
    "pre: x > 0\npost: result == x",
    vec![N::ret(N::ident("x"))],
  )
}

fn swap() -> N {
  def(
    "method_swap",
    vec![Param::new("a", "int"), Param::new("b", "int")],
    None,
    "Swaps two integers.\nvar: x: int, y: int\nmod: a",
    vec![N::assign(N::ident("x"), N::ident("b")), N::assign(N::ident("y"), N::ident("a"))],
  )
}

fn broken() -> N {
  def(
    "method_broken",
    vec![Param::new("xs", "seq<int>")],
    None,
    "",
    vec![N::For { target: Box::new(N::ident("x")), iter: Box::new(N::ident("xs")), body: vec![] }],
  )
}

const IDENTITY: &str = "\
function Functionidentity(x: int): int
  requires x > 0;
  ensures result == x;
{
  result := x;
}
";

const SWAP: &str = "\
// Swaps two integers.
method Methodswap(a: int, b: int) returns (x: int, y: int)
  modifies a;
{
  b := x;
  a := y;
}
";

#[test]
fn definitions_keep_source_order() {
  let module = N::Module { defs: vec![identity(), swap()] };
  let translation = translate_module(&module).unwrap();
  assert!(translation.is_complete());
  assert_eq!(translation.source, format!("{IDENTITY}\n{SWAP}"));
}

#[test]
fn non_definitions_at_top_level_are_ignored() {
  let module = N::Module {
    defs: vec![
      N::annotation("module docstring"),
      N::Opaque { kind: "import".into() },
      identity(),
    ],
  };
  assert_eq!(translate_module(&module).unwrap().source, IDENTITY);
}

#[test]
fn best_effort_skips_and_records_failures() {
  let module = N::Module { defs: vec![identity(), broken(), swap()] };
  let translation = translate_module(&module).unwrap();
  assert_eq!(translation.source, format!("{IDENTITY}\n{SWAP}"));
  assert_eq!(translation.failures, vec![TranslateError::Definition {
    name: "method_broken".into(),
    source: Box::new(TranslateError::unsupported("for-loop")),
  }]);
  assert_eq!(translation.failures[0].kind(), ErrorKind::UnsupportedConstruct);
}

#[test]
fn fail_fast_stops_at_first_failure() {
  let module = N::Module { defs: vec![identity(), broken(), swap()] };
  let options = TranslatorOptions::default().with_failure_policy(FailurePolicy::FailFast);
  let err = Translator::new(options).translate_module(&module).unwrap_err();
  assert_eq!(err.to_string(), "in definition `method_broken`: unsupported construct: for-loop");
}

#[test]
fn top_level_must_be_a_module() {
  let err = translate_module(&identity()).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
}

#[test]
fn wider_indentation() {
  let options = TranslatorOptions::default().with_indent_width(4);
  let translation = Translator::new(options).translate_module(&N::Module { defs: vec![identity()] }).unwrap();
  assert_eq!(translation.source, IDENTITY.replace("  ", "    "));
}

#[test]
fn loop_in_method() {
  let body = vec![
    N::assign(N::ident("i"), N::lit("0")),
    N::While {
      condition: Box::new(N::compare(N::ident("i"), CmpOper::Lt, N::ident("n"))),
      annotation: Some("inv: i <= n\ndec: n - i".into()),
      body: vec![
        N::If {
          condition: Box::new(N::boolop(BoolOper::And, vec![
            N::compare(N::ident("i"), CmpOper::Gt, N::lit("0")),
            N::compare(N::ident("i"), CmpOper::NotEq, N::ident("n")),
          ])),
          body: vec![N::assign(N::ident("s"), N::binop(BinOper::Add, N::ident("s"), N::ident("i")))],
          orelse: vec![],
        },
        N::assign(N::ident("i"), N::binop(BinOper::Add, N::ident("i"), N::lit("1"))),
      ],
    },
    N::ret(N::ident("s")),
  ];
  let module = N::Module {
    defs: vec![def("sum_method", vec![Param::new("n", "int")], None, "var: s: int\npre: n >= 0", body)],
  };
  let expected = "\
method Summethod(n: int) returns (s: int)
  requires n >= 0;
{
  0 := i;
  while i < n
    invariant i <= n;
    decreases n - i;
  {
    if i > 0&&i != n {
      s+i := s;
    }
    i+1 := i;
  }
  s := s;
}
";
  assert_eq!(translate_module(&module).unwrap().source, expected);
}
