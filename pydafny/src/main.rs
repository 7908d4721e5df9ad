use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use dafny_tr::{FailurePolicy, TranslatorOptions};
use log::info;

/// Translate annotated Python functions and methods into Dafny.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about=None)]
struct Arg {
  /// Python file to translate
  #[arg(short, long)]
  file: PathBuf,
  /// Write the Dafny output here instead of stdout
  #[arg(short, long)]
  output: Option<PathBuf>,
  /// Spaces per nesting level
  #[arg(long, default_value_t = 2)]
  indent: usize,
  /// Stop at the first definition that cannot be translated
  #[arg(long)]
  fail_fast: bool,
  /// Reject comparison chains such as `a < b < c`
  #[arg(long)]
  strict_comparisons: bool,
  /// More log output (-v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    _ => "debug",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
  let args = Arg::parse();
  init_logger(args.verbose);

  let policy = if args.fail_fast { FailurePolicy::FailFast } else { FailurePolicy::BestEffort };
  let options = TranslatorOptions::default()
    .with_indent_width(args.indent)
    .with_failure_policy(policy)
    .with_strict_comparisons(args.strict_comparisons);

  let path = args.file.display().to_string();
  let code = fs::read_to_string(&args.file).with_context(|| format!("could not read {path}"))?;
  let translation = pydafny::translate_with(&code, &path, options)?;

  match &args.output {
    Some(output) => {
      fs::write(output, &translation.source).with_context(|| format!("could not write {}", output.display()))?;
      info!("wrote {}", output.display());
    },
    None => print!("{}", translation.source),
  }

  for failure in &translation.failures {
    eprintln!("error: {failure}");
  }
  if !translation.is_complete() {
    bail!("{} definition(s) could not be translated", translation.failures.len());
  }
  Ok(())
}
