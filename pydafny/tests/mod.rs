use std::fs;
use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn golden_test(path: &Path, run: &dyn Fn(&Path) -> String) {
  let result = run(path);

  let golden_path = path.with_extension("golden");
  if let Ok(to_check) = fs::read_to_string(&golden_path) {
    assert_eq!(result, to_check, "Testing file '{}'", path.display());
  } else {
    let mut file = fs::File::create(&golden_path)
      .unwrap_or_else(|err| panic!("could not create '{}': {err}", golden_path.display()));
    file
      .write_all(result.as_bytes())
      .unwrap_or_else(|err| panic!("could not write '{}': {err}", golden_path.display()));
  }
}

fn golden_test_dir(root: &Path, ext: &str, run: &dyn Fn(&Path) -> String) {
  for entry in WalkDir::new(root).follow_links(true) {
    let entry = entry.unwrap_or_else(|err| panic!("could not walk '{}': {err}", root.display()));
    let path = entry.path();
    if path.is_file() && path.extension().map(|x| x == ext).unwrap_or(false) {
      golden_test(path, run)
    }
  }
}

#[test]
fn test_translate() {
  let run = |path: &Path| {
    let input = fs::read_to_string(path).unwrap_or_else(|err| panic!("could not read '{}': {err}", path.display()));
    match pydafny::translate(&input) {
      Ok(translation) => {
        let mut out = translation.source;
        if !translation.failures.is_empty() {
          out.push('\n');
          for failure in &translation.failures {
            out.push_str(&format!("error: {failure}\n"));
          }
        }
        out
      }
      Err(err) => err.to_string(),
    }
  };
  golden_test_dir(Path::new("./tests/translate"), "py", &run);
}
