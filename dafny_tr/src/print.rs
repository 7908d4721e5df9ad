/// Pads the string n characters to the right
pub fn ind(string: &str, n: usize) -> String {
  let pad = " ".repeat(n);
  format!("{pad}{string}")
}

/// Same as `ind`, but terminates the line.
pub fn line(string: &str, n: usize) -> String {
  let mut out = ind(string, n);
  out.push('\n');
  out
}

// Converts a slice to a string by applying some mapping to each element, joined by `sep`
pub fn vec_to_string<T>(elems: &[T], func: &dyn Fn(&T) -> String, sep: &str) -> String {
  elems.iter().map(func).collect::<Vec<String>>().join(sep)
}

/// Residual docstring text as Dafny line comments.
pub fn comment_lines(lines: &[String], n: usize) -> String {
  lines.iter().map(|text| line(&format!("// {text}"), n)).collect()
}
