use pyo3::exceptions::PyException;
use pyo3::prelude::*;

pyo3::create_exception!(pydafny, TranslationError, PyException);

/// Translates Python source to Dafny; raises `TranslationError` if any
/// definition could not be translated.
#[pyfunction]
pub fn translate(code: &str) -> PyResult<String> {
  let translation = crate::translate(code).map_err(|err| TranslationError::new_err(err.to_string()))?;
  if !translation.is_complete() {
    let failures = translation.failures.iter().map(ToString::to_string).collect::<Vec<String>>();
    return Err(TranslationError::new_err(failures.join("\n")));
  }
  Ok(translation.source)
}

#[pymodule]
fn pydafny(py: Python, m: &PyModule) -> PyResult<()> {
  m.add_function(pyo3::wrap_pyfunction!(translate, m)?)?;
  m.add("TranslationError", py.get_type::<TranslationError>())?;
  Ok(())
}
