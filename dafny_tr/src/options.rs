/// What the driver does when one definition cannot be translated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
  /// Skip the definition, record the failure and keep going.
  #[default]
  BestEffort,
  /// Stop at the first failing definition.
  FailFast,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatorOptions {
  /// Spaces per nesting level.
  pub indent_width: usize,
  pub failure_policy: FailurePolicy,
  /// Reject comparison chains (`a < b < c`) instead of keeping the first link.
  pub strict_comparisons: bool,
}

impl Default for TranslatorOptions {
  fn default() -> Self {
    TranslatorOptions { indent_width: 2, failure_policy: FailurePolicy::BestEffort, strict_comparisons: false }
  }
}

impl TranslatorOptions {
  pub fn with_indent_width(mut self, indent_width: usize) -> Self {
    self.indent_width = indent_width;
    self
  }

  pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
    self.failure_policy = failure_policy;
    self
  }

  pub fn with_strict_comparisons(mut self, strict: bool) -> Self {
    self.strict_comparisons = strict;
    self
  }
}
