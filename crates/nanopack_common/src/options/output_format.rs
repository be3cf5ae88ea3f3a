#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  /// Let the engine pick based on the other options.
  #[default]
  Default,
  Iife,
  Cjs,
  Esm,
}
