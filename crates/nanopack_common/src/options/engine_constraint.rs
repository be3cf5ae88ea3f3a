#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineName {
  Chrome,
  Edge,
  Firefox,
  Ios,
  Node,
  Safari,
}

/// A named runtime paired with a minimum version, e.g. `chrome80`. Multiple
/// constraints for the same engine are all retained in first-seen order;
/// precedence between duplicates is left to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConstraint {
  pub name: EngineName,
  pub version: String,
}
