#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  #[default]
  Browser,
  Node,
  Neutral,
}
