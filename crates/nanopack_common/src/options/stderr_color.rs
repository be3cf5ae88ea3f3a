#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StderrColor {
  #[default]
  IfTerminal,
  Never,
  Always,
}
