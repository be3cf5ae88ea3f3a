#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  /// Treated as `Info` by the stderr logger.
  #[default]
  Default,
  Verbose,
  Debug,
  Info,
  Warning,
  Error,
  Silent,
}

impl LogLevel {
  /// Whether informational output (serve request lines, bound addresses)
  /// should be shown at this level.
  pub fn shows_info(self) -> bool {
    matches!(self, Self::Default | Self::Verbose | Self::Debug | Self::Info)
  }
}
