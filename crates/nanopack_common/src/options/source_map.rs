#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SourceMap {
  #[default]
  None,
  /// A companion `.map` file plus a `sourceMappingURL` comment pointing at it.
  Linked,
  /// The whole map inlined into the output as a data URL.
  Inline,
  /// A companion `.map` file with no comment in the output.
  External,
  /// Both the inline form and the companion file.
  InlineAndExternal,
}
