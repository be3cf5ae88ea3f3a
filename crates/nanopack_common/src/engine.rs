use std::sync::Arc;

use crate::{BuildOptions, ServeOptions, TransformOptions};

/// One diagnostic reported by the engine. The engine renders its own
/// diagnostics to stderr; the CLI only counts them to pick the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
  pub text: String,
}

#[derive(Debug, Default, Clone)]
pub struct BuildResult {
  pub errors: Vec<Message>,
  pub warnings: Vec<Message>,
  /// JSON build-graph report. Empty when the build did not produce one,
  /// e.g. because it failed or `metafile` was off.
  pub metafile: String,
}

#[derive(Debug, Default, Clone)]
pub struct TransformResult {
  pub code: Vec<u8>,
  pub map: Vec<u8>,
  pub errors: Vec<Message>,
  pub warnings: Vec<Message>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyzeMetafileOptions {
  pub color: bool,
  pub verbose: bool,
}

/// Registered for watch-mode builds; the engine calls it after every rebuild
/// from its own scheduling context, in no particular order relative to other
/// engine activity.
pub trait RebuildObserver: Send + Sync {
  fn on_rebuild(&self, result: &BuildResult);
}

/// A running development server. `wait` blocks until the server terminates.
pub trait ServeHandle {
  fn host(&self) -> &str;
  fn port(&self) -> u16;
  fn wait(self: Box<Self>) -> anyhow::Result<()>;
}

/// The build engine boundary. The CLI assembles fully-validated option
/// structures and hands them over; it never passes a partially-applied or
/// known-invalid configuration across this line.
pub trait Engine {
  fn build(
    &self,
    options: BuildOptions,
    on_rebuild: Option<Arc<dyn RebuildObserver>>,
  ) -> BuildResult;

  fn transform(&self, input: String, options: TransformOptions) -> TransformResult;

  fn serve(
    &self,
    serve_options: ServeOptions,
    build_options: BuildOptions,
  ) -> anyhow::Result<Box<dyn ServeHandle>>;

  /// Render a human-readable size breakdown from a metafile's JSON.
  fn analyze_metafile(&self, metafile: &str, options: AnalyzeMetafileOptions) -> String;
}
