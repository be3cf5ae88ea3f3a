mod engine;
mod options;

pub use crate::engine::{
  AnalyzeMetafileOptions, BuildResult, Engine, Message, RebuildObserver, ServeHandle,
  TransformResult,
};

pub use crate::options::{
  BuildOptions, TransformOptions, charset::Charset, engine_constraint::EngineConstraint,
  engine_constraint::EngineName, entry_point::EntryPoint, es_target::ESTarget,
  jsx_mode::JsxMode, legal_comments::LegalComments, loader::Loader, log_level::LogLevel,
  output_format::OutputFormat, platform::Platform, serve_options::OnRequestArgs,
  serve_options::OnRequestCallback, serve_options::ServeOptions, source_map::SourceMap,
  sources_content::SourcesContent, stderr_color::StderrColor, stdin_options::StdinOptions,
  tree_shaking::TreeShaking,
};
