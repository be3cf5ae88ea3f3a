pub mod charset;
pub mod engine_constraint;
pub mod entry_point;
pub mod es_target;
pub mod jsx_mode;
pub mod legal_comments;
pub mod loader;
pub mod log_level;
pub mod output_format;
pub mod platform;
pub mod serve_options;
pub mod source_map;
pub mod sources_content;
pub mod stderr_color;
pub mod stdin_options;
pub mod tree_shaking;

use rustc_hash::FxHashMap;

use crate::options::{
  charset::Charset, engine_constraint::EngineConstraint, entry_point::EntryPoint,
  es_target::ESTarget, jsx_mode::JsxMode, legal_comments::LegalComments, loader::Loader,
  log_level::LogLevel, output_format::OutputFormat, platform::Platform, source_map::SourceMap,
  sources_content::SourcesContent, stdin_options::StdinOptions, stderr_color::StderrColor,
  tree_shaking::TreeShaking,
};

/// Everything a build accepts. Map-valued fields have unique keys with
/// last-assignment-wins semantics; list-valued fields are append-only and
/// keep their first-seen order, duplicates included.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildOptions {
  // --- Logging
  pub color: StderrColor,
  pub log_limit: usize,
  pub log_level: LogLevel,

  // --- Shared with transforms
  pub sourcemap: SourceMap,
  pub source_root: Option<String>,
  pub sources_content: SourcesContent,
  pub target: ESTarget,
  pub engines: Vec<EngineConstraint>,
  pub minify_whitespace: bool,
  pub minify_identifiers: bool,
  pub minify_syntax: bool,
  pub charset: Charset,
  pub tree_shaking: TreeShaking,
  pub ignore_annotations: bool,
  pub legal_comments: LegalComments,
  pub jsx_mode: JsxMode,
  pub jsx_factory: Option<String>,
  pub jsx_fragment: Option<String>,
  pub define: FxHashMap<String, String>,
  pub pure: Vec<String>,
  pub keep_names: bool,
  pub global_name: Option<String>,

  // --- Input
  pub entry_points: Vec<String>,
  pub entry_points_advanced: Vec<EntryPoint>,
  pub stdin: Option<StdinOptions>,
  pub node_paths: Vec<String>,

  // --- Output
  pub bundle: bool,
  pub splitting: bool,
  pub preserve_symlinks: bool,
  pub allow_overwrite: bool,
  pub watch: bool,
  pub write: bool,
  pub metafile: bool,
  pub outfile: Option<String>,
  pub outdir: Option<String>,
  pub outbase: Option<String>,
  pub entry_names: Option<String>,
  pub chunk_names: Option<String>,
  pub asset_names: Option<String>,
  pub out_extensions: FxHashMap<String, String>,
  pub public_path: Option<String>,
  pub platform: Platform,
  pub format: OutputFormat,
  pub banner: FxHashMap<String, String>,
  pub footer: FxHashMap<String, String>,

  // --- Resolve
  pub external: Vec<String>,
  pub inject: Vec<String>,
  pub loader: FxHashMap<String, Loader>,
  pub resolve_extensions: Vec<String>,
  pub main_fields: Vec<String>,
  pub conditions: Vec<String>,
  pub tsconfig: Option<String>,
}

/// The strictly smaller option set for single-shot stdin-to-stdout
/// transforms: no entry points, no output paths, no resolution knobs.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransformOptions {
  // --- Logging
  pub color: StderrColor,
  pub log_limit: usize,
  pub log_level: LogLevel,

  // --- Transform
  pub sourcemap: SourceMap,
  pub source_root: Option<String>,
  pub sources_content: SourcesContent,
  pub target: ESTarget,
  pub engines: Vec<EngineConstraint>,
  pub format: OutputFormat,
  pub global_name: Option<String>,
  pub minify_whitespace: bool,
  pub minify_identifiers: bool,
  pub minify_syntax: bool,
  pub charset: Charset,
  pub tree_shaking: TreeShaking,
  pub ignore_annotations: bool,
  pub legal_comments: LegalComments,
  pub jsx_mode: JsxMode,
  pub jsx_factory: Option<String>,
  pub jsx_fragment: Option<String>,
  pub tsconfig_raw: Option<String>,
  pub banner: Option<String>,
  pub footer: Option<String>,
  pub define: FxHashMap<String, String>,
  pub pure: Vec<String>,
  pub keep_names: bool,

  // --- Input
  pub sourcefile: Option<String>,
  pub loader: Loader,
}
