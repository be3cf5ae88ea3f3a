//! The single-pass option binder: one left-to-right walk over the argument
//! list, writing into whichever option struct the mode decision selected.

use nanopack_common::{
  BuildOptions, Charset, EntryPoint, JsxMode, LegalComments, Loader, LogLevel, OutputFormat,
  Platform, SourceMap, SourcesContent, StderrColor, StdinOptions, TransformOptions, TreeShaking,
};
use nanopack_error::{FlagError, FlagResult};

use crate::hints::note_for_unrecognized_flag;
use crate::targets::parse_targets;

/// Whether this invocation produces output files from entry points (build)
/// or rewrites standard input in memory (transform). Decided by one pre-scan
/// over the raw arguments, before any flag is bound, and fixed thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Build,
  Transform,
}

/// Build if anything looks like an entry-point path or bundling was
/// requested, otherwise transform. The scan stops at the first qualifying
/// argument and validates nothing.
pub fn select_mode(os_args: &[String]) -> Mode {
  for arg in os_args {
    if !arg.starts_with('-') || arg == "--bundle" {
      return Mode::Build;
    }
  }
  Mode::Transform
}

/// The CLI's own pass (`Internal`) accepts `--metafile=path` and handles the
/// write-out itself; embedders parsing user-supplied argument lists
/// (`External`) get the bare `--metafile` toggle instead and receive the
/// JSON in the build result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseKind {
  Internal,
  External,
}

/// The mode-selected destination for the pass. Shared flags write through
/// this so the per-flag code never has to ask which mode is active.
pub(crate) enum OptionsTarget<'a> {
  Build(&'a mut BuildOptions),
  Transform(&'a mut TransformOptions),
}

impl OptionsTarget<'_> {
  fn is_build(&self) -> bool {
    matches!(self, OptionsTarget::Build(_))
  }
}

/// Write a field that exists on both option structs, whichever one is
/// selected for this invocation.
macro_rules! set_shared {
  ($target:expr, $field:ident = $value:expr) => {
    match $target {
      OptionsTarget::Build(options) => options.$field = $value,
      OptionsTarget::Transform(options) => options.$field = $value,
    }
  };
}

fn invalid_value(value: &str, arg: &str, note: &str) -> FlagError {
  FlagError::with_note(format!("Invalid value {value:?} in {arg:?}"), note)
}

fn missing_equals(arg: &str, note: &str) -> FlagError {
  FlagError::with_note(format!("Missing \"=\" in {arg:?}"), note)
}

/// `""` splits to no tokens rather than one empty token.
pub(crate) fn split_with_empty_check(text: &str, separator: char) -> Vec<String> {
  if text.is_empty() {
    Vec::new()
  } else {
    text.split(separator).map(ToString::to_string).collect()
  }
}

pub(crate) fn parse_loader(text: &str) -> FlagResult<Loader> {
  Ok(match text {
    "js" => Loader::Js,
    "jsx" => Loader::Jsx,
    "ts" => Loader::Ts,
    "tsx" => Loader::Tsx,
    "css" => Loader::Css,
    "json" => Loader::Json,
    "text" => Loader::Text,
    "base64" => Loader::Base64,
    "dataurl" => Loader::DataUrl,
    "file" => Loader::File,
    "binary" => Loader::Binary,
    _ => {
      return Err(FlagError::with_note(
        format!("Invalid loader: {text:?}"),
        "Valid values are \"js\", \"jsx\", \"ts\", \"tsx\", \"css\", \"json\", \"text\", \
         \"base64\", \"dataurl\", \"file\", or \"binary\".",
      ));
    }
  })
}

#[derive(Default)]
struct BindState {
  /// True while the most recently seen sourcemap flag was the bare
  /// `--sourcemap`; a later `--sourcemap=mode` clears it.
  has_bare_sourcemap_flag: bool,
  metafile: Option<String>,
}

/// Bind every argument into `target`, left to right, stopping at the first
/// invalid flag. Returns the metafile write-out path when one was given.
pub(crate) fn parse_options_impl(
  os_args: &[String],
  target: &mut OptionsTarget<'_>,
  kind: ParseKind,
) -> FlagResult<Option<String>> {
  let mut state = BindState::default();
  for arg in os_args {
    bind_arg(arg, target, kind, &mut state)?;
  }

  // If we are building, the last source map flag was the bare `--sourcemap`,
  // and there is no output path, switch the source map to inline: the single
  // combined stdout stream cannot carry a companion map file.
  if let OptionsTarget::Build(options) = target {
    if state.has_bare_sourcemap_flag && options.outfile.is_none() && options.outdir.is_none() {
      options.sourcemap = SourceMap::Inline;
    }
  }

  Ok(state.metafile)
}

fn bind_arg(
  arg: &str,
  target: &mut OptionsTarget<'_>,
  kind: ParseKind,
  state: &mut BindState,
) -> FlagResult<()> {
  if bind_build_only(arg, target, kind, state)?
    || bind_shared(arg, target, state)?
    || bind_transform_only(arg, target)?
  {
    return Ok(());
  }

  // A stray shell quote would otherwise be taken for an entry point below.
  if arg.starts_with("'--") {
    return Err(FlagError::with_note(
      format!("Unexpected single quote character before flag: {arg}"),
      "This typically happens when attempting to use single quotes to quote arguments with a \
       shell that doesn't recognize single quotes. Try using double quote characters to quote \
       arguments instead.",
    ));
  }

  if !arg.starts_with('-') {
    if let OptionsTarget::Build(options) = target {
      match arg.split_once('=') {
        Some((output_path, input_path)) => options.entry_points_advanced.push(EntryPoint {
          output_path: output_path.to_string(),
          input_path: input_path.to_string(),
        }),
        None => options.entry_points.push(arg.to_string()),
      }
      return Ok(());
    }
  }

  let text = if target.is_build() {
    format!("Invalid build flag: {arg:?}")
  } else {
    format!("Invalid transform flag: {arg:?}")
  };
  Err(match note_for_unrecognized_flag(arg) {
    Some(note) => FlagError::with_note(text, note),
    None => FlagError::new(text),
  })
}

/// Flags that only exist in build mode. In transform mode every one of these
/// falls through to the unrecognized-flag path.
fn bind_build_only(
  arg: &str,
  target: &mut OptionsTarget<'_>,
  kind: ParseKind,
  state: &mut BindState,
) -> FlagResult<bool> {
  let OptionsTarget::Build(options) = target else { return Ok(false) };

  if arg == "--bundle" {
    options.bundle = true;
  } else if arg == "--preserve-symlinks" {
    options.preserve_symlinks = true;
  } else if arg == "--splitting" {
    options.splitting = true;
  } else if arg == "--allow-overwrite" {
    options.allow_overwrite = true;
  } else if arg == "--watch" {
    options.watch = true;
  } else if arg == "--metafile" && kind == ParseKind::External {
    options.metafile = true;
  } else if let Some(path) = arg.strip_prefix("--metafile=") {
    if kind != ParseKind::Internal {
      return Ok(false);
    }
    options.metafile = true;
    state.metafile = Some(path.to_string());
  } else if let Some(value) = arg.strip_prefix("--outfile=") {
    options.outfile = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--outdir=") {
    options.outdir = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--outbase=") {
    options.outbase = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--tsconfig=") {
    options.tsconfig = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--entry-names=") {
    options.entry_names = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--chunk-names=") {
    options.chunk_names = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--asset-names=") {
    options.asset_names = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--public-path=") {
    options.public_path = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--resolve-extensions=") {
    options.resolve_extensions = split_with_empty_check(value, ',');
  } else if let Some(value) = arg.strip_prefix("--main-fields=") {
    options.main_fields = split_with_empty_check(value, ',');
  } else if let Some(value) = arg.strip_prefix("--conditions=") {
    options.conditions = split_with_empty_check(value, ',');
  } else if let Some(value) = arg.strip_prefix("--platform=") {
    options.platform = match value {
      "browser" => Platform::Browser,
      "node" => Platform::Node,
      "neutral" => Platform::Neutral,
      _ => {
        return Err(invalid_value(value, arg, "Valid values are \"browser\", \"node\", or \"neutral\"."));
      }
    };
  } else if let Some(value) = arg.strip_prefix("--loader:") {
    let Some((ext, text)) = value.split_once('=') else {
      return Err(missing_equals(
        arg,
        "You need to specify the file extension that the loader applies to. For example, \
         \"--loader:.js=jsx\" applies the \"jsx\" loader to files with the \".js\" extension.",
      ));
    };
    let loader = parse_loader(text)?;
    options.loader.insert(ext.to_string(), loader);
  } else if let Some(value) = arg.strip_prefix("--out-extension:") {
    let Some((ext, suffix)) = value.split_once('=') else {
      return Err(missing_equals(
        arg,
        "You need to use either \"--out-extension:.js=...\" or \"--out-extension:.css=...\" \
         to specify the file type that the output extension applies to.",
      ));
    };
    options.out_extensions.insert(ext.to_string(), suffix.to_string());
  } else if let Some(value) = arg.strip_prefix("--external:") {
    options.external.push(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--inject:") {
    options.inject.push(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--banner:") {
    let Some((lang, text)) = value.split_once('=') else {
      return Err(missing_equals(
        arg,
        "You need to use either \"--banner:js=...\" or \"--banner:css=...\" to specify the \
         language that the banner applies to.",
      ));
    };
    options.banner.insert(lang.to_string(), text.to_string());
  } else if let Some(value) = arg.strip_prefix("--footer:") {
    let Some((lang, text)) = value.split_once('=') else {
      return Err(missing_equals(
        arg,
        "You need to use either \"--footer:js=...\" or \"--footer:css=...\" to specify the \
         language that the footer applies to.",
      ));
    };
    options.footer.insert(lang.to_string(), text.to_string());
  } else {
    return Ok(false);
  }

  Ok(true)
}

/// Flags accepted in both modes. Each writes into whichever option struct
/// was selected; a few carry mode-specific semantics (the bare `--sourcemap`
/// default, the stdin loader and sourcefile).
fn bind_shared(
  arg: &str,
  target: &mut OptionsTarget<'_>,
  state: &mut BindState,
) -> FlagResult<bool> {
  if arg == "--minify" {
    match target {
      OptionsTarget::Build(options) => {
        options.minify_syntax = true;
        options.minify_whitespace = true;
        options.minify_identifiers = true;
      }
      OptionsTarget::Transform(options) => {
        options.minify_syntax = true;
        options.minify_whitespace = true;
        options.minify_identifiers = true;
      }
    }
  } else if arg == "--minify-syntax" {
    set_shared!(target, minify_syntax = true);
  } else if arg == "--minify-whitespace" {
    set_shared!(target, minify_whitespace = true);
  } else if arg == "--minify-identifiers" {
    set_shared!(target, minify_identifiers = true);
  } else if arg == "--ignore-annotations" {
    set_shared!(target, ignore_annotations = true);
  } else if arg == "--keep-names" {
    set_shared!(target, keep_names = true);
  } else if arg == "--sourcemap" {
    // Builds link a companion map file; stdin transforms can only inline.
    match target {
      OptionsTarget::Build(options) => options.sourcemap = SourceMap::Linked,
      OptionsTarget::Transform(options) => options.sourcemap = SourceMap::Inline,
    }
    state.has_bare_sourcemap_flag = true;
  } else if let Some(value) = arg.strip_prefix("--sourcemap=") {
    let sourcemap = match value {
      "inline" => SourceMap::Inline,
      "external" => SourceMap::External,
      "both" => SourceMap::InlineAndExternal,
      _ => {
        return Err(invalid_value(value, arg, "Valid values are \"inline\", \"external\", or \"both\"."));
      }
    };
    set_shared!(target, sourcemap = sourcemap);
    state.has_bare_sourcemap_flag = false;
  } else if let Some(value) = arg.strip_prefix("--source-root=") {
    set_shared!(target, source_root = Some(value.to_string()));
  } else if let Some(value) = arg.strip_prefix("--sources-content=") {
    let sources_content = match value {
      "true" => SourcesContent::Include,
      "false" => SourcesContent::Exclude,
      _ => return Err(invalid_value(value, arg, "Valid values are \"true\" or \"false\".")),
    };
    set_shared!(target, sources_content = sources_content);
  } else if let Some(value) = arg.strip_prefix("--sourcefile=") {
    match target {
      OptionsTarget::Build(options) => {
        options.stdin.get_or_insert_with(StdinOptions::default).sourcefile =
          Some(value.to_string());
      }
      OptionsTarget::Transform(options) => options.sourcefile = Some(value.to_string()),
    }
  } else if let Some(value) = arg.strip_prefix("--global-name=") {
    set_shared!(target, global_name = Some(value.to_string()));
  } else if let Some(value) = arg.strip_prefix("--legal-comments=") {
    let legal_comments = match value {
      "none" => LegalComments::None,
      "inline" => LegalComments::Inline,
      "eof" => LegalComments::EndOfFile,
      "linked" => LegalComments::Linked,
      "external" => LegalComments::External,
      _ => {
        return Err(invalid_value(
          value,
          arg,
          "Valid values are \"none\", \"inline\", \"eof\", \"linked\", or \"external\".",
        ));
      }
    };
    set_shared!(target, legal_comments = legal_comments);
  } else if let Some(value) = arg.strip_prefix("--charset=") {
    let charset = match value {
      "ascii" => Charset::Ascii,
      "utf8" => Charset::Utf8,
      _ => return Err(invalid_value(value, arg, "Valid values are \"ascii\" or \"utf8\".")),
    };
    set_shared!(target, charset = charset);
  } else if let Some(value) = arg.strip_prefix("--tree-shaking=") {
    let tree_shaking = match value {
      "true" => TreeShaking::True,
      "false" => TreeShaking::False,
      _ => return Err(invalid_value(value, arg, "Valid values are \"true\" or \"false\".")),
    };
    set_shared!(target, tree_shaking = tree_shaking);
  } else if let Some(value) = arg.strip_prefix("--define:") {
    let Some((name, replacement)) = value.split_once('=') else {
      return Err(missing_equals(
        arg,
        "You need to use \"=\" to specify both the original value and the replacement value. \
         For example, \"--define:DEBUG=true\" replaces \"DEBUG\" with \"true\".",
      ));
    };
    match target {
      OptionsTarget::Build(options) => {
        options.define.insert(name.to_string(), replacement.to_string());
      }
      OptionsTarget::Transform(options) => {
        options.define.insert(name.to_string(), replacement.to_string());
      }
    }
  } else if let Some(value) = arg.strip_prefix("--pure:") {
    match target {
      OptionsTarget::Build(options) => options.pure.push(value.to_string()),
      OptionsTarget::Transform(options) => options.pure.push(value.to_string()),
    }
  } else if let Some(value) = arg.strip_prefix("--loader=") {
    let loader = parse_loader(value)?;
    if loader == Loader::File {
      return Err(FlagError::with_note(
        format!("{arg:?} is not supported when transforming stdin"),
        "Using nanopack to transform stdin only generates one output file, so you cannot use \
         the \"file\" loader since that needs to generate two output files.",
      ));
    }
    match target {
      OptionsTarget::Build(options) => {
        options.stdin.get_or_insert_with(StdinOptions::default).loader = loader;
      }
      OptionsTarget::Transform(options) => options.loader = loader,
    }
  } else if let Some(value) = arg.strip_prefix("--target=") {
    let tokens = split_with_empty_check(value, ',');
    let (target_version, engines) = parse_targets(&tokens, arg)?;
    match target {
      OptionsTarget::Build(options) => {
        options.target = target_version;
        options.engines = engines;
      }
      OptionsTarget::Transform(options) => {
        options.target = target_version;
        options.engines = engines;
      }
    }
  } else if let Some(value) = arg.strip_prefix("--format=") {
    let format = match value {
      "iife" => OutputFormat::Iife,
      "cjs" => OutputFormat::Cjs,
      "esm" => OutputFormat::Esm,
      _ => {
        return Err(invalid_value(value, arg, "Valid values are \"iife\", \"cjs\", or \"esm\"."));
      }
    };
    set_shared!(target, format = format);
  } else if let Some(value) = arg.strip_prefix("--jsx=") {
    let jsx_mode = match value {
      "transform" => JsxMode::Transform,
      "preserve" => JsxMode::Preserve,
      _ => {
        return Err(invalid_value(value, arg, "Valid values are \"transform\" or \"preserve\"."));
      }
    };
    set_shared!(target, jsx_mode = jsx_mode);
  } else if let Some(value) = arg.strip_prefix("--jsx-factory=") {
    set_shared!(target, jsx_factory = Some(value.to_string()));
  } else if let Some(value) = arg.strip_prefix("--jsx-fragment=") {
    set_shared!(target, jsx_fragment = Some(value.to_string()));
  } else if let Some(value) = arg.strip_prefix("--log-limit=") {
    let Ok(limit) = value.parse::<usize>() else {
      return Err(invalid_value(value, arg, "The log limit must be a non-negative integer."));
    };
    set_shared!(target, log_limit = limit);
  } else if let Some(value) = arg.strip_prefix("--color=") {
    // Keep this in sync with `logger::output_options_for_args`
    let color = match value {
      "true" => StderrColor::Always,
      "false" => StderrColor::Never,
      _ => return Err(invalid_value(value, arg, "Valid values are \"true\" or \"false\".")),
    };
    set_shared!(target, color = color);
  } else if let Some(value) = arg.strip_prefix("--log-level=") {
    // Keep this in sync with `logger::output_options_for_args`
    let log_level = match value {
      "verbose" => LogLevel::Verbose,
      "debug" => LogLevel::Debug,
      "info" => LogLevel::Info,
      "warning" => LogLevel::Warning,
      "error" => LogLevel::Error,
      "silent" => LogLevel::Silent,
      _ => {
        return Err(invalid_value(
          value,
          arg,
          "Valid values are \"verbose\", \"debug\", \"info\", \"warning\", \"error\", or \"silent\".",
        ));
      }
    };
    set_shared!(target, log_level = log_level);
  } else {
    return Ok(false);
  }

  Ok(true)
}

fn bind_transform_only(arg: &str, target: &mut OptionsTarget<'_>) -> FlagResult<bool> {
  let OptionsTarget::Transform(options) = target else { return Ok(false) };

  if let Some(value) = arg.strip_prefix("--tsconfig-raw=") {
    options.tsconfig_raw = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--banner=") {
    options.banner = Some(value.to_string());
  } else if let Some(value) = arg.strip_prefix("--footer=") {
    options.footer = Some(value.to_string());
  } else {
    return Ok(false);
  }

  Ok(true)
}

/// Parse a full build argument list the way an embedder would: bare
/// `--metafile` is accepted and no write-out path is involved.
pub fn parse_build_options(os_args: &[String]) -> FlagResult<BuildOptions> {
  let mut options = BuildOptions::default();
  parse_options_impl(os_args, &mut OptionsTarget::Build(&mut options), ParseKind::External)?;
  Ok(options)
}

/// Parse a full transform argument list the way an embedder would.
pub fn parse_transform_options(os_args: &[String]) -> FlagResult<TransformOptions> {
  let mut options = TransformOptions::default();
  parse_options_impl(os_args, &mut OptionsTarget::Transform(&mut options), ParseKind::External)?;
  Ok(options)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
  }

  fn parse_build_internal(list: &[&str]) -> FlagResult<(BuildOptions, Option<String>)> {
    let mut options = BuildOptions::default();
    let metafile = parse_options_impl(
      &args(list),
      &mut OptionsTarget::Build(&mut options),
      ParseKind::Internal,
    )?;
    Ok((options, metafile))
  }

  #[test]
  fn bundle_flag_alone_selects_build_mode() {
    assert_eq!(select_mode(&args(&["--bundle"])), Mode::Build);
    let options = parse_build_options(&args(&["--bundle"])).unwrap();
    assert!(options.bundle);
    assert!(options.entry_points.is_empty());
  }

  #[test]
  fn bare_path_selects_build_mode() {
    assert_eq!(select_mode(&args(&["entry.js"])), Mode::Build);
    let options = parse_build_options(&args(&["entry.js"])).unwrap();
    assert_eq!(options.entry_points, vec!["entry.js".to_string()]);
  }

  #[test]
  fn flags_only_selects_transform_mode() {
    assert_eq!(select_mode(&args(&["--minify-syntax"])), Mode::Transform);
    assert_eq!(select_mode(&args(&[])), Mode::Transform);
    let options = parse_transform_options(&args(&["--minify-syntax"])).unwrap();
    assert!(options.minify_syntax);
    assert!(!options.minify_whitespace);
  }

  #[test]
  fn minify_sets_all_three_sub_flags() {
    let options = parse_build_options(&args(&["--bundle", "--minify"])).unwrap();
    assert!(options.minify_syntax && options.minify_whitespace && options.minify_identifiers);

    let options = parse_transform_options(&args(&["--minify"])).unwrap();
    assert!(options.minify_syntax && options.minify_whitespace && options.minify_identifiers);
  }

  #[test]
  fn entry_points_split_into_plain_and_advanced_forms() {
    let options = parse_build_options(&args(&["a.js", "out=b.js", "c.js"])).unwrap();
    assert_eq!(options.entry_points, vec!["a.js".to_string(), "c.js".to_string()]);
    assert_eq!(
      options.entry_points_advanced,
      vec![EntryPoint { output_path: "out".to_string(), input_path: "b.js".to_string() }]
    );
  }

  #[test]
  fn repeated_loader_assignments_keep_the_last_one() {
    let options =
      parse_build_options(&args(&["a.js", "--loader:.txt=text", "--loader:.txt=json"])).unwrap();
    assert_eq!(options.loader.get(".txt"), Some(&Loader::Json));
  }

  #[test]
  fn define_requires_an_equals_sign() {
    let error = parse_build_options(&args(&["a.js", "--define:DEBUG"])).unwrap_err();
    assert_eq!(error.text, "Missing \"=\" in \"--define:DEBUG\"");
    assert!(error.note.unwrap().contains("--define:DEBUG=true"));
  }

  #[test]
  fn define_keeps_the_last_replacement_per_name() {
    let options =
      parse_build_options(&args(&["a.js", "--define:X=1", "--define:X=2", "--define:Y=3"]))
        .unwrap();
    assert_eq!(options.define.get("X"), Some(&"2".to_string()));
    assert_eq!(options.define.get("Y"), Some(&"3".to_string()));
  }

  #[test]
  fn append_only_lists_preserve_order_and_duplicates() {
    let options = parse_build_options(&args(&[
      "a.js",
      "--external:react",
      "--external:lodash",
      "--external:react",
    ]))
    .unwrap();
    assert_eq!(options.external, vec!["react", "lodash", "react"]);
  }

  #[test]
  fn bare_sourcemap_without_an_output_path_becomes_inline() {
    let options = parse_build_options(&args(&["a.js", "--sourcemap"])).unwrap();
    assert_eq!(options.sourcemap, SourceMap::Inline);
  }

  #[test]
  fn bare_sourcemap_with_an_output_path_stays_linked() {
    let options = parse_build_options(&args(&["a.js", "--sourcemap", "--outfile=out.js"])).unwrap();
    assert_eq!(options.sourcemap, SourceMap::Linked);

    let options = parse_build_options(&args(&["a.js", "--sourcemap", "--outdir=dist"])).unwrap();
    assert_eq!(options.sourcemap, SourceMap::Linked);
  }

  #[test]
  fn explicit_sourcemap_mode_is_not_rewritten() {
    // The bare flag came first, so the explicit mode is the one that counts.
    let options =
      parse_build_options(&args(&["a.js", "--sourcemap", "--sourcemap=external"])).unwrap();
    assert_eq!(options.sourcemap, SourceMap::External);
  }

  #[test]
  fn bare_sourcemap_in_transform_mode_is_inline() {
    let options = parse_transform_options(&args(&["--sourcemap"])).unwrap();
    assert_eq!(options.sourcemap, SourceMap::Inline);
  }

  #[test]
  fn out_of_domain_values_report_the_valid_set() {
    let error = parse_build_options(&args(&["a.js", "--charset=latin1"])).unwrap_err();
    assert_eq!(error.text, "Invalid value \"latin1\" in \"--charset=latin1\"");
    assert_eq!(error.note.unwrap(), "Valid values are \"ascii\" or \"utf8\".");

    let error = parse_build_options(&args(&["a.js", "--format=umd"])).unwrap_err();
    assert_eq!(error.note.unwrap(), "Valid values are \"iife\", \"cjs\", or \"esm\".");
  }

  #[test]
  fn log_limit_must_be_a_non_negative_integer() {
    let options = parse_build_options(&args(&["a.js", "--log-limit=12"])).unwrap();
    assert_eq!(options.log_limit, 12);

    let error = parse_build_options(&args(&["a.js", "--log-limit=-1"])).unwrap_err();
    assert_eq!(error.note.unwrap(), "The log limit must be a non-negative integer.");
  }

  #[test]
  fn build_only_flags_are_unknown_in_transform_mode() {
    let error = parse_transform_options(&args(&["--outfile=out.js"])).unwrap_err();
    assert_eq!(error.text, "Invalid transform flag: \"--outfile=out.js\"");
  }

  #[test]
  fn single_dash_spelling_gets_a_corrective_note() {
    let error = parse_build_options(&args(&["a.js", "-bundle"])).unwrap_err();
    assert_eq!(error.text, "Invalid build flag: \"-bundle\"");
    assert!(error.note.unwrap().contains("\"--bundle\""));
  }

  #[test]
  fn stray_single_quote_is_called_out() {
    let error = parse_build_options(&args(&["'--bundle", "a.js"])).unwrap_err();
    assert_eq!(error.text, "Unexpected single quote character before flag: '--bundle");
    assert!(error.note.unwrap().contains("double quote characters"));
  }

  #[test]
  fn first_invalid_flag_aborts_the_pass() {
    let error =
      parse_build_options(&args(&["a.js", "--charset=latin1", "--format=umd"])).unwrap_err();
    assert!(error.text.contains("--charset=latin1"));
  }

  #[test]
  fn metafile_path_form_is_internal_only() {
    let (options, metafile) =
      parse_build_internal(&["a.js", "--outfile=out.js", "--metafile=meta.json"]).unwrap();
    assert!(options.metafile);
    assert_eq!(metafile, Some("meta.json".to_string()));

    let error = parse_build_options(&args(&["a.js", "--metafile=meta.json"])).unwrap_err();
    assert_eq!(error.text, "Invalid build flag: \"--metafile=meta.json\"");
  }

  #[test]
  fn bare_metafile_form_is_external_only() {
    let options = parse_build_options(&args(&["a.js", "--metafile"])).unwrap();
    assert!(options.metafile);

    let error = parse_build_internal(&["a.js", "--metafile"]).unwrap_err();
    assert_eq!(error.text, "Invalid build flag: \"--metafile\"");
  }

  #[test]
  fn stdin_loader_and_sourcefile_build_the_stdin_payload() {
    let options =
      parse_build_options(&args(&["--bundle", "--loader=ts", "--sourcefile=input.ts"])).unwrap();
    let stdin = options.stdin.unwrap();
    assert_eq!(stdin.loader, Loader::Ts);
    assert_eq!(stdin.sourcefile, Some("input.ts".to_string()));
  }

  #[test]
  fn the_file_loader_cannot_apply_to_stdin() {
    let error = parse_transform_options(&args(&["--loader=file"])).unwrap_err();
    assert_eq!(error.text, "\"--loader=file\" is not supported when transforming stdin");
    assert!(error.note.unwrap().contains("two output files"));
  }

  #[test]
  fn transform_banner_is_a_single_string() {
    let options = parse_transform_options(&args(&["--banner=// hi"])).unwrap();
    assert_eq!(options.banner, Some("// hi".to_string()));

    // The map-valued form stays build-only, and the hint explains the
    // equals-form exists for single-use flags.
    let error = parse_build_options(&args(&["a.js", "--banner=// hi"])).unwrap_err();
    assert_eq!(error.text, "Invalid build flag: \"--banner=// hi\"");
    assert!(error.note.unwrap().contains("\"--banner:// hi\""));
  }

  #[test]
  fn empty_list_values_reset_to_empty() {
    let options = parse_build_options(&args(&["a.js", "--resolve-extensions="])).unwrap();
    assert!(options.resolve_extensions.is_empty());

    let options = parse_build_options(&args(&["a.js", "--resolve-extensions=.ts,.js"])).unwrap();
    assert_eq!(options.resolve_extensions, vec![".ts", ".js"]);
  }

  #[test]
  fn target_flag_sets_baseline_and_engines() {
    let options = parse_build_options(&args(&["a.js", "--target=es2018,chrome80"])).unwrap();
    assert_eq!(options.target, nanopack_common::ESTarget::Es2018);
    assert_eq!(options.engines.len(), 1);
  }
}
