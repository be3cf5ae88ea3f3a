//! Top-level sequencing: strip tool-level flags, pick a mode, assemble the
//! configuration, invoke the engine, and map everything to an exit status.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc;

use ansi_term::Colour;
use nanopack_common::{
  AnalyzeMetafileOptions, BuildOptions, BuildResult, Engine, LogLevel, OnRequestArgs,
  RebuildObserver, SourceMap, StdinOptions, TransformOptions,
};
use nanopack_error::{FlagError, FlagResult};
use nanopack_fs::{FileSystem, OsFileSystem};

use crate::logger::{self, OutputOptions};
use crate::parse::{
  Mode, OptionsTarget, ParseKind, parse_options_impl, select_mode, split_with_empty_check,
};
use crate::serve::parse_serve_options;

enum ParsedCommand {
  Build { options: BuildOptions, metafile: Option<String> },
  Transform(TransformOptions),
}

/// Decide the mode, apply the CLI defaults, and run the single binding pass.
fn parse_options_for_run(os_args: &[String]) -> FlagResult<ParsedCommand> {
  match select_mode(os_args) {
    Mode::Build => {
      let mut options = BuildOptions {
        log_limit: 6,
        log_level: LogLevel::Info,
        write: true,
        ..BuildOptions::default()
      };
      let metafile =
        parse_options_impl(os_args, &mut OptionsTarget::Build(&mut options), ParseKind::Internal)?;
      Ok(ParsedCommand::Build { options, metafile })
    }
    Mode::Transform => {
      let mut options =
        TransformOptions { log_limit: 6, log_level: LogLevel::Info, ..TransformOptions::default() };
      parse_options_impl(
        os_args,
        &mut OptionsTarget::Transform(&mut options),
        ParseKind::Internal,
      )?;

      // Stdin transforms write a single stream to stdout; only an inline
      // source map can ride along in it.
      if options.sourcemap != SourceMap::None && options.sourcemap != SourceMap::Inline {
        let mode = match options.sourcemap {
          SourceMap::External => "external",
          SourceMap::InlineAndExternal => "both",
          _ => "linked",
        };
        return Err(FlagError::with_note(
          format!("Use \"--sourcemap\" instead of \"--sourcemap={mode}\" when transforming stdin"),
          format!(
            "Using nanopack to transform stdin only generates one output file, so you cannot \
             use the {mode:?} source map mode since that needs to generate two output files."
          ),
        ));
      }

      Ok(ParsedCommand::Transform(options))
    }
  }
}

/// Run the CLI against `engine`. Returns the process exit status: 0 on
/// success, 1 on any reported error.
pub fn run<E: Engine>(engine: &E, os_args: &[String]) -> i32 {
  run_impl(engine, OsFileSystem, os_args)
}

fn run_impl<E, F>(engine: &E, fs: F, os_args: &[String]) -> i32
where
  E: Engine,
  F: FileSystem + Send + Sync + 'static,
{
  // A serve flag anywhere bypasses normal build/transform dispatch.
  if os_args
    .iter()
    .any(|arg| arg == "--serve" || arg.starts_with("--serve=") || arg.starts_with("--servedir="))
  {
    return match serve_impl(engine, os_args) {
      Ok(()) => 0,
      Err(error) => {
        logger::print_error_to_stderr(os_args, &error.to_string());
        1
      }
    };
  }

  // `--analyze` belongs to this CLI, not the engine; strip it before the
  // general parse sees it.
  let mut analyze = false;
  let mut analyze_verbose = false;
  let os_args: Vec<String> = os_args
    .iter()
    .filter(|arg| match arg.as_str() {
      "--analyze" => {
        analyze = true;
        analyze_verbose = false;
        false
      }
      "--analyze=verbose" => {
        analyze = true;
        analyze_verbose = true;
        false
      }
      _ => true,
    })
    .cloned()
    .collect();

  match parse_options_for_run(&os_args) {
    Ok(ParsedCommand::Build { options, metafile }) => {
      run_build(engine, fs, &os_args, options, metafile, analyze, analyze_verbose)
    }
    Ok(ParsedCommand::Transform(options)) => run_transform(engine, &os_args, options),
    Err(error) => {
      logger::print_flag_error_to_stderr(&os_args, &error);
      1
    }
  }
}

#[allow(clippy::too_many_arguments)]
fn run_build<E, F>(
  engine: &E,
  fs: F,
  os_args: &[String],
  mut options: BuildOptions,
  metafile: Option<String>,
  analyze: bool,
  analyze_verbose: bool,
) -> i32
where
  E: Engine,
  F: FileSystem + Send + Sync + 'static,
{
  // NODE_PATH participates in module resolution the way node itself reads
  // it. Windows delimits it with semicolons instead of colons.
  if let Ok(value) = std::env::var("NODE_PATH") {
    let separator = if cfg!(windows) { ';' } else { ':' };
    options.node_paths = split_with_empty_check(&value, separator);
  }

  // Read from stdin when there are no entry points of either form.
  if options.entry_points.is_empty() && options.entry_points_advanced.is_empty() {
    let mut contents = String::new();
    if let Err(error) = io::stdin().read_to_string(&mut contents) {
      logger::print_error_to_stderr(os_args, &format!("Could not read from stdin: {error}"));
      return 1;
    }
    let stdin = options.stdin.get_or_insert_with(StdinOptions::default);
    stdin.contents = contents;
    stdin.resolve_dir = std::env::current_dir().ok();
  } else if let Some(stdin) = &options.stdin {
    // `--sourcefile=` and the extension-less `--loader=` configure the stdin
    // module, so they conflict with explicit entry points.
    let text = if stdin.sourcefile.is_some() {
      "\"sourcefile\" only applies when reading from stdin"
    } else {
      "\"loader\" without extension only applies when reading from stdin"
    };
    logger::print_error_to_stderr(os_args, text);
    return 1;
  }

  // Resolve the metafile path before any build work so a bad path fails
  // fast, before output files have been written.
  let mut metafile_writer = None;
  if let Some(path) = metafile {
    if options.outfile.is_none() && options.outdir.is_none() {
      // The build itself is streaming to stdout in this configuration.
      logger::print_error_to_stderr(os_args, "Cannot use \"metafile\" without an output path");
      return 1;
    }
    let Some(abs_path) = fs.absolute(Path::new(&path)) else {
      logger::print_error_to_stderr(os_args, &format!("Invalid metafile path: {path}"));
      return 1;
    };
    let abs_dir = abs_path.parent().map(Path::to_path_buf).unwrap_or_default();
    metafile_writer = Some(Arc::new(MetafileWriter {
      fs,
      output: logger::output_options_for_args(os_args),
      abs_path,
      abs_dir,
    }));
  }

  // Always generate a metafile when analyzing, even if it won't be written.
  if analyze {
    options.metafile = true;
  }

  let watch = options.watch;
  let on_rebuild =
    if watch { metafile_writer.clone().map(|writer| writer as Arc<dyn RebuildObserver>) } else { None };

  let result = engine.build(options, on_rebuild);

  // Print the analysis after the build, whether or not the metafile is also
  // being persisted.
  if analyze {
    let output = logger::output_options_for_args(os_args);
    let report = engine.analyze_metafile(
      &result.metafile,
      AnalyzeMetafileOptions {
        color: logger::use_color_for_stderr(output.color),
        verbose: analyze_verbose,
      },
    );
    eprintln!("{report}");
  }

  if let Some(writer) = &metafile_writer {
    writer.write(&result.metafile);
  }

  // Watch mode keeps the process alive; rebuilds happen on the engine's own
  // threads and report through the observer registered above.
  if watch {
    wait_forever();
  }

  i32::from(!result.errors.is_empty())
}

fn run_transform<E: Engine>(engine: &E, os_args: &[String], options: TransformOptions) -> i32 {
  let mut input = String::new();
  if let Err(error) = io::stdin().read_to_string(&mut input) {
    logger::print_error_to_stderr(os_args, &format!("Could not read from stdin: {error}"));
    return 1;
  }

  let result = engine.transform(input, options);
  if !result.errors.is_empty() {
    return 1;
  }

  io::stdout().write_all(&result.code).ok();
  0
}

fn serve_impl<E: Engine>(engine: &E, os_args: &[String]) -> anyhow::Result<()> {
  let (mut serve_options, filtered_args) = parse_serve_options(os_args)?;

  // Serve mode always builds; the remaining arguments bind as build flags.
  let mut options =
    BuildOptions { log_limit: 5, log_level: LogLevel::Info, ..BuildOptions::default() };
  parse_options_impl(&filtered_args, &mut OptionsTarget::Build(&mut options), ParseKind::Internal)?;

  let output = logger::output_options_for_args(&filtered_args);
  let colored = logger::use_color_for_stderr(output.color);
  serve_options.on_request = Some(Arc::new(move |request: OnRequestArgs| {
    if output.log_level.shows_info() {
      eprintln!("{}", format_request_line(&request, colored));
    }
  }));

  let handle = engine.serve(serve_options, options)?;

  // Show what actually got bound, which matters when the port was 0.
  if output.log_level.shows_info() {
    let host = match handle.host() {
      "" | "0.0.0.0" | "::" => "localhost",
      host => host,
    };
    let address = if host.contains(':') {
      format!("[{host}]:{}", handle.port())
    } else {
      format!("{host}:{}", handle.port())
    };
    if colored {
      eprintln!("\n > {}\n", Colour::White.underline().paint(format!("http://{address}/")));
    } else {
      eprintln!("\n > http://{address}/\n");
    }
  }

  handle.wait()
}

fn format_request_line(request: &OnRequestArgs, colored: bool) -> String {
  let method_and_path = format!("{} {}", request.method, request.path);
  if !colored {
    return format!(
      "{} - {:?} {} [{}ms]",
      request.remote_address, method_and_path, request.status, request.time_in_ms
    );
  }
  let status_colour = match request.status {
    200..=299 => Colour::Green,
    300..=399 => Colour::Yellow,
    _ => Colour::Red,
  };
  let dim = Colour::White.dimmed();
  format!(
    "{} {} {}",
    dim.paint(format!("{} - {:?}", request.remote_address, method_and_path)),
    status_colour.paint(request.status.to_string()),
    dim.paint(format!("[{}ms]", request.time_in_ms)),
  )
}

/// Writes the metafile after the initial build and, in watch mode, after
/// every rebuild. Safe to invoke repeatedly and from the engine's own
/// scheduling context: it only creates a directory and rewrites one file.
struct MetafileWriter<F: FileSystem> {
  fs: F,
  output: OutputOptions,
  abs_path: PathBuf,
  abs_dir: PathBuf,
}

impl<F: FileSystem> MetafileWriter<F> {
  fn write(&self, json: &str) {
    // An empty payload means the build produced no metafile, e.g. because it
    // failed; there is nothing to write.
    if json.is_empty() {
      return;
    }
    if let Err(error) = self.fs.create_dir_all(&self.abs_dir) {
      logger::print_error(
        &self.output,
        &format!("Failed to create output directory: {error}"),
        None,
      );
    } else if let Err(error) = self.fs.write(&self.abs_path, json.as_bytes()) {
      logger::print_error(&self.output, &format!("Failed to write to output file: {error}"), None);
    }
  }
}

impl<F: FileSystem + Send + Sync> RebuildObserver for MetafileWriter<F> {
  fn on_rebuild(&self, result: &BuildResult) {
    self.write(&result.metafile);
  }
}

/// Block the invoking thread for the life of the process.
fn wait_forever() {
  let (sender, receiver) = mpsc::channel::<()>();
  // Holding the sender here means `recv` can never observe a disconnect.
  let _keep_alive = sender;
  let _ = receiver.recv();
}
