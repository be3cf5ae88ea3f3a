//! Colored stderr reporting for the thin layer of diagnostics this crate
//! owns: flag errors, serve request lines, and the bound-address banner.
//! The engine renders its own build diagnostics.

use std::io::IsTerminal;

use ansi_term::Colour;
use nanopack_common::{LogLevel, StderrColor};
use nanopack_error::FlagError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputOptions {
  pub color: StderrColor,
  pub log_level: LogLevel,
}

/// A minimal scan of the two flags that control stderr rendering, so that
/// diagnostics about the argument list itself are still presented the way
/// the user asked for.
pub(crate) fn output_options_for_args(os_args: &[String]) -> OutputOptions {
  let mut options = OutputOptions { color: StderrColor::IfTerminal, log_level: LogLevel::Default };
  for arg in os_args {
    match arg.as_str() {
      "--color=true" => options.color = StderrColor::Always,
      "--color=false" => options.color = StderrColor::Never,
      "--log-level=verbose" => options.log_level = LogLevel::Verbose,
      "--log-level=debug" => options.log_level = LogLevel::Debug,
      "--log-level=info" => options.log_level = LogLevel::Info,
      "--log-level=warning" => options.log_level = LogLevel::Warning,
      "--log-level=error" => options.log_level = LogLevel::Error,
      "--log-level=silent" => options.log_level = LogLevel::Silent,
      _ => {}
    }
  }
  options
}

pub(crate) fn use_color_for_stderr(color: StderrColor) -> bool {
  match color {
    StderrColor::Always => true,
    StderrColor::Never => false,
    StderrColor::IfTerminal => std::io::stderr().is_terminal(),
  }
}

pub(crate) fn print_error(options: &OutputOptions, text: &str, note: Option<&str>) {
  if options.log_level == LogLevel::Silent {
    return;
  }
  if use_color_for_stderr(options.color) {
    eprintln!("{} {}", Colour::Red.paint("Error:"), text);
    if let Some(note) = note {
      eprintln!("  {}", Colour::White.dimmed().paint(note));
    }
  } else {
    eprintln!("Error: {text}");
    if let Some(note) = note {
      eprintln!("  {note}");
    }
  }
}

pub(crate) fn print_error_to_stderr(os_args: &[String], text: &str) {
  print_error(&output_options_for_args(os_args), text, None);
}

pub(crate) fn print_flag_error_to_stderr(os_args: &[String], error: &FlagError) {
  print_error(&output_options_for_args(os_args), &error.text, error.note.as_deref());
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
  }

  #[test]
  fn color_and_log_level_are_read_from_the_raw_arguments() {
    let options = output_options_for_args(&args(&["a.js", "--color=false", "--log-level=silent"]));
    assert_eq!(options.color, StderrColor::Never);
    assert_eq!(options.log_level, LogLevel::Silent);
  }

  #[test]
  fn unrelated_and_malformed_flags_leave_the_defaults() {
    let options = output_options_for_args(&args(&["--color=maybe", "--log-level="]));
    assert_eq!(options.color, StderrColor::IfTerminal);
    assert_eq!(options.log_level, LogLevel::Default);
  }
}
