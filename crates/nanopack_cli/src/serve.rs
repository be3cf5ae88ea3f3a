//! Extraction of the serve-only flags from the argument list, before the
//! option binder sees the rest.

use anyhow::bail;
use nanopack_common::ServeOptions;

/// Pull `--serve`, `--serve=<[host:]port>`, and `--servedir=<path>` out of
/// `os_args`; everything else passes through unchanged for the option
/// binder. The request callback is left unset for the caller to attach.
pub fn parse_serve_options(os_args: &[String]) -> anyhow::Result<(ServeOptions, Vec<String>)> {
  let mut host = String::new();
  let mut port_text = "0".to_string();
  let mut servedir = String::new();

  let mut filtered_args = Vec::with_capacity(os_args.len());
  for arg in os_args {
    if arg == "--serve" {
      // Serve mode was already detected; the bare flag carries no value.
    } else if let Some(value) = arg.strip_prefix("--serve=") {
      port_text = value.to_string();
    } else if let Some(value) = arg.strip_prefix("--servedir=") {
      servedir = value.to_string();
    } else {
      filtered_args.push(arg.clone());
    }
  }

  // Specifying the host is optional
  if port_text.contains(':') {
    let (split_host, split_port) = split_host_port(&port_text)?;
    host = split_host;
    port_text = split_port;
  }

  let Ok(port) = port_text.parse::<u16>() else {
    bail!("Invalid port number: {port_text}");
  };

  Ok((ServeOptions { host, port, servedir, on_request: None }, filtered_args))
}

/// Purely syntactic host:port splitting; IPv6 hosts must be bracketed.
fn split_host_port(hostport: &str) -> anyhow::Result<(String, String)> {
  if let Some(rest) = hostport.strip_prefix('[') {
    let Some((host, port)) = rest.split_once("]:") else {
      bail!("Missing port in address {hostport:?}");
    };
    if host.contains(']') || port.contains(':') {
      bail!("Too many colons in address {hostport:?}");
    }
    return Ok((host.to_string(), port.to_string()));
  }

  match hostport.split_once(':') {
    Some((host, port)) if !port.contains(':') => Ok((host.to_string(), port.to_string())),
    _ => bail!("Too many colons in address {hostport:?}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
  }

  #[test]
  fn host_and_port_are_both_optional() {
    let (options, _) = parse_serve_options(&args(&["--serve"])).unwrap();
    assert_eq!(options.host, "");
    assert_eq!(options.port, 0);

    let (options, _) = parse_serve_options(&args(&["--serve=8000"])).unwrap();
    assert_eq!(options.host, "");
    assert_eq!(options.port, 8000);

    let (options, _) = parse_serve_options(&args(&["--serve=127.0.0.1:9000"])).unwrap();
    assert_eq!(options.host, "127.0.0.1");
    assert_eq!(options.port, 9000);
  }

  #[test]
  fn ipv6_hosts_use_brackets() {
    let (options, _) = parse_serve_options(&args(&["--serve=[::1]:8000"])).unwrap();
    assert_eq!(options.host, "::1");
    assert_eq!(options.port, 8000);
  }

  #[test]
  fn bad_ports_are_fatal() {
    let error = parse_serve_options(&args(&["--serve=70000"])).unwrap_err();
    assert_eq!(error.to_string(), "Invalid port number: 70000");

    let error = parse_serve_options(&args(&["--serve=http"])).unwrap_err();
    assert_eq!(error.to_string(), "Invalid port number: http");

    assert!(parse_serve_options(&args(&["--serve=1:2:3"])).is_err());
  }

  #[test]
  fn other_arguments_pass_through_for_the_option_binder() {
    let (options, filtered) =
      parse_serve_options(&args(&["--serve=3000", "--servedir=www", "a.js", "--bundle"])).unwrap();
    assert_eq!(options.servedir, "www");
    assert_eq!(filtered, args(&["a.js", "--bundle"]));
  }
}
