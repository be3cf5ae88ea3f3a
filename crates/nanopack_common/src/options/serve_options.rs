use std::sync::Arc;

/// Invoked by the server for every request it handles. Called from the
/// server's own request-handling contexts, possibly concurrently.
pub type OnRequestCallback = Arc<dyn Fn(OnRequestArgs) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct OnRequestArgs {
  pub remote_address: String,
  pub method: String,
  pub path: String,
  pub status: u16,
  pub time_in_ms: u64,
}

#[derive(Default, Clone)]
pub struct ServeOptions {
  /// Empty means unspecified: the server picks the interface to bind.
  pub host: String,
  /// Zero means OS-assigned.
  pub port: u16,
  /// Static directory served alongside the build outputs. Empty means none.
  pub servedir: String,
  pub on_request: Option<OnRequestCallback>,
}

impl std::fmt::Debug for ServeOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ServeOptions")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("servedir", &self.servedir)
      .field("on_request", &self.on_request.as_ref().map(|_| "<callback>"))
      .finish()
  }
}
