/// Ctrl-C listener registered up front, so an interrupt that arrives while
/// files are still being copied is held until it can be acted on instead of
/// killing the process.
pub struct InterruptListener {
    #[cfg(unix)]
    inner: Option<tokio::signal::unix::Signal>,
    #[cfg(windows)]
    inner: Option<tokio::signal::windows::CtrlC>,
}

impl InterruptListener {
    /// Registers the handler; must be called from inside a tokio runtime.
    pub fn install() -> Self {
        #[cfg(unix)]
        let inner = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt());
        #[cfg(windows)]
        let inner = tokio::signal::windows::ctrl_c();

        let inner = match inner {
            Ok(listener) => Some(listener),
            Err(e) => {
                tracing::warn!("Could not install Ctrl-C handler: {}", e);
                None
            }
        };
        Self { inner }
    }

    pub fn is_installed(&self) -> bool {
        self.inner.is_some()
    }

    /// Resolves on the next interrupt. Never resolves without a handler.
    pub async fn recv(&mut self) {
        match self.inner.as_mut() {
            Some(listener) => {
                if listener.recv().await.is_none() {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    }
}
