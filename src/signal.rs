use std::io;
use tokio_util::sync::CancellationToken;

/// Cancels `token` once the process receives SIGINT or SIGTERM (ctrl-c elsewhere).
///
/// Handlers are registered before this returns, so a signal arriving right after
/// startup is not lost.
pub fn cancel_on_shutdown_signal(token: CancellationToken) -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;

        tokio::spawn(async move {
            tokio::select! {
                _ = interrupt.recv() => {},
                _ = terminate.recv() => {},
            }
            token.cancel();
        });
    }

    #[cfg(not(unix))]
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    Ok(())
}
