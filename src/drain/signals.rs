use crate::drain::enums::shutdown_outcome::ShutdownOutcome;
use crate::node::structs::edge_node::EdgeNode;
use actix_web::dev::ServerHandle;
use log::{
    info,
    warn
};
use std::sync::Arc;
use tokio::sync::watch;

#[cfg(unix)]
pub struct TerminationSignals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
    hangup: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    pub fn new() -> std::io::Result<TerminationSignals> {
        use tokio::signal::unix::{
            signal,
            SignalKind
        };
        Ok(TerminationSignals {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
        })
    }

    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.hangup.recv() => "SIGHUP",
        }
    }
}

#[cfg(not(unix))]
pub struct TerminationSignals;

#[cfg(not(unix))]
impl TerminationSignals {
    pub fn new() -> std::io::Result<TerminationSignals> {
        Ok(TerminationSignals)
    }

    pub async fn recv(&mut self) -> &'static str {
        let _ = tokio::signal::ctrl_c().await;
        "CTRL-C"
    }
}

/// Waits for the first termination signal, then drains and stops the HTTP
/// server. A second signal during the drain cuts it short.
pub async fn signal_listener(
    node: Arc<EdgeNode>,
    handle: ServerHandle,
    shutdown: watch::Sender<bool>,
) -> std::io::Result<ShutdownOutcome>
{
    let mut signals = TerminationSignals::new()?;
    let name = signals.recv().await;
    info!("[SHUTDOWN] {name} received, starting warm shutdown...");
    let _ = shutdown.send(true);

    let grace = node.config.cluster.drain_grace_period();
    let poll = node.config.cluster.drain_poll_interval();
    let drain = node.drain.clone();
    let graceful = async move {
        drain.shutdown(grace, poll).await;
        handle.stop(true).await;
    };

    tokio::select! {
        _ = graceful => {
            info!("[SHUTDOWN] Server shutting down completed");
            Ok(ShutdownOutcome::Graceful)
        }
        name = signals.recv() => {
            warn!("[SHUTDOWN] {name} received while draining, forcing cold shutdown");
            Ok(ShutdownOutcome::Forced)
        }
    }
}
