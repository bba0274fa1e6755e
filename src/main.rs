use clap::Parser;
use log::{
    error,
    info,
    warn
};
use parking_lot::deadlock;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use thumbnail_edge::common::common::setup_logging;
use thumbnail_edge::config::structs::configuration::Configuration;
use thumbnail_edge::drain::enums::shutdown_outcome::ShutdownOutcome;
use thumbnail_edge::drain::signals::signal_listener;
use thumbnail_edge::http::http::http_service;
use thumbnail_edge::node::structs::edge_node::EdgeNode;
use thumbnail_edge::structs::Cli;
use thumbnail_edge::websocket::slave::client::start_slave_client;
use tokio::runtime::Builder;
use tokio::sync::watch;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);

    let mode = match config.validate() {
        Ok(mode) => mode,
        Err(error) => {
            eprintln!("[ERROR] {error}");
            exit(1);
        }
    };
    let address = match config.bind_address() {
        Ok(address) => address,
        Err(error) => {
            eprintln!("[ERROR] {error}");
            exit(1);
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] Unable to set up logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let node = match EdgeNode::bootstrap(config.clone(), mode) {
                Ok(node) => Arc::new(node),
                Err(error) => {
                    error!("[BOOT] Unable to create the cache: {error}");
                    exit(1);
                }
            };

            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let mut deadlocks_handler = shutdown_rx.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let (handle, server) = match http_service(address, node.clone()).await {
                Ok(service) => service,
                Err(error) => {
                    error!("[HTTP] Unable to bind {address}: {error}");
                    exit(1);
                }
            };
            let server_task = tokio::spawn(server);

            if node.is_master() {
                info!("[CLUSTER MASTER] Accepting slaves on {}", config.cluster.control_path);
            } else {
                tokio::spawn(start_slave_client(node.clone(), shutdown_rx.clone()));
            }

            let stats_handler = shutdown_rx.clone();
            let node_spawn_stats = node.clone();
            let console_interval = config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut stats_handler = stats_handler;
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = node_spawn_stats.get_stats();
                            info!(
                                "[STATS] Slaves: {} - Peers: {} - Active: {} | Redirects: {} - Served: {} - Failed: {} - Peer fetches: {}",
                                node_spawn_stats.registry.len(), node_spawn_stats.cache.peers().len(),
                                node_spawn_stats.drain.active(), stats.redirects, stats.served_local,
                                stats.serve_failures, stats.peer_fetches
                            );
                            info!(
                                "[STATS WS] Conn:{} | Updates: Sent:{} Failed:{} | Recon:{} | Auth: OK:{} Fail:{}",
                                stats.ws_connections_active, stats.peer_updates_sent, stats.peer_updates_failed,
                                stats.ws_reconnects, stats.ws_auth_success, stats.ws_auth_failed
                            );
                        }
                        _ = stats_handler.changed() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let outcome = signal_listener(node.clone(), handle, shutdown_tx).await?;
            if outcome == ShutdownOutcome::Forced {
                exit(outcome.exit_code());
            }

            match server_task.await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => warn!("[HTTP] Server stopped with error: {error}"),
                Err(error) => warn!("[HTTP] Server task failed: {error}"),
            }
            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
