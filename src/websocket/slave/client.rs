use crate::common::common::split_peers;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::node::structs::edge_node::EdgeNode;
use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::encoding::encoder::{
    decode_binary,
    decode_text,
    encode_message
};
use crate::websocket::enums::control_error::ControlError;
use crate::websocket::enums::control_message::ControlMessage;
use crate::websocket::structs::session_info::SessionInfo;
use futures_util::{
    SinkExt,
    StreamExt
};
use log::{
    debug,
    error,
    info,
    warn
};
use reqwest::Url;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{
    connect_async,
    MaybeTlsStream,
    WebSocketStream
};

pub type ControlStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Turns the master's base URL into its control endpoint URL.
pub fn control_url(upstream: &str, control_path: &str) -> Result<Url, ControlError> {
    let mut url = Url::parse(upstream).map_err(|e| ControlError::Url(format!("{upstream}: {e}")))?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(ControlError::Url(format!("{upstream}: unsupported scheme {other}"))),
    };
    url.set_scheme(scheme).map_err(|_| ControlError::Url(upstream.to_string()))?;
    url.set_path(control_path);
    url.set_query(None);
    Ok(url)
}

/// Dials the master, logs in and applies the returned session to the node.
pub async fn connect_to_master(
    node: &Arc<EdgeNode>,
    upstream: &str,
    token: &str,
    port: u16,
) -> Result<(SessionInfo, ControlStream), ControlError> {
    let url = control_url(upstream, &node.config.cluster.control_path)?;
    info!("[CLUSTER SLAVE] Connecting to master: {url}");

    let (mut stream, _) = connect_async(url.as_str()).await?;

    let login = ControlMessage::LOGIN { token: token.to_string(), port };
    stream.send(encode_message(&ClusterEncoding::json, &login)?.into()).await?;

    let reply = loop {
        match stream.next().await {
            Some(Ok(Message::Text(text))) => break decode_text(text.as_str()),
            Some(Ok(Message::Binary(data))) => break decode_binary(&data),
            Some(Ok(Message::Close(_))) | None => {
                return Err(ControlError::Protocol(String::from("connection closed during login")));
            }
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(ControlError::Protocol(format!("connection failed during login: {e}"))),
        }
    };

    let session = match reply {
        Ok(ControlMessage::LOGIN_ACK { self_identity, peers, mirror }) if !self_identity.is_empty() => SessionInfo {
            self_identity,
            peers: split_peers(&peers),
            mirror,
        },
        Ok(ControlMessage::LOGIN_ACK { .. }) => {
            return Err(ControlError::Protocol(String::from("LOGIN_ACK without self identity")));
        }
        Ok(other) => return Err(ControlError::Protocol(format!("expected LOGIN_ACK, got {other:?}"))),
        Err(e) => return Err(ControlError::Protocol(format!("unreadable login reply: {e}"))),
    };

    node.set_self_identity(&session.self_identity);
    node.cache.set_self(&session.self_identity);
    if session.mirror.is_empty() {
        warn!("[CLUSTER SLAVE] Master sent no mirror URL");
    } else if let Err(e) = node.cache.set_origin(&session.mirror) {
        error!("[CLUSTER SLAVE] Master sent an unusable mirror URL: {e}");
    }
    node.cache.set_peers(&session.peers);

    Ok((session, stream))
}

/// Applies every `PEER_UPDATE` until the connection drops. Always ends in
/// [`ControlError::ConnectionLost`].
pub async fn receive_peer_updates(node: &Arc<EdgeNode>, stream: &mut ControlStream) -> ControlError {
    while let Some(message) = stream.next().await {
        let decoded = match message {
            Ok(Message::Text(text)) => decode_text(text.as_str()),
            Ok(Message::Binary(data)) => decode_binary(&data),
            Ok(Message::Close(frame)) => {
                return ControlError::ConnectionLost(format!("closed by master ({frame:?})"));
            }
            Ok(_) => continue,
            Err(e) => return ControlError::ConnectionLost(e.to_string()),
        };
        match decoded {
            Ok(ControlMessage::PEER_UPDATE { peers }) => {
                let peers = split_peers(&peers);
                info!("[CLUSTER SLAVE] Peer set updated: {} peer(s)", peers.len());
                node.cache.set_peers(&peers);
            }
            Ok(other) => debug!("[CLUSTER SLAVE] Ignoring {other:?}"),
            Err(e) => warn!("[CLUSTER SLAVE] Undecodable frame from master: {e}"),
        }
    }
    ControlError::ConnectionLost(String::from("stream ended"))
}

/// Keeps the slave logged in to its master until `shutdown` turns true.
/// Every failure waits the reconnect interval and starts over.
pub async fn start_slave_client(node: Arc<EdgeNode>, mut shutdown: watch::Receiver<bool>)
{
    let upstream = node.config.node.upstream.clone();
    let token = node.config.node.token.clone();
    let reconnect_interval = node.config.cluster.reconnect_interval();
    let port = match node.config.bind_address() {
        Ok(address) => address.port(),
        Err(e) => {
            error!("[CLUSTER SLAVE] Unable to determine the local port: {e}");
            return;
        }
    };

    info!("[CLUSTER SLAVE] Starting slave client, master: {upstream}");

    let mut attempts: u64 = 0;
    loop {
        if *shutdown.borrow() {
            break;
        }
        if attempts > 0 {
            node.update_stats(StatsEvent::WsReconnects, 1);
        }
        attempts += 1;

        let connected = tokio::select! {
            result = connect_to_master(&node, &upstream, &token, port) => result,
            _ = shutdown.changed() => break,
        };

        match connected {
            Ok((session, mut stream)) => {
                info!(
                    "[CLUSTER SLAVE] Logged in as {} with {} peer(s)",
                    session.self_identity, session.peers.len()
                );
                node.update_stats(StatsEvent::WsAuthSuccess, 1);
                node.update_stats(StatsEvent::WsConnectionsActive, 1);

                let lost = tokio::select! {
                    e = receive_peer_updates(&node, &mut stream) => Some(e),
                    _ = shutdown.changed() => None,
                };
                node.update_stats(StatsEvent::WsConnectionsActive, -1);

                match lost {
                    Some(e) => warn!("[CLUSTER SLAVE] {e}"),
                    None => {
                        let _ = stream.close(None).await;
                        break;
                    }
                }
            }
            Err(e) => error!("[CLUSTER SLAVE] {e}"),
        }

        info!("[CLUSTER SLAVE] Reconnecting in {} seconds...", reconnect_interval.as_secs());
        tokio::select! {
            _ = tokio::time::sleep(reconnect_interval) => {}
            _ = shutdown.changed() => break,
        }
    }

    info!("[CLUSTER SLAVE] Slave client stopped");
}
