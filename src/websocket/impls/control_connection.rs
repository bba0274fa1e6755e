use crate::common::common::{
    constant_time_eq,
    join_peers
};
use crate::node::structs::edge_node::EdgeNode;
use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::encoding::encoder::{
    decode_binary,
    decode_text,
    encode_message
};
use crate::websocket::enums::control_error::ControlError;
use crate::websocket::enums::control_frame::ControlFrame;
use crate::websocket::enums::control_message::ControlMessage;
use crate::websocket::structs::control_connection::ControlConnection;
use actix::{
    Actor,
    ActorContext,
    AsyncContext,
    StreamHandler
};
use actix_web_actors::ws;
use futures_util::stream;
use log::{
    debug,
    error,
    info,
    warn
};
use std::net::{
    IpAddr,
    SocketAddr
};
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;
use uuid::Uuid;

impl ControlConnection {
    pub fn new(node: Arc<EdgeNode>, remote_ip: Option<IpAddr>) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            node,
            connection_id: Uuid::new_v4(),
            remote_ip,
            identity: None,
            sender,
            receiver: Some(receiver),
        }
    }

    fn write(&self, ctx: &mut ws::WebsocketContext<Self>, message: &ControlMessage) {
        match encode_message(&self.node.config.cluster.encoding, message) {
            Ok(ControlFrame::Text(text)) => ctx.text(text),
            Ok(ControlFrame::Binary(data)) => ctx.binary(data),
            Err(e) => error!("[CLUSTER MASTER] Failed to encode {message:?}: {e}"),
        }
    }

    fn reject(&mut self, ctx: &mut ws::WebsocketContext<Self>, reason: &str) {
        warn!("[CLUSTER MASTER] Rejected control connection from {:?}: {reason}", self.remote_ip);
        self.node.update_stats(StatsEvent::WsAuthFailed, 1);
        ctx.close(Some(ws::CloseCode::Policy.into()));
        ctx.stop();
    }

    fn handle_frame(&mut self, ctx: &mut ws::WebsocketContext<Self>, decoded: Result<ControlMessage, ControlError>, text: bool) {
        let message = match decoded {
            Ok(message) => message,
            Err(e) if self.identity.is_none() => {
                self.reject(ctx, &e.to_string());
                return;
            }
            Err(e) => {
                warn!("[CLUSTER MASTER] Undecodable frame from {:?}: {e}", self.identity);
                return;
            }
        };

        match message {
            ControlMessage::LOGIN { token, port } if text => self.handle_login(ctx, &token, port),
            ControlMessage::LOGIN { .. } if self.identity.is_none() => self.reject(ctx, "LOGIN must be a text frame"),
            _ if self.identity.is_none() => self.reject(ctx, "first frame must be LOGIN"),
            other => debug!("[CLUSTER MASTER] Ignoring {other:?} from {:?}", self.identity),
        }
    }

    fn handle_login(&mut self, ctx: &mut ws::WebsocketContext<Self>, token: &str, port: u16) {
        if !constant_time_eq(token, &self.node.config.node.token) {
            self.reject(ctx, "invalid token");
            return;
        }
        let Some(ip) = self.remote_ip else {
            self.reject(ctx, "unknown remote address");
            return;
        };
        let identity = format!("http://{}", SocketAddr::new(ip, port));
        let registry = &self.node.registry;

        if let Some(previous) = self.identity.take()
            && previous != identity
            && registry.release(&previous, self.connection_id)
        {
            info!("[CLUSTER MASTER] {previous} logged in again as {identity}");
        }

        let before = registry.keys();
        registry.add(&identity, self.connection_id, self.sender.clone());
        self.identity = Some(identity.clone());
        self.node.update_stats(StatsEvent::WsAuthSuccess, 1);
        info!("[CLUSTER MASTER] Slave {identity} joined, {} slave(s) connected", registry.len());

        let ack = ControlMessage::LOGIN_ACK {
            self_identity: identity.clone(),
            peers: join_peers(&registry.keys()),
            mirror: self.node.config.node.mirror.clone(),
        };
        self.write(ctx, &ack);

        let targets: Vec<String> = before.into_iter().filter(|key| key != &identity).collect();
        self.node.broadcast_peer_update(&targets);
    }
}

impl Actor for ControlConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        debug!("[CLUSTER MASTER] Control connection {} started", self.connection_id);
        self.node.update_stats(StatsEvent::WsConnectionsActive, 1);
        if let Some(receiver) = self.receiver.take() {
            ctx.add_stream(stream::unfold(receiver, |mut receiver| async move {
                receiver.recv().await.map(|message| (message, receiver))
            }));
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.node.update_stats(StatsEvent::WsConnectionsActive, -1);
        let Some(identity) = self.identity.take() else {
            debug!("[CLUSTER MASTER] Control connection {} stopped before login", self.connection_id);
            return;
        };
        if self.node.registry.release(&identity, self.connection_id) {
            info!("[CLUSTER MASTER] Slave {identity} left, {} slave(s) connected", self.node.registry.len());
            let remaining = self.node.registry.keys();
            self.node.broadcast_peer_update(&remaining);
        }
    }
}

/// Inbound frames from the slave.
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ControlConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => {
                let decoded = decode_text(&text);
                self.handle_frame(ctx, decoded, true);
            }
            Ok(ws::Message::Binary(data)) => {
                let decoded = decode_binary(&data);
                self.handle_frame(ctx, decoded, false);
            }
            Ok(ws::Message::Close(reason)) => {
                debug!("[CLUSTER MASTER] Close received: {reason:?}");
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[CLUSTER MASTER] WebSocket error: {e}");
                ctx.stop();
            }
            _ => {}
        }
    }
}

/// Outbound messages queued through the registry.
impl StreamHandler<ControlMessage> for ControlConnection {
    fn handle(&mut self, message: ControlMessage, ctx: &mut Self::Context) {
        self.write(ctx, &message);
    }

    fn finished(&mut self, _ctx: &mut Self::Context) {}
}
