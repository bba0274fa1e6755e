use crate::node::structs::edge_node::EdgeNode;
use crate::websocket::structs::control_connection::ControlConnection;
use actix_web::{
    web,
    Error,
    HttpRequest,
    HttpResponse
};
use actix_web_actors::ws;
use std::sync::Arc;

/// Upgrades a request on the control path to a slave control connection.
pub async fn control_handler(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<Arc<EdgeNode>>,
) -> Result<HttpResponse, Error> {
    let remote_ip = req.peer_addr().map(|addr| addr.ip());
    let connection = ControlConnection::new(data.get_ref().clone(), remote_ip);
    ws::start(connection, &req, stream)
}
