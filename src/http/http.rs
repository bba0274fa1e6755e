use crate::cache::errors::CacheError;
use crate::node::structs::edge_node::EdgeNode;
use crate::router::enums::route_decision::RouteDecision;
use crate::router::router::route_request;
use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::master::handler::control_handler;
use actix_cors::Cors;
use actix_web::dev::ServerHandle;
use actix_web::http::header::{
    HttpDate,
    LastModified,
    LOCATION
};
use actix_web::web::{
    Data,
    ServiceConfig
};
use actix_web::{
    http,
    web,
    App,
    HttpRequest,
    HttpResponse,
    HttpServer
};
use bytes::Bytes;
use log::{
    debug,
    error,
    info
};
use std::future::Future;
use std::net::{
    SocketAddr,
    TcpListener
};
use std::sync::Arc;
use std::time::{
    Duration,
    SystemTime
};

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "HEAD"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::IF_MODIFIED_SINCE])
        .max_age(3600)
}

pub fn http_service_routes(data: Arc<EdgeNode>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        let peer_route = format!("{}{}/{{key:.*}}", data.config.cache.peer_path, data.config.cache.group);
        cfg.service(web::resource(peer_route).route(web::get().to(http_service_peer)));
        if data.is_master() {
            cfg.service(web::resource(data.config.cluster.control_path.clone()).route(web::get().to(control_handler)));
        }
        cfg.default_service(web::route().to(http_service_asset));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<EdgeNode>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let listener = TcpListener::bind(addr)?;
    http_service_listen(listener, data).await
}

/// Runs the HTTP service on an already bound listener.
pub async fn http_service_listen(
    listener: TcpListener,
    data: Arc<EdgeNode>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let node_config = data.config.node.clone();
    info!("[HTTP] Starting server listener on {}", listener.local_addr()?);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(node_config.keep_alive))
        .client_request_timeout(Duration::from_secs(node_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(node_config.disconnect_timeout))
        .workers(node_config.threads.max(1) as usize)
        .max_connections(node_config.max_connections as usize)
        .listen(listener)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_asset(request: HttpRequest, data: Data<Arc<EdgeNode>>) -> HttpResponse
{
    let key = request.path();
    match route_request(&data, key, request.query_string()) {
        RouteDecision::Redirect(target) => {
            debug!("[HTTP] Redirecting {key} to {target}");
            data.update_stats(StatsEvent::Redirects, 1);
            HttpResponse::Found()
                .insert_header((LOCATION, target))
                .finish()
        }
        RouteDecision::ServeLocal => {
            let _guard = data.drain.begin();
            let result = data.cache.get(key).await;
            http_service_asset_response(&data, key, result)
        }
    }
}

pub async fn http_service_peer(path: web::Path<String>, data: Data<Arc<EdgeNode>>) -> HttpResponse
{
    let key = format!("/{}", path.into_inner());
    data.update_stats(StatsEvent::PeerFetches, 1);
    let _guard = data.drain.begin();
    let result = data.cache.get_local(&key).await;
    http_service_asset_response(&data, &key, result)
}

pub fn http_service_asset_response(data: &EdgeNode, key: &str, result: Result<Bytes, CacheError>) -> HttpResponse
{
    match result {
        Ok(bytes) => {
            data.update_stats(StatsEvent::ServedLocal, 1);
            let content_type = mime_guess::from_path(key).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(content_type.to_string())
                .insert_header(LastModified(HttpDate::from(SystemTime::now())))
                .body(bytes)
        }
        Err(e) => {
            data.update_stats(StatsEvent::ServeFailures, 1);
            error!("[HTTP] Unable to serve {key}: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string())
        }
    }
}
