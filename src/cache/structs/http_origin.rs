use parking_lot::RwLock;
use reqwest::{
    Client,
    Url
};

/// Fetches assets from the mirror web server.
#[derive(Debug)]
pub struct HttpOrigin {
    pub client: Client,
    pub base: RwLock<Option<Url>>,
}
