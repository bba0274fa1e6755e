#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Send the client to this absolute URL with a 302.
    Redirect(String),
    ServeLocal,
}
