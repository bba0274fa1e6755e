use crate::node::structs::edge_node::EdgeNode;
use crate::router::enums::route_decision::RouteDecision;

pub fn route_request(node: &EdgeNode, path: &str, query: &str) -> RouteDecision
{
    if !node.is_master() {
        return RouteDecision::ServeLocal;
    }
    match node.registry.peek_one() {
        Ok(slave) => {
            let mut target = format!("{}{}", slave.trim_end_matches('/'), path);
            if !query.is_empty() {
                target.push('?');
                target.push_str(query);
            }
            RouteDecision::Redirect(target)
        }
        Err(_) => RouteDecision::ServeLocal,
    }
}
