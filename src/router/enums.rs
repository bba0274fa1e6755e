pub mod route_decision;
