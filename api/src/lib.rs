pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
