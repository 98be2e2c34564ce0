pub mod entities;
pub mod health_check;
pub mod routes;
pub mod write_message;
