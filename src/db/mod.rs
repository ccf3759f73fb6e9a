pub mod database_service;
pub mod note;
pub mod ticket;
pub mod user;
