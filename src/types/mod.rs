pub mod error;
pub mod note;
pub mod response;
pub mod ticket;
pub mod token;
pub mod user;
