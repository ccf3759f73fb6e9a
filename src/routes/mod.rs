use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod note;
pub mod root;
pub mod ticket;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::with_fn(validate_token);

    // body and path failures share the error body shape
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(root::root);
    cfg.service(
        web::scope("/api/users")
            .service(user::register::register)
            .service(
                web::scope("/login")
                    .service(user::login::login)
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .wrap(user_auth.clone())
            )
    );
    cfg.service(
        web::scope("/api/tickets")
            .service(ticket::list::list_tickets)
            .service(ticket::create::create_ticket)
            .service(note::list::list_notes)
            .service(note::create::create_note)
            .service(ticket::get::get_ticket)
            .service(ticket::update::update_ticket)
            .service(ticket::delete::delete_ticket)
            .wrap(user_auth)
    );
}
