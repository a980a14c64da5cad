pub mod auth_handlers;
pub mod car_handlers;
pub mod mw_admin;
pub mod mw_auth;
pub mod record_handlers;
pub mod report_handlers;
pub mod routes;
pub mod service_handlers;
