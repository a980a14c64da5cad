pub mod auth_service;
pub mod car_service;
pub mod catalog_service;
pub mod record_service;
pub mod report_service;
pub mod user_service;
