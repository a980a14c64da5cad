pub mod car;
pub mod service;
pub mod service_record;
pub mod user;
