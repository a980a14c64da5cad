// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        auth_handlers, car_handlers, mw_admin, mw_auth, record_handlers, report_handlers,
        service_handlers,
    },
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    let require_auth =
        middleware::from_fn_with_state(app_state.clone(), mw_auth::require_auth);

    // /api/auth: register and login are public; /me needs a token and
    // /users additionally needs the admin role.
    let auth_routes = Router::new()
        .route("/me", get(auth_handlers::me))
        .merge(
            Router::new()
                .route("/users", get(auth_handlers::list_users))
                .route_layer(middleware::from_fn(mw_admin::require_admin)),
        )
        .route_layer(require_auth.clone())
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login));

    let car_routes = Router::new()
        .route(
            "/",
            get(car_handlers::list_cars).post(car_handlers::create_car),
        )
        .route(
            "/{plate_number}",
            get(car_handlers::get_car)
                .put(car_handlers::update_car)
                .delete(car_handlers::delete_car),
        );

    let service_routes = Router::new()
        .route(
            "/",
            get(service_handlers::list_services).post(service_handlers::create_service),
        )
        .route(
            "/{id}",
            get(service_handlers::get_service)
                .put(service_handlers::update_service)
                .delete(service_handlers::delete_service),
        );

    let record_routes = Router::new()
        .route(
            "/",
            get(record_handlers::list_records).post(record_handlers::create_record),
        )
        .route(
            "/{id}",
            get(record_handlers::get_record)
                .put(record_handlers::update_record)
                .delete(record_handlers::delete_record),
        )
        .route("/{id}/bill", get(record_handlers::get_bill));

    let report_routes = Router::new()
        .route("/daily", get(report_handlers::daily_report))
        .route("/range", get(report_handlers::range_report));

    // Every entity and report route sits behind the auth guard.
    let protected_routes = Router::new()
        .nest("/cars", car_routes)
        .nest("/services", service_routes)
        .nest("/service-records", record_routes)
        .nest("/reports", report_routes)
        .route_layer(require_auth);

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    Router::new()
        .route(
            "/",
            get(|| async { "SmartPark Car Repair Management System API" }),
        )
        .nest("/api", api_routes)
        .with_state(app_state)
}
