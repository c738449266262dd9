use actix_web::{error, web};

use crate::errors::AppError;

pub mod analytics;
pub mod auth;
pub mod bookmark;
pub mod department;
pub mod employee;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string()))),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string()))),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string()))),
    )
    .service(
        web::resource("/v1/auth")
            .route(web::post().to(auth::login))
            .route(web::get().to(auth::status))
            .route(web::delete().to(auth::logout)),
    )
    .service(
        web::resource("/v1/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/v1/employee/load")
            .route(web::post().to(employee::load_more)),
    )
    .service(
        web::resource("/v1/employee/reset")
            .route(web::post().to(employee::reset_listing)),
    )
    .service(
        web::resource("/v1/employee/{id}")
            .route(web::get().to(employee::get_employee)),
    )
    .service(
        web::resource("/v1/department")
            .route(web::get().to(department::get_departments)),
    )
    .service(
        web::resource("/v1/bookmark")
            .route(web::get().to(bookmark::get_bookmarks))
            .route(web::post().to(bookmark::add_bookmark)),
    )
    .service(
        web::resource("/v1/bookmark/{id}")
            .route(web::delete().to(bookmark::remove_bookmark)),
    )
    .service(
        web::resource("/v1/analytics")
            .route(web::get().to(analytics::get_analytics)),
    );
}
