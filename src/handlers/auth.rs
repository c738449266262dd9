use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::state::AppState;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, max = 128))]
    username: String,
    #[validate(length(min = 1, max = 128))]
    password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    authenticated: bool,
}

pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<AuthRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&req.0)?;

    if !state.session.login(&req.username, &req.password)? {
        return Err(AppError::Unauthorized("Invalid username or password".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(AuthResponse { authenticated: true }))
}

pub async fn status(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(AuthResponse {
        authenticated: state.session.is_signed_in(),
    }))
}

pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    state.session.logout()?;
    Ok(HttpResponse::Ok().json(AuthResponse { authenticated: false }))
}
