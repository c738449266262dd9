use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;
use crate::utils::session::require_session;

pub async fn get_departments(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    Ok(HttpResponse::Ok().json(json!({
        "departments": state.listing.departments(),
    })))
}
