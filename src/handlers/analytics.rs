use actix_web::{web, HttpResponse};

use crate::models::analytics::AnalyticsReport;
use crate::state::AppState;
use crate::utils::session::require_session;

pub async fn get_analytics(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    Ok(HttpResponse::Ok().json(AnalyticsReport::mock(state.favorites.len())))
}
