use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::favorite::FavoriteRef;
use crate::state::AppState;
use crate::utils::session::require_session;
use crate::utils::validation::validate_payload;

pub async fn get_bookmarks(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    Ok(HttpResponse::Ok().json(state.favorites.list()))
}

pub async fn add_bookmark(
    state: web::Data<AppState>,
    favorite: web::Json<FavoriteRef>,
) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;
    validate_payload(&favorite.0)?;

    let favorite = favorite.into_inner();
    let id = favorite.id;
    if state.favorites.add(favorite)? {
        Ok(HttpResponse::Created().json(json!({ "id": id, "bookmarked": true })))
    } else {
        Ok(HttpResponse::Ok().json(json!({ "id": id, "bookmarked": true })))
    }
}

pub async fn remove_bookmark(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    let id = id.into_inner();
    let removed = state.favorites.remove(id)?;
    Ok(HttpResponse::Ok().json(json!({ "id": id, "removed": removed })))
}
