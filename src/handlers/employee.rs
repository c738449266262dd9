use actix_web::{web, HttpResponse};
use log::info;

use crate::listing::LoadOutcome;
use crate::models::draft::EmployeeDraft;
use crate::models::employee::{derived_rating, EmployeeDetail, EmployeeDetailResponse, RatedEmployee};
use crate::state::AppState;
use crate::utils::session::require_session;
use crate::utils::validation::parse_filter_query;

pub async fn get_employees(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    let filter = parse_filter_query(&query)?;

    // Nothing on screen yet: the first read pulls the first page.
    state.listing.load_initial_page().await;

    state.listing.apply_filter(&filter.search, filter.departments, filter.ratings);
    Ok(HttpResponse::Ok().json(state.listing.snapshot()))
}

pub async fn load_more(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    if let LoadOutcome::Stale = state.listing.load_next_page().await {
        info!("Load finished after a reset; page discarded");
    }
    Ok(HttpResponse::Ok().json(state.listing.snapshot()))
}

pub async fn reset_listing(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    state.listing.reset();
    Ok(HttpResponse::Ok().json(state.listing.snapshot()))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    draft: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    let record = state.listing.create_record(draft.into_inner())?;
    Ok(HttpResponse::Created().json(RatedEmployee::from(&record)))
}

pub async fn get_employee(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, actix_web::Error> {
    require_session(&state)?;

    let id = id.into_inner();
    // Ids handed out by the create dialog are unknown to the directory and
    // may even shadow one of its own.
    let local = if state.listing.is_local(id) {
        state.listing.get(id)
    } else {
        None
    };
    let detail = match local {
        Some(record) => EmployeeDetail::from(&record),
        None => state.listing.source().fetch_detail(id).await?,
    };

    Ok(HttpResponse::Ok().json(EmployeeDetailResponse {
        rating: derived_rating(detail.id),
        bookmarked: state.favorites.contains(detail.id),
        detail,
    }))
}
