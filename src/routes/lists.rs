use crate::{
    error::AppError,
    models::{CompletionResponse, ListInput},
    services::lists,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::debug;
use uuid::Uuid;

/// Retrieves every list, each with its tasks, in creation order.
#[get("/lists")]
pub async fn get_lists(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let store = state.store.read();
    debug!("Listing {} list(s)", store.lists.len());
    Ok(HttpResponse::Ok().json(lists::get_lists(&store)))
}

/// Creates an empty list.
///
/// ## Request Body:
/// `{"name": "..."}`
///
/// ## Responses:
/// - `200 OK`: Returns the new list, including its generated `id`.
#[post("/list")]
pub async fn create_list(
    state: web::Data<AppState>,
    list_data: web::Json<ListInput>,
) -> Result<impl Responder, AppError> {
    let list = lists::create_list(&mut state.store.write(), list_data.into_inner());
    Ok(HttpResponse::Ok().json(list))
}

/// Renames a list.
///
/// ## Responses:
/// - `200 OK`: Returns the updated list with its tasks.
/// - `404 Not Found`: No list has this id.
#[put("/lists/{id}")]
pub async fn update_list(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
    list_data: web::Json<ListInput>,
) -> Result<impl Responder, AppError> {
    let list = lists::update_list(
        &mut state.store.write(),
        list_id.into_inner(),
        list_data.into_inner(),
    )?;
    Ok(HttpResponse::Ok().json(list))
}

/// Deletes a list and its tasks.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `404 Not Found`: No list has this id, including one already deleted.
#[delete("/lists/{id}")]
pub async fn delete_list(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    lists::delete_list(&mut state.store.write(), list_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Percentage of completed tasks in a list, e.g. `{"completion": "50%"}`.
#[get("/lists/completion/{id}")]
pub async fn get_list_completion(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let completion = lists::get_list_completion(&state.store.read(), list_id.into_inner())?;
    Ok(HttpResponse::Ok().json(CompletionResponse { completion }))
}
