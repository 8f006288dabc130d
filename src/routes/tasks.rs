use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{StatusUpdate, TaskFilter, TaskInput},
    services::tasks,
    state::AppState,
};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

/// Retrieves the tasks of a list in insertion order.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `404 Not Found`: No list has this id.
#[get("/tasks/{list_id}")]
pub async fn get_tasks(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let store = state.store.read();
    let tasks = tasks::get_tasks(&store, list_id.into_inner())?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task at the end of a list.
///
/// ## Request Body:
/// - `title`, `description`, `partner`, `rol`: free text (required).
/// - `status` (optional): one of "Not started", "Started", "In review", "Rejected",
///   "Approved". Defaults to "Not started".
/// - `progress` (optional): one of "0%", "25", "50%", "75", "100%". Defaults to "0%".
/// - `priority` (optional): one of "Very low", "Low", "Medium", "High", "Very high".
///   Defaults to "Medium".
/// - `assigned_to` (optional): an existing username. Defaults to the caller.
///
/// ## Responses:
/// - `200 OK`: Returns the created `Task`.
/// - `400 Bad Request`: Status, progress or priority outside its enumeration (checked in
///   that order).
/// - `404 Not Found`: Unknown assignee or list.
#[post("/tasks/{list_id}/")]
pub async fn create_task(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks::create_task(
        &mut state.store.write(),
        list_id.into_inner(),
        task_data.into_inner(),
        &user.0,
    )?;
    Ok(HttpResponse::Ok().json(task))
}

/// Replaces a task, keeping its id and position.
///
/// Takes the same body as `create_task`.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task`.
/// - `400 Bad Request`: Invalid status, progress or priority.
/// - `404 Not Found`: Unknown assignee or task.
#[put("/tasks/{task_id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks::update_task(
        &mut state.store.write(),
        task_id.into_inner(),
        task_data.into_inner(),
        &user.0,
    )?;
    Ok(HttpResponse::Ok().json(task))
}

/// Changes only the status of a task. Body: `{"status": "..."}`.
#[patch("/tasks/status/{task_id}")]
pub async fn update_task_status(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
    body: web::Json<StatusUpdate>,
) -> Result<impl Responder, AppError> {
    let task = tasks::update_task_status(
        &mut state.store.write(),
        task_id.into_inner(),
        &body.status,
    )?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task from whichever list holds it.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `404 Not Found`: No task has this id.
#[delete("/tasks/{task_id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    tasks::delete_task(&mut state.store.write(), task_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Tasks of a list narrowed by status and/or priority.
///
/// ## Query Parameters:
/// - `status` (optional): keep tasks with exactly this status.
/// - `priority` (optional): keep tasks with exactly this priority.
///
/// Both filters combine with AND; with neither, the whole list is returned.
#[get("/tasks/filter/{list_id}")]
pub async fn filter_tasks(
    state: web::Data<AppState>,
    list_id: web::Path<Uuid>,
    query_params: web::Query<TaskFilter>,
) -> Result<impl Responder, AppError> {
    let tasks = tasks::filter_tasks(&state.store.read(), list_id.into_inner(), &query_params)?;
    Ok(HttpResponse::Ok().json(tasks))
}
