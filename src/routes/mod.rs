pub mod auth;
pub mod health;
pub mod lists;
pub mod tasks;

use actix_web::web;

/// Registers every endpoint. Protection is applied by wrapping the app in
/// [`AuthMiddleware`](crate::auth::AuthMiddleware).
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::home)
        .service(health::health)
        .service(auth::login)
        .service(auth::register)
        .service(lists::get_lists)
        .service(lists::create_list)
        .service(lists::get_list_completion)
        .service(lists::update_list)
        .service(lists::delete_list)
        .service(tasks::filter_tasks)
        .service(tasks::update_task_status)
        .service(tasks::get_tasks)
        .service(tasks::create_task)
        .service(tasks::update_task)
        .service(tasks::delete_task);
}
