#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use tasklists::auth::{generate_token, AuthMiddleware};
use tasklists::config::AuthSettings;
use tasklists::models::{TaskList, User};
use tasklists::routes;
use tasklists::state::{AppState, DEFAULT_LIST_ID, DEFAULT_LIST_NAME};
use tasklists::store::Store;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration_test_secret";

/// bcrypt's minimum cost.
const TEST_BCRYPT_COST: u32 = 4;

/// A user whose password equals their username.
fn seeded_user(username: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        full_name: None,
        email: Some(format!("{}@example.com", username)),
        password_hash: bcrypt::hash(username, TEST_BCRYPT_COST).unwrap(),
    }
}

/// Fresh state with the default list and the users "admin" and "jane".
pub fn test_state() -> web::Data<AppState> {
    let store = Store {
        lists: vec![TaskList::with_id(DEFAULT_LIST_ID, DEFAULT_LIST_NAME)],
        users: vec![seeded_user("admin"), seeded_user("jane")],
    };
    web::Data::new(AppState::new(store, AuthSettings::new(JWT_SECRET, 30)))
}

pub async fn init_app(
    state: web::Data<AppState>,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(AuthMiddleware)
            .configure(routes::config),
    )
    .await
}

/// `Authorization` header value for a user, minted directly against the test secret.
pub fn bearer(username: &str) -> (header::HeaderName, String) {
    let settings = AuthSettings::new(JWT_SECRET, 30);
    let token = generate_token(username, &settings).unwrap();
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn task_payload(title: &str, status: &str, priority: &str) -> Value {
    json!({
        "title": title,
        "description": "Description",
        "partner": "Partner",
        "rol": "Rol",
        "status": status,
        "progress": "0%",
        "priority": priority
    })
}

/// Creates a list as "admin" and returns its id.
pub async fn create_list<S, B>(app: &S, name: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/list")
        .insert_header(bearer("admin"))
        .set_json(json!({ "name": name }))
        .to_request();
    let list: Value = test::call_and_read_body_json(app, req).await;
    list["id"].as_str().unwrap().to_string()
}

/// Creates a task as "admin" and returns the created task.
pub async fn create_task<S, B>(app: &S, list_id: &str, payload: &Value) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(&format!("/tasks/{}/", list_id))
        .insert_header(bearer("admin"))
        .set_json(payload)
        .to_request();
    test::call_and_read_body_json(app, req).await
}
