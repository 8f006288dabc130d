use crate::{
    auth::{generate_token, hash_password, LoginRequest, TokenResponse},
    error::AppError,
    models::UserInput,
    services::users,
    state::AppState,
};
use actix_web::{post, web, Either, HttpResponse, Responder};
use log::info;
use validator::Validate;

/// Login user
///
/// Verifies a username/password pair and returns a bearer token. Credentials are read
/// from a JSON body or from an OAuth2-style form.
///
/// ## Responses:
/// - `200 OK`: `{"access_token": "...", "token_type": "bearer"}`.
/// - `401 Unauthorized`: Unknown username or wrong password (same message for both).
/// - `422 Unprocessable Entity`: Empty username or password.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
) -> Result<impl Responder, AppError> {
    let credentials = credentials.into_inner();
    credentials.validate()?;

    // bcrypt runs on the blocking pool.
    let verifier = state.clone();
    let user = web::block(move || {
        users::authenticate(&verifier.store, &credentials.username, &credentials.password)
    })
    .await??;

    let token = generate_token(&user.username, &state.auth)?;
    info!("User '{}' logged in", user.username);
    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

/// Register a new user
///
/// ## Responses:
/// - `201 Created`: The new user (without password material).
/// - `400 Bad Request`: The username is already taken.
/// - `422 Unprocessable Entity`: Payload validation failed.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;
    let input = register_data.into_inner();

    let password = input.password.clone();
    let password_hash = web::block(move || hash_password(&password)).await??;

    let user = users::create_user(&mut state.store.write(), input, password_hash)?;
    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthSettings;
    use crate::store::Store;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Store::new(), AuthSettings::new("secret", 30)))
    }

    #[actix_rt::test]
    async fn test_register_validation() {
        let app = test::init_service(App::new().app_data(state()).service(register)).await;

        for payload in [
            json!({"username": "ab", "password": "password123"}),
            json!({"username": "bad name!", "password": "password123"}),
            json!({"username": "jane", "email": "invalid-email", "password": "password123"}),
            json!({"username": "jane", "password": "short"}),
        ] {
            let req = test::TestRequest::post()
                .uri("/register")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "payload {} should be rejected",
                payload
            );
        }
    }

    #[actix_rt::test]
    async fn test_login_validation() {
        let app = test::init_service(App::new().app_data(state()).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "", "password": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_rt::test]
    async fn test_login_unknown_user() {
        let app = test::init_service(App::new().app_data(state()).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "ghost"), ("password", "boo")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
