use log::info;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::auth::verify_password;
use crate::error::{AppError, AuthError, DomainError};
use crate::models::{User, UserInput};
use crate::store::Store;

pub fn get_user_by_username<'a>(store: &'a Store, username: &str) -> Result<&'a User, DomainError> {
    store
        .users
        .iter()
        .find(|user| user.username == username)
        .ok_or(DomainError::UserNotFound)
}

/// Registers a new user. `password_hash` must already be a bcrypt hash of `input.password`.
pub fn create_user(
    store: &mut Store,
    input: UserInput,
    password_hash: String,
) -> Result<User, DomainError> {
    if get_user_by_username(store, &input.username).is_ok() {
        return Err(DomainError::UserAlreadyExists(input.username));
    }

    let user = User {
        id: Uuid::new_v4(),
        username: input.username,
        full_name: input.full_name,
        email: input.email,
        password_hash,
    };
    store.users.push(user.clone());
    info!("Registered user '{}'", user.username);
    Ok(user)
}

/// Resolves a username/password pair to a user.
///
/// The user is copied out under a short read guard; the bcrypt check runs with the lock
/// released. An unknown username and a wrong password fail identically.
pub fn authenticate(
    store: &RwLock<Store>,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = get_user_by_username(&store.read(), username)
        .map(User::clone)
        .map_err(|_| AuthError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn input(username: &str) -> UserInput {
        UserInput {
            username: username.to_string(),
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            password: "secret1".to_string(),
        }
    }

    #[test_log::test]
    fn test_create_and_lookup_user() {
        let mut store = Store::new();
        let created = create_user(&mut store, input("jane"), "hash".to_string()).unwrap();

        let found = get_user_by_username(&store, "jane").unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_unknown_username() {
        let store = Store::new();
        assert_eq!(
            get_user_by_username(&store, "ghost"),
            Err(DomainError::UserNotFound)
        );
    }

    #[test]
    fn test_duplicate_username_is_rejected() {
        let mut store = Store::new();
        create_user(&mut store, input("jane"), "hash".to_string()).unwrap();

        assert_eq!(
            create_user(&mut store, input("jane"), "hash".to_string()),
            Err(DomainError::UserAlreadyExists("jane".to_string()))
        );
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn test_authenticate() {
        let mut store = Store::new();
        let hash = hash_password("secret1").unwrap();
        create_user(&mut store, input("jane"), hash).unwrap();
        let store = RwLock::new(store);

        let user = authenticate(&store, "jane", "secret1").unwrap();
        assert_eq!(user.username, "jane");

        for (username, password) in [("jane", "wrong"), ("ghost", "secret1")] {
            match authenticate(&store, username, password) {
                Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid credentials"),
                other => panic!("Unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_writers_do_not_wait_for_password_verification() {
        let mut store = Store::new();
        let hash = hash_password("secret1").unwrap();
        create_user(&mut store, input("jane"), hash).unwrap();
        let store = Arc::new(RwLock::new(store));

        let login_store = Arc::clone(&store);
        let login = thread::spawn(move || authenticate(&login_store, "jane", "secret1"));
        thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        let mut guard = store.write();
        let waited = started.elapsed();
        assert!(
            !login.is_finished(),
            "verification finished before the write lock was taken"
        );
        create_user(&mut guard, input("john"), "hash".to_string()).unwrap();
        drop(guard);

        assert!(
            waited < Duration::from_millis(100),
            "writer waited {:?} for a concurrent login",
            waited
        );
        assert_eq!(login.join().unwrap().unwrap().username, "jane");
    }
}
