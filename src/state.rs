//! Shared application state handed to every handler through `web::Data`.

use log::info;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::auth::hash_password;
use crate::config::{AuthSettings, Config};
use crate::error::AppError;
use crate::models::{TaskList, User};
use crate::store::Store;

/// Id of the list every fresh process starts with.
pub const DEFAULT_LIST_ID: Uuid = Uuid::from_u128(0x123e4567_e89b_12d3_a456_426614174000);
pub const DEFAULT_LIST_NAME: &str = "Personal tasks";

/// Owns the store behind a single lock together with the token settings.
///
/// Readers share the lock; every mutation takes it exclusively, so concurrent workers
/// never observe a half-applied change. Guards must not be held across an `.await`.
pub struct AppState {
    pub store: RwLock<Store>,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(store: Store, auth: AuthSettings) -> Self {
        Self {
            store: RwLock::new(store),
            auth,
        }
    }

    /// Builds the startup state: the default list plus the configured administrator.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let admin = User {
            id: Uuid::new_v4(),
            username: config.admin.username.clone(),
            full_name: Some("Administrator".to_string()),
            email: Some("admin@example.com".to_string()),
            password_hash: hash_password(&config.admin.password)?,
        };
        info!("Seeding administrator account '{}'", admin.username);

        let store = Store {
            lists: vec![TaskList::with_id(DEFAULT_LIST_ID, DEFAULT_LIST_NAME)],
            users: vec![admin],
        };
        Ok(Self::new(store, config.auth.clone()))
    }
}
