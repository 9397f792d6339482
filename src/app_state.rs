use std::sync::Arc;

use crate::domain::{SessionStore, UserStore};
use crate::services::{ApiKeyValidator, PassportService, TokenCodec};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<dyn UserStore>;
pub type SessionStoreType = Arc<dyn SessionStore>;
pub type ConfigType = Arc<Config>;

/// Assembled once at startup and handed into the router; nothing in here is
/// ambient or global.
#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub user_store: UserStoreType,
    pub session_store: SessionStoreType,
    pub token_codec: TokenCodec,
    pub api_key_validator: ApiKeyValidator,
    pub passport_service: PassportService,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        user_store: UserStoreType,
        session_store: SessionStoreType,
    ) -> Self {
        let token_codec = TokenCodec::new(config.clone());
        let api_key_validator = ApiKeyValidator::new(token_codec.clone());
        let passport_service = PassportService::new(
            user_store.clone(),
            session_store.clone(),
            token_codec.clone(),
        );

        Self {
            config,
            user_store,
            session_store,
            token_codec,
            api_key_validator,
            passport_service,
        }
    }
}
