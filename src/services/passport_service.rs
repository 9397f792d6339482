/// Sign-in, refresh and sign-out orchestration.
///
/// The service owns no state of its own; it wires the token codec to the user
/// and session stores:
/// 1. `sign_in` -> verify credential, mint pair, persist session row
/// 2. `refresh_passport` -> verify + rotate: the old row dies and a new one is
///    born in one atomic step, so a stolen refresh token survives at most one
///    use
/// 3. `sign_out` -> drop the session row; both tokens die with it
///
/// Registration deliberately returns a passport with no token: issuing a
/// session is always an explicit sign-in.
use std::sync::Arc;

use tracing::error;

use crate::domain::{
    Email, NewUser, Passport, Password, SessionStore, SessionStoreError, TokenKind, TokenPair,
    User, UserRole, UserStore, UserStoreError, UserView,
};
use crate::errors::{
    AdminTokenError, ProfileError, RefreshError, SigninError, SignoutError, SignupError,
};
use crate::services::credentials;
use crate::services::token_codec::{TokenCodec, TokenError};

#[derive(Clone)]
pub struct PassportService {
    user_store: Arc<dyn UserStore>,
    session_store: Arc<dyn SessionStore>,
    token_codec: TokenCodec,
}

impl PassportService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        token_codec: TokenCodec,
    ) -> Self {
        Self {
            user_store,
            session_store,
            token_codec,
        }
    }

    /// Customer and admin registration differ only in the role written.
    pub async fn sign_up(
        &self,
        email: Email,
        username: String,
        password: Password,
        role: UserRole,
    ) -> Result<Passport, SignupError> {
        let password_hash = credentials::hash_password(password.as_ref())
            .await
            .map_err(|_| SignupError::InternalServerError)?;

        let ident = email.as_ref().to_string();
        let id = self
            .user_store
            .insert(NewUser {
                email,
                username,
                password_hash,
                role_id: role.role_id(),
            })
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => SignupError::UserAlreadyExists(ident),
                other => {
                    error!("user insert failed: {:?}", other);
                    SignupError::InternalServerError
                }
            })?;

        let user = self.user_store.find_by_id(&id).await.map_err(|e| {
            error!("fetching created user failed: {:?}", e);
            SignupError::InternalServerError
        })?;

        Ok(Passport {
            user: user.view(),
            token: None,
        })
    }

    pub async fn sign_in(&self, ident: &str, password: Password) -> Result<Passport, SigninError> {
        let user = match self.user_store.find_by_email_or_username(ident).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(SigninError::InvalidCredentials),
            Err(e) => {
                error!("user lookup failed: {:?}", e);
                return Err(SigninError::InternalServerError);
            }
        };

        let matches = credentials::verify_password(password.as_ref(), &user.password_hash)
            .await
            .map_err(|_| SigninError::InternalServerError)?;
        if !matches {
            return Err(SigninError::InvalidCredentials);
        }

        self.issue_passport(&user).await.map_err(|e| {
            error!("session insert failed: {:?}", e);
            SigninError::InternalServerError
        })
    }

    pub async fn refresh_passport(&self, refresh_token: &str) -> Result<Passport, RefreshError> {
        let claims = self
            .token_codec
            .verify(TokenKind::Refresh, refresh_token)
            .map_err(|e| match e {
                TokenError::Expired => RefreshError::Expired,
                _ => RefreshError::InvalidToken,
            })?;

        // Revocation enforcement: a verified token without a session row was
        // signed out or already rotated away.
        let record = self
            .session_store
            .find_by_refresh_token(refresh_token)
            .await
            .map_err(|e| match e {
                SessionStoreError::SessionNotFound => RefreshError::SessionNotFound,
                other => {
                    error!("session lookup failed: {:?}", other);
                    RefreshError::InternalServerError
                }
            })?;

        // Re-fetch so role changes land on the next refresh.
        let user = self
            .user_store
            .find_by_id(&claims.sub)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => RefreshError::SessionNotFound,
                other => {
                    error!("user lookup failed: {:?}", other);
                    RefreshError::InternalServerError
                }
            })?;

        let access_token = self
            .token_codec
            .sign(TokenKind::Access, &user.id, user.role_id)
            .map_err(|_| RefreshError::InternalServerError)?;
        let new_refresh_token = self
            .token_codec
            .sign(TokenKind::Refresh, &user.id, user.role_id)
            .map_err(|_| RefreshError::InternalServerError)?;

        let session_id = self
            .session_store
            .rotate(&record, &access_token, &new_refresh_token)
            .await
            .map_err(|e| match e {
                SessionStoreError::SessionNotFound => RefreshError::SessionNotFound,
                other => {
                    error!("session rotation failed: {:?}", other);
                    RefreshError::InternalServerError
                }
            })?;

        Ok(Passport {
            user: user.view(),
            token: Some(TokenPair {
                id: session_id,
                access_token,
                refresh_token: new_refresh_token,
            }),
        })
    }

    pub async fn sign_out(&self, session_id: &str) -> Result<(), SignoutError> {
        self.session_store
            .delete_by_id(session_id)
            .await
            .map_err(|e| match e {
                SessionStoreError::SessionNotFound => SignoutError::SessionNotFound,
                other => {
                    error!("session delete failed: {:?}", other);
                    SignoutError::InternalServerError
                }
            })
    }

    /// Out-of-band system token; never persisted, dies by expiry alone.
    pub fn generate_admin_token(&self) -> Result<String, AdminTokenError> {
        self.token_codec
            .sign_system(TokenKind::Admin)
            .map_err(|_| AdminTokenError::InternalServerError)
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<UserView, ProfileError> {
        match self.user_store.find_by_id(user_id).await {
            Ok(user) => Ok(user.view()),
            Err(UserStoreError::UserNotFound) => {
                Err(ProfileError::UserNotFound(user_id.to_string()))
            }
            Err(e) => {
                error!("user lookup failed: {:?}", e);
                Err(ProfileError::InternalServerError)
            }
        }
    }

    async fn issue_passport(&self, user: &User) -> Result<Passport, SessionStoreError> {
        let access_token = self
            .token_codec
            .sign(TokenKind::Access, &user.id, user.role_id)
            .map_err(|_| SessionStoreError::UnexpectedError)?;
        let refresh_token = self
            .token_codec
            .sign(TokenKind::Refresh, &user.id, user.role_id)
            .map_err(|_| SessionStoreError::UnexpectedError)?;

        let session_id = self
            .session_store
            .insert(&user.id, &access_token, &refresh_token)
            .await?;

        Ok(Passport {
            user: user.view(),
            token: Some(TokenPair {
                id: session_id,
                access_token,
                refresh_token,
            }),
        })
    }
}
