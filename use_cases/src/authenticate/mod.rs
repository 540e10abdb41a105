use crate::password::PasswordHasher;
use crate::repositories::UsersRepo;
use async_trait::async_trait;
use entities::users::{User, UserEmail};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug)]
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

#[derive(Error, Debug)]
pub enum AuthenticateError {
    /// Covers an unknown email and a wrong password alike, so a caller
    /// cannot probe which accounts exist.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[async_trait]
pub trait AuthenticateInteractor: Send + Sync {
    async fn authenticate(&self, input: AuthenticateInput) -> Result<User, AuthenticateError>;
}

pub struct AuthenticateInteractorImpl {
    users: Arc<dyn UsersRepo>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthenticateInteractorImpl {
    pub fn new(users: Arc<dyn UsersRepo>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users,
            password_hasher,
        }
    }
}

#[async_trait]
impl AuthenticateInteractor for AuthenticateInteractorImpl {
    #[tracing::instrument(err, skip(self, input), level = "info")]
    async fn authenticate(&self, input: AuthenticateInput) -> Result<User, AuthenticateError> {
        // A malformed email cannot belong to any account.
        let email = UserEmail::try_from(input.email)
            .map_err(|_| AuthenticateError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthenticateError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(&input.password, &user.password_hash)?;
        if !password_matches {
            return Err(AuthenticateError::InvalidCredentials);
        }

        Ok(user)
    }
}
