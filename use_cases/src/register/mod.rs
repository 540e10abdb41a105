use crate::password::PasswordHasher;
use crate::repositories::{CreateUserError, UsersRepo};
use async_trait::async_trait;
use entities::users::{NewUser, User, UserEmail, UserName};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("email is already in use")]
    EmailAlreadyInUse,
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[async_trait]
pub trait RegisterInteractor: Send + Sync {
    async fn register(&self, input: RegisterInput) -> Result<User, RegisterError>;
}

pub struct RegisterInteractorImpl {
    users: Arc<dyn UsersRepo>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterInteractorImpl {
    pub fn new(users: Arc<dyn UsersRepo>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users,
            password_hasher,
        }
    }
}

#[async_trait]
impl RegisterInteractor for RegisterInteractorImpl {
    #[tracing::instrument(err, skip(self, input), level = "info")]
    async fn register(&self, input: RegisterInput) -> Result<User, RegisterError> {
        let name = UserName::try_from(input.name).map_err(RegisterError::Validation)?;
        let email = UserEmail::try_from(input.email).map_err(RegisterError::Validation)?;

        let password_hash = self.password_hasher.hash(&input.password)?;

        self.users
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await
            .map_err(|err| match err {
                CreateUserError::EmailTaken => RegisterError::EmailAlreadyInUse,
                CreateUserError::InternalServerError(err) => {
                    RegisterError::InternalServerError(err)
                }
            })
    }
}
