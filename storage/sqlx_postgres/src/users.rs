use crate::repository::{is_unique_violation, Repository};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::users::{NewUser, User, UserEmail, UserId, UserName};
use use_cases::repositories::{CreateUserError, UsersRepo};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let name = UserName::try_from(row.name).map_err(|err| anyhow!(err))?;
        let email = UserEmail::try_from(row.email).map_err(|err| anyhow!(err))?;
        Ok(User {
            id: row.id.into(),
            name,
            email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

#[async_trait]
impl UsersRepo for Repository {
    async fn find_by_email(&self, email: &UserEmail) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_ref())
        .fetch_optional(self.pool())
        .await
        .context("Failed to fetch user by email")?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.inner())
        .fetch_optional(self.pool())
        .await
        .context("Failed to fetch user by id")?;

        row.map(User::try_from).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, CreateUserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(UserId::new().inner())
        .bind(user.name.as_ref())
        .bind(user.email.as_ref())
        .bind(&user.password_hash)
        .fetch_one(self.pool())
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                CreateUserError::EmailTaken
            } else {
                CreateUserError::InternalServerError(
                    anyhow::Error::new(err).context("Failed to insert user"),
                )
            }
        })?;

        row.try_into().map_err(CreateUserError::InternalServerError)
    }
}
