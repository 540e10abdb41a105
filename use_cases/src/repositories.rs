use async_trait::async_trait;
use chrono::NaiveDate;
use entities::check_ins::{CheckIn, NewCheckIn};
use entities::gyms::{Gym, GymId, NewGym};
use entities::users::{NewUser, User, UserEmail, UserId};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Page size shared by every paged listing operation. Pages start at 1.
pub const ITEMS_PER_PAGE: u32 = 20;

#[derive(Error, Debug)]
pub enum CreateUserError {
    #[error("email is already taken")]
    EmailTaken,
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum CreateCheckInError {
    /// The storage-level daily-uniqueness constraint rejected the insert.
    #[error("a check-in already exists for this user on this date")]
    AlreadyCheckedIn,
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsersRepo: Send + Sync {
    async fn find_by_email(&self, email: &UserEmail) -> anyhow::Result<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;

    /// Assigns a fresh id and stamps the creation time. Duplicate emails
    /// surface as [`CreateUserError::EmailTaken`].
    async fn create(&self, user: NewUser) -> Result<User, CreateUserError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GymsRepo: Send + Sync {
    async fn find_by_id(&self, id: GymId) -> anyhow::Result<Option<Gym>>;

    /// Title search, case-insensitive, paged by [`ITEMS_PER_PAGE`].
    async fn search_many(&self, query: &str, page: u32) -> anyhow::Result<Vec<Gym>>;

    async fn create(&self, gym: NewGym) -> anyhow::Result<Gym>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CheckInsRepo: Send + Sync {
    /// Assigns a fresh id and stamps `created_at` with the current time.
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, CreateCheckInError>;

    /// The check-in, if any, whose `created_at` falls on `date` for the user.
    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> anyhow::Result<Option<CheckIn>>;

    async fn count_by_user_id(&self, user_id: UserId) -> anyhow::Result<u64>;

    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        page: u32,
    ) -> anyhow::Result<Vec<CheckIn>>;
}

pub trait Repository: UsersRepo + GymsRepo + CheckInsRepo + Clone {}

impl<T> Repository for T where T: UsersRepo + GymsRepo + CheckInsRepo + Clone {}
