//! In-process repository double backed by ordered `Vec`s, mirroring the
//! contracts the Postgres adapter honors, including the daily-uniqueness
//! constraint on check-ins.

use crate::repositories::{
    CheckInsRepo, CreateCheckInError, CreateUserError, GymsRepo, UsersRepo, ITEMS_PER_PAGE,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use entities::check_ins::{CheckIn, CheckInId, NewCheckIn};
use entities::gyms::{Gym, GymId, NewGym};
use entities::users::{NewUser, User, UserEmail, UserId};
use shared_kernel::date_time::{Clock, FixedClock};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct InMemoryRepository {
    users: Arc<Mutex<Vec<User>>>,
    gyms: Arc<Mutex<Vec<Gym>>>,
    check_ins: Arc<Mutex<Vec<CheckIn>>>,
    clock: Arc<FixedClock>,
}

impl InMemoryRepository {
    pub fn new(clock: Arc<FixedClock>) -> Self {
        Self {
            users: Arc::default(),
            gyms: Arc::default(),
            check_ins: Arc::default(),
            clock,
        }
    }

    pub fn add_gym(&self, gym: Gym) {
        self.gyms.lock().unwrap().push(gym);
    }

    pub fn users_stored(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn check_ins_stored(&self) -> usize {
        self.check_ins.lock().unwrap().len()
    }
}

#[async_trait]
impl UsersRepo for InMemoryRepository {
    async fn find_by_email(&self, email: &UserEmail) -> anyhow::Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, CreateUserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(CreateUserError::EmailTaken);
        }

        let user = User {
            id: UserId::new(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: self.clock.now(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl GymsRepo for InMemoryRepository {
    async fn find_by_id(&self, id: GymId) -> anyhow::Result<Option<Gym>> {
        let gyms = self.gyms.lock().unwrap();
        Ok(gyms.iter().find(|gym| gym.id == id).cloned())
    }

    async fn search_many(&self, query: &str, page: u32) -> anyhow::Result<Vec<Gym>> {
        let query = query.to_lowercase();
        let gyms = self.gyms.lock().unwrap();
        Ok(gyms
            .iter()
            .filter(|gym| gym.title.as_ref().to_lowercase().contains(&query))
            .skip(page_offset(page))
            .take(ITEMS_PER_PAGE as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, gym: NewGym) -> anyhow::Result<Gym> {
        let gym = Gym {
            id: GymId::new(),
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            position: gym.position,
        };
        self.gyms.lock().unwrap().push(gym.clone());
        Ok(gym)
    }
}

#[async_trait]
impl CheckInsRepo for InMemoryRepository {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, CreateCheckInError> {
        let created_at = self.clock.now();
        let mut check_ins = self.check_ins.lock().unwrap();

        let same_day_exists = check_ins.iter().any(|existing| {
            existing.user_id == check_in.user_id
                && existing.created_at.date_naive() == created_at.date_naive()
        });
        if same_day_exists {
            return Err(CreateCheckInError::AlreadyCheckedIn);
        }

        let check_in = CheckIn {
            id: CheckInId::new(),
            user_id: check_in.user_id,
            gym_id: check_in.gym_id,
            created_at,
            validated_at: None,
        };
        check_ins.push(check_in.clone());
        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> anyhow::Result<Option<CheckIn>> {
        let check_ins = self.check_ins.lock().unwrap();
        Ok(check_ins
            .iter()
            .find(|check_in| {
                check_in.user_id == user_id && check_in.created_at.date_naive() == date
            })
            .cloned())
    }

    async fn count_by_user_id(&self, user_id: UserId) -> anyhow::Result<u64> {
        let check_ins = self.check_ins.lock().unwrap();
        Ok(check_ins
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .count() as u64)
    }

    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        page: u32,
    ) -> anyhow::Result<Vec<CheckIn>> {
        let check_ins = self.check_ins.lock().unwrap();
        Ok(check_ins
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .skip(page_offset(page))
            .take(ITEMS_PER_PAGE as usize)
            .cloned()
            .collect())
    }
}

// Widened before multiplying, like the SQL adapter's OFFSET computation,
// so absurd page numbers yield an empty page instead of overflowing.
fn page_offset(page: u32) -> usize {
    page.saturating_sub(1) as usize * ITEMS_PER_PAGE as usize
}
