use crate::repositories::CheckInsRepo;
use async_trait::async_trait;
use entities::check_ins::CheckIn;
use entities::users::UserId;
use std::sync::Arc;

/// Paged listing of a user's past check-ins.
#[async_trait]
pub trait CheckInHistoryInteractor: Send + Sync {
    async fn list(&self, user_id: UserId, page: u32) -> anyhow::Result<Vec<CheckIn>>;
}

pub struct CheckInHistoryInteractorImpl {
    check_ins: Arc<dyn CheckInsRepo>,
}

impl CheckInHistoryInteractorImpl {
    pub fn new(check_ins: Arc<dyn CheckInsRepo>) -> Self {
        Self { check_ins }
    }
}

#[async_trait]
impl CheckInHistoryInteractor for CheckInHistoryInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn list(&self, user_id: UserId, page: u32) -> anyhow::Result<Vec<CheckIn>> {
        self.check_ins.find_many_by_user_id(user_id, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryRepository;
    use crate::repositories::{CheckInsRepo, ITEMS_PER_PAGE};
    use chrono::{Duration, TimeZone, Utc};
    use entities::check_ins::NewCheckIn;
    use entities::gyms::GymId;
    use shared_kernel::date_time::FixedClock;

    #[tokio::test]
    async fn pages_check_ins_twenty_at_a_time() {
        let start = Utc.with_ymd_and_hms(2022, 1, 1, 8, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(start));
        let repository = InMemoryRepository::new(clock.clone());
        let user_id = UserId::new();
        let gym_id = GymId::new();

        // One check-in per day keeps the daily-uniqueness rule satisfied.
        for day in 0..22 {
            clock.set(start + Duration::days(day));
            repository
                .create(NewCheckIn { user_id, gym_id })
                .await
                .unwrap();
        }

        let interactor = CheckInHistoryInteractorImpl::new(Arc::new(repository));

        let first_page = interactor.list(user_id, 1).await.unwrap();
        assert_eq!(first_page.len(), ITEMS_PER_PAGE as usize);

        let second_page = interactor.list(user_id, 2).await.unwrap();
        assert_eq!(second_page.len(), 2);

        let third_page = interactor.list(user_id, 3).await.unwrap();
        assert!(third_page.is_empty());
    }

    #[tokio::test]
    async fn a_page_far_past_the_end_is_empty() {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2022, 1, 1, 8, 0, 0).unwrap(),
        ));
        let repository = InMemoryRepository::new(clock);
        let user_id = UserId::new();

        repository
            .create(NewCheckIn {
                user_id,
                gym_id: GymId::new(),
            })
            .await
            .unwrap();

        let interactor = CheckInHistoryInteractorImpl::new(Arc::new(repository));
        let history = interactor.list(user_id, u32::MAX).await.unwrap();

        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn only_lists_the_requested_users_check_ins() {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2022, 1, 1, 8, 0, 0).unwrap(),
        ));
        let repository = InMemoryRepository::new(clock);
        let user_id = UserId::new();
        let other_user_id = UserId::new();
        let gym_id = GymId::new();

        repository
            .create(NewCheckIn { user_id, gym_id })
            .await
            .unwrap();
        repository
            .create(NewCheckIn {
                user_id: other_user_id,
                gym_id,
            })
            .await
            .unwrap();

        let interactor = CheckInHistoryInteractorImpl::new(Arc::new(repository));
        let history = interactor.list(user_id, 1).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_id, user_id);
    }
}
