use crate::repositories::GymsRepo;
use async_trait::async_trait;
use entities::geo::Coordinates;
use entities::gyms::{Gym, GymTitle, NewGym};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug)]
pub struct CreateGymInput {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Error, Debug)]
pub enum CreateGymError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[async_trait]
pub trait CreateGymInteractor: Send + Sync {
    async fn create(&self, input: CreateGymInput) -> Result<Gym, CreateGymError>;
}

pub struct CreateGymInteractorImpl {
    gyms: Arc<dyn GymsRepo>,
}

impl CreateGymInteractorImpl {
    pub fn new(gyms: Arc<dyn GymsRepo>) -> Self {
        Self { gyms }
    }
}

#[async_trait]
impl CreateGymInteractor for CreateGymInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn create(&self, input: CreateGymInput) -> Result<Gym, CreateGymError> {
        let title = GymTitle::try_from(input.title).map_err(CreateGymError::Validation)?;

        let gym = self
            .gyms
            .create(NewGym {
                title,
                description: input.description,
                phone: input.phone,
                position: Coordinates::new(input.latitude, input.longitude),
            })
            .await?;

        Ok(gym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryRepository;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use shared_kernel::date_time::FixedClock;
    use uuid::Uuid;

    fn repository() -> InMemoryRepository {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap(),
        ));
        InMemoryRepository::new(clock)
    }

    #[tokio::test]
    async fn creates_a_gym() {
        let interactor = CreateGymInteractorImpl::new(Arc::new(repository()));

        let gym = interactor
            .create(CreateGymInput {
                title: "Soras Gym".to_string(),
                description: None,
                phone: Some("11 99999-9999".to_string()),
                latitude: dec!(-23.1034915),
                longitude: dec!(-47.1793731),
            })
            .await
            .unwrap();

        assert_ne!(gym.id.inner(), Uuid::nil());
        assert_eq!(gym.title, *"Soras Gym");
    }

    #[tokio::test]
    async fn rejects_an_empty_title() {
        let interactor = CreateGymInteractorImpl::new(Arc::new(repository()));

        let result = interactor
            .create(CreateGymInput {
                title: "   ".to_string(),
                description: None,
                phone: None,
                latitude: dec!(0),
                longitude: dec!(0),
            })
            .await;

        assert!(matches!(result, Err(CreateGymError::Validation(_))));
    }
}
