pub mod history;
pub mod metrics;

use crate::repositories::{CheckInsRepo, CreateCheckInError, GymsRepo};
use async_trait::async_trait;
use entities::check_ins::{CheckIn, NewCheckIn};
use entities::geo::Coordinates;
use entities::gyms::GymId;
use entities::users::UserId;
use shared_kernel::date_time::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Geofencing radius: a check-in is only accepted within 100m of the gym.
pub const MAX_DISTANCE_KM: f64 = 0.1;

#[derive(Debug)]
pub struct CheckInInput {
    pub user_id: UserId,
    pub gym_id: GymId,
    pub user_position: Coordinates,
}

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("resource not found")]
    ResourceNotFound,
    #[error("user is too far away from the gym")]
    MaxDistance,
    #[error("user has already checked in today")]
    MaxNumberOfCheckIns,
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

#[async_trait]
pub trait CheckInInteractor: Send + Sync {
    async fn check_in(&self, input: CheckInInput) -> Result<CheckIn, CheckInError>;
}

pub struct CheckInInteractorImpl {
    gyms: Arc<dyn GymsRepo>,
    check_ins: Arc<dyn CheckInsRepo>,
    clock: Arc<dyn Clock>,
}

impl CheckInInteractorImpl {
    pub fn new(
        gyms: Arc<dyn GymsRepo>,
        check_ins: Arc<dyn CheckInsRepo>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gyms,
            check_ins,
            clock,
        }
    }
}

#[async_trait]
impl CheckInInteractor for CheckInInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn check_in(&self, input: CheckInInput) -> Result<CheckIn, CheckInError> {
        let gym = self
            .gyms
            .find_by_id(input.gym_id)
            .await?
            .ok_or(CheckInError::ResourceNotFound)?;

        let distance_km = input.user_position.distance_km(&gym.position);
        if !within_max_distance(distance_km) {
            return Err(CheckInError::MaxDistance);
        }

        let today = self.clock.now().date_naive();
        let checked_in_today = self
            .check_ins
            .find_by_user_id_on_date(input.user_id, today)
            .await?;
        if checked_in_today.is_some() {
            return Err(CheckInError::MaxNumberOfCheckIns);
        }

        self.check_ins
            .create(NewCheckIn {
                user_id: input.user_id,
                gym_id: input.gym_id,
            })
            .await
            .map_err(|err| match err {
                // The storage constraint is authoritative; losing the
                // concurrent race maps to the same outcome as the early exit.
                CreateCheckInError::AlreadyCheckedIn => CheckInError::MaxNumberOfCheckIns,
                CreateCheckInError::InternalServerError(err) => {
                    CheckInError::InternalServerError(err)
                }
            })
    }
}

/// `false` for any distance beyond the radius, including a NaN distance
/// produced by degenerate coordinates.
fn within_max_distance(distance_km: f64) -> bool {
    distance_km <= MAX_DISTANCE_KM
}
