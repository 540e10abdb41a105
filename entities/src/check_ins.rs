use crate::gyms::GymId;
use crate::users::UserId;
use chrono::{DateTime, Utc};
use shared_kernel::uuid_key;

uuid_key!(CheckInId);

/// A record asserting that a user was physically present at a gym at a point
/// in time. At most one may exist per user per calendar day.
#[derive(Clone, Debug)]
pub struct CheckIn {
    pub id: CheckInId,
    pub user_id: UserId,
    pub gym_id: GymId,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

/// Check-in payload; the repository assigns the id and stamps `created_at`.
#[derive(Clone, Debug)]
pub struct NewCheckIn {
    pub user_id: UserId,
    pub gym_id: GymId,
}
