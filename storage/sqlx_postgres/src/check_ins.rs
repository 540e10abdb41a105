use crate::repository::{is_unique_violation, Repository};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use entities::check_ins::{CheckIn, CheckInId, NewCheckIn};
use entities::users::UserId;
use use_cases::repositories::{CheckInsRepo, CreateCheckInError, ITEMS_PER_PAGE};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CheckInRow {
    id: Uuid,
    user_id: Uuid,
    gym_id: Uuid,
    created_at: DateTime<Utc>,
    validated_at: Option<DateTime<Utc>>,
}

impl From<CheckInRow> for CheckIn {
    fn from(row: CheckInRow) -> Self {
        CheckIn {
            id: row.id.into(),
            user_id: row.user_id.into(),
            gym_id: row.gym_id.into(),
            created_at: row.created_at,
            validated_at: row.validated_at,
        }
    }
}

const CHECK_IN_COLUMNS: &str = "id, user_id, gym_id, created_at, validated_at";

#[async_trait]
impl CheckInsRepo for Repository {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, CreateCheckInError> {
        let row = sqlx::query_as::<_, CheckInRow>(&format!(
            "INSERT INTO check_ins (id, user_id, gym_id) VALUES ($1, $2, $3)
             RETURNING {CHECK_IN_COLUMNS}"
        ))
        .bind(CheckInId::new().inner())
        .bind(check_in.user_id.inner())
        .bind(check_in.gym_id.inner())
        .fetch_one(self.pool())
        .await
        .map_err(|err| {
            // the daily-uniqueness index fires here when two attempts race
            if is_unique_violation(&err) {
                CreateCheckInError::AlreadyCheckedIn
            } else {
                CreateCheckInError::InternalServerError(
                    anyhow::Error::new(err).context("Failed to insert check-in"),
                )
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> anyhow::Result<Option<CheckIn>> {
        let row = sqlx::query_as::<_, CheckInRow>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins
             WHERE user_id = $1 AND (timezone('UTC', created_at))::date = $2"
        ))
        .bind(user_id.inner())
        .bind(date)
        .fetch_optional(self.pool())
        .await
        .context("Failed to fetch check-in by user and date")?;

        Ok(row.map(CheckIn::from))
    }

    async fn count_by_user_id(&self, user_id: UserId) -> anyhow::Result<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM check_ins WHERE user_id = $1",
        )
        .bind(user_id.inner())
        .fetch_one(self.pool())
        .await
        .context("Failed to count check-ins")?;

        u64::try_from(count).context("Negative check-in count")
    }

    async fn find_many_by_user_id(
        &self,
        user_id: UserId,
        page: u32,
    ) -> anyhow::Result<Vec<CheckIn>> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(ITEMS_PER_PAGE);
        let rows = sqlx::query_as::<_, CheckInRow>(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(user_id.inner())
        .bind(i64::from(ITEMS_PER_PAGE))
        .bind(offset)
        .fetch_all(self.pool())
        .await
        .context("Failed to list check-ins")?;

        Ok(rows.into_iter().map(CheckIn::from).collect())
    }
}
