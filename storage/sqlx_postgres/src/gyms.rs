use crate::repository::Repository;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use entities::geo::Coordinates;
use entities::gyms::{Gym, GymId, GymTitle, NewGym};
use rust_decimal::Decimal;
use use_cases::repositories::{GymsRepo, ITEMS_PER_PAGE};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct GymRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    phone: Option<String>,
    latitude: Decimal,
    longitude: Decimal,
}

impl TryFrom<GymRow> for Gym {
    type Error = anyhow::Error;

    fn try_from(row: GymRow) -> Result<Self, Self::Error> {
        let title = GymTitle::try_from(row.title).map_err(|err| anyhow!(err))?;
        Ok(Gym {
            id: row.id.into(),
            title,
            description: row.description,
            phone: row.phone,
            position: Coordinates::new(row.latitude, row.longitude),
        })
    }
}

const GYM_COLUMNS: &str = "id, title, description, phone, latitude, longitude";

#[async_trait]
impl GymsRepo for Repository {
    async fn find_by_id(&self, id: GymId) -> anyhow::Result<Option<Gym>> {
        let row = sqlx::query_as::<_, GymRow>(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms WHERE id = $1"
        ))
        .bind(id.inner())
        .fetch_optional(self.pool())
        .await
        .context("Failed to fetch gym by id")?;

        row.map(Gym::try_from).transpose()
    }

    async fn search_many(&self, query: &str, page: u32) -> anyhow::Result<Vec<Gym>> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(ITEMS_PER_PAGE);
        let rows = sqlx::query_as::<_, GymRow>(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms
             WHERE title ILIKE '%' || $1 || '%'
             ORDER BY title
             LIMIT $2 OFFSET $3"
        ))
        .bind(query)
        .bind(i64::from(ITEMS_PER_PAGE))
        .bind(offset)
        .fetch_all(self.pool())
        .await
        .context("Failed to search gyms")?;

        rows.into_iter().map(Gym::try_from).collect()
    }

    async fn create(&self, gym: NewGym) -> anyhow::Result<Gym> {
        let row = sqlx::query_as::<_, GymRow>(&format!(
            "INSERT INTO gyms (id, title, description, phone, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {GYM_COLUMNS}"
        ))
        .bind(GymId::new().inner())
        .bind(gym.title.as_ref())
        .bind(&gym.description)
        .bind(&gym.phone)
        .bind(gym.position.latitude)
        .bind(gym.position.longitude)
        .fetch_one(self.pool())
        .await
        .context("Failed to insert gym")?;

        row.try_into()
    }
}
