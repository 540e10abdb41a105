use crate::repositories::GymsRepo;
use async_trait::async_trait;
use entities::gyms::Gym;
use std::sync::Arc;

#[derive(Debug)]
pub struct SearchGymsInput {
    pub query: String,
    pub page: u32,
}

#[async_trait]
pub trait SearchGymsInteractor: Send + Sync {
    async fn search(&self, input: SearchGymsInput) -> anyhow::Result<Vec<Gym>>;
}

pub struct SearchGymsInteractorImpl {
    gyms: Arc<dyn GymsRepo>,
}

impl SearchGymsInteractorImpl {
    pub fn new(gyms: Arc<dyn GymsRepo>) -> Self {
        Self { gyms }
    }
}

#[async_trait]
impl SearchGymsInteractor for SearchGymsInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn search(&self, input: SearchGymsInput) -> anyhow::Result<Vec<Gym>> {
        self.gyms.search_many(&input.query, input.page).await
    }
}
