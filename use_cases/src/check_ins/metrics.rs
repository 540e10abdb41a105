use crate::repositories::CheckInsRepo;
use async_trait::async_trait;
use entities::users::UserId;
use std::sync::Arc;

#[async_trait]
pub trait UserMetricsInteractor: Send + Sync {
    /// Total number of check-ins the user has ever registered.
    async fn check_ins_count(&self, user_id: UserId) -> anyhow::Result<u64>;
}

pub struct UserMetricsInteractorImpl {
    check_ins: Arc<dyn CheckInsRepo>,
}

impl UserMetricsInteractorImpl {
    pub fn new(check_ins: Arc<dyn CheckInsRepo>) -> Self {
        Self { check_ins }
    }
}

#[async_trait]
impl UserMetricsInteractor for UserMetricsInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn check_ins_count(&self, user_id: UserId) -> anyhow::Result<u64> {
        self.check_ins.count_by_user_id(user_id).await
    }
}
