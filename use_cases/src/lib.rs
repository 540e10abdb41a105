use crate::authenticate::{AuthenticateInteractor, AuthenticateInteractorImpl};
use crate::check_ins::history::{CheckInHistoryInteractor, CheckInHistoryInteractorImpl};
use crate::check_ins::metrics::{UserMetricsInteractor, UserMetricsInteractorImpl};
use crate::check_ins::{CheckInInteractor, CheckInInteractorImpl};
use crate::gyms::create_gym::{CreateGymInteractor, CreateGymInteractorImpl};
use crate::gyms::search_gyms::{SearchGymsInteractor, SearchGymsInteractorImpl};
use crate::password::PasswordHasher;
use crate::register::{RegisterInteractor, RegisterInteractorImpl};
use crate::repositories::Repository;
use shared_kernel::date_time::Clock;
use std::sync::Arc;

pub mod authenticate;
pub mod check_ins;
pub mod gyms;
#[cfg(test)]
mod in_memory;
pub mod password;
pub mod register;
pub mod repositories;

pub trait App {
    fn authentication(&self) -> &dyn AuthenticateInteractor;
    fn registration(&self) -> &dyn RegisterInteractor;
    fn check_in(&self) -> &dyn CheckInInteractor;
    fn check_in_history(&self) -> &dyn CheckInHistoryInteractor;
    fn user_metrics(&self) -> &dyn UserMetricsInteractor;
    fn gym_search(&self) -> &dyn SearchGymsInteractor;
    fn gym_creation(&self) -> &dyn CreateGymInteractor;
}

pub struct AppImpl {
    authentication: Arc<dyn AuthenticateInteractor>,
    registration: Arc<dyn RegisterInteractor>,
    check_in: Arc<dyn CheckInInteractor>,
    check_in_history: Arc<dyn CheckInHistoryInteractor>,
    user_metrics: Arc<dyn UserMetricsInteractor>,
    gym_search: Arc<dyn SearchGymsInteractor>,
    gym_creation: Arc<dyn CreateGymInteractor>,
}

impl App for AppImpl {
    fn authentication(&self) -> &dyn AuthenticateInteractor {
        self.authentication.as_ref()
    }

    fn registration(&self) -> &dyn RegisterInteractor {
        self.registration.as_ref()
    }

    fn check_in(&self) -> &dyn CheckInInteractor {
        self.check_in.as_ref()
    }

    fn check_in_history(&self) -> &dyn CheckInHistoryInteractor {
        self.check_in_history.as_ref()
    }

    fn user_metrics(&self) -> &dyn UserMetricsInteractor {
        self.user_metrics.as_ref()
    }

    fn gym_search(&self) -> &dyn SearchGymsInteractor {
        self.gym_search.as_ref()
    }

    fn gym_creation(&self) -> &dyn CreateGymInteractor {
        self.gym_creation.as_ref()
    }
}

impl AppImpl {
    pub fn new<R: Repository + 'static>(
        repo: R,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let repository = Arc::new(repo);

        let authentication = Arc::new(AuthenticateInteractorImpl::new(
            repository.clone(),
            password_hasher.clone(),
        ));
        let registration = Arc::new(RegisterInteractorImpl::new(
            repository.clone(),
            password_hasher,
        ));
        let check_in = Arc::new(CheckInInteractorImpl::new(
            repository.clone(),
            repository.clone(),
            clock,
        ));
        let check_in_history = Arc::new(CheckInHistoryInteractorImpl::new(repository.clone()));
        let user_metrics = Arc::new(UserMetricsInteractorImpl::new(repository.clone()));
        let gym_search = Arc::new(SearchGymsInteractorImpl::new(repository.clone()));
        let gym_creation = Arc::new(CreateGymInteractorImpl::new(repository));

        Self {
            authentication,
            registration,
            check_in,
            check_in_history,
            user_metrics,
            gym_search,
            gym_creation,
        }
    }
}
