use crate::geo::Coordinates;
use shared_kernel::{non_empty_string, uuid_key};

uuid_key!(GymId);

non_empty_string!(GymTitle);

#[derive(Clone, Debug)]
pub struct Gym {
    pub id: GymId,
    pub title: GymTitle,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub position: Coordinates,
}

pub struct NewGym {
    pub title: GymTitle,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub position: Coordinates,
}
