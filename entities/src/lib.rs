pub mod check_ins;
pub mod geo;
pub mod gyms;
pub mod users;
