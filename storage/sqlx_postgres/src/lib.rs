mod check_ins;
pub mod configuration;
mod gyms;
pub mod migrations;
pub mod repository;
mod users;
