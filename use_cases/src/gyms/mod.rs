pub mod create_gym;
pub mod search_gyms;
