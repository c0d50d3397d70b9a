pub mod statistics;
pub mod user_profile;
