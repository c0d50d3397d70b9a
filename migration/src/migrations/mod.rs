pub mod m202508010001_create_user_profiles;
pub mod m202508010002_create_user_profile_interests;
pub mod m202508010003_create_statistics;
