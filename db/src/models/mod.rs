pub mod statistics;
pub mod user_profile;
pub mod user_profile_interest;

pub use statistics::Entity as Statistics;
pub use user_profile::Entity as UserProfile;
pub use user_profile_interest::Entity as UserProfileInterest;
