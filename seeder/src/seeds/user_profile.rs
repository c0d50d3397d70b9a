use crate::seed::{SeedError, SeedReport, Seeder};
use db::models::user_profile::{Model, NewUserProfile};
use sea_orm::DatabaseTransaction;

pub struct UserProfileSeeder<'a> {
    profiles: &'a [NewUserProfile],
}

impl<'a> UserProfileSeeder<'a> {
    pub fn new(profiles: &'a [NewUserProfile]) -> Self {
        Self { profiles }
    }
}

#[async_trait::async_trait]
impl Seeder for UserProfileSeeder<'_> {
    async fn seed(&self, txn: &DatabaseTransaction) -> Result<SeedReport, SeedError> {
        let mut inserted = 0;

        for profile in self.profiles {
            if Model::insert_ignore(txn, profile).await? {
                inserted += 1;
            } else {
                log::debug!("Profile {} already present, skipped", profile.user_id);
            }
        }

        Ok(SeedReport {
            attempted: self.profiles.len(),
            inserted,
        })
    }
}
