use crate::seed::{SeedError, SeedReport, Seeder};
use chrono::Local;
use db::models::statistics::{self, NewStatistics};
use db::models::user_profile;
use sea_orm::DatabaseTransaction;

/// Attaches statistics rows to the profiles already in the database.
///
/// Pairing is by position only: profiles are read back ordered by `user_id`
/// and the n-th profile receives the n-th row. Profiles past the end of the
/// list get nothing, and surplus rows are dropped.
pub struct StatisticsSeeder<'a> {
    statistics: &'a [NewStatistics],
}

impl<'a> StatisticsSeeder<'a> {
    pub fn new(statistics: &'a [NewStatistics]) -> Self {
        Self { statistics }
    }
}

#[async_trait::async_trait]
impl Seeder for StatisticsSeeder<'_> {
    async fn seed(&self, txn: &DatabaseTransaction) -> Result<SeedReport, SeedError> {
        let profiles = user_profile::Model::all_ordered_by_user_id(txn).await?;
        let mut report = SeedReport::default();

        for (profile, stats) in profiles.iter().zip(self.statistics) {
            report.attempted += 1;
            let last_activity_at = Local::now().naive_local();

            if statistics::Model::insert_ignore(txn, profile.id, stats, last_activity_at).await? {
                report.inserted += 1;
            } else {
                log::debug!("Profile {} already has statistics, skipped", profile.user_id);
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;
    use db::models::user_profile::NewUserProfile;
    use db::test_utils::setup_test_db;
    use sea_orm::TransactionTrait;

    #[tokio::test]
    async fn no_profiles_means_no_statistics() {
        let db = setup_test_db().await;
        let fixtures = Fixtures::builtin();

        let txn = db.begin().await.unwrap();
        let report = StatisticsSeeder::new(&fixtures.statistics)
            .seed(&txn)
            .await
            .unwrap();
        txn.commit().await.unwrap();

        assert_eq!(report, SeedReport::default());
        assert_eq!(statistics::Model::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn pairs_in_user_id_order_regardless_of_insert_order() {
        let db = setup_test_db().await;
        for user_id in [30, 10, 20] {
            user_profile::Model::insert_ignore(&db, &NewUserProfile::with_user_id(user_id))
                .await
                .unwrap();
        }
        let rows: Vec<NewStatistics> = [1, 2, 3]
            .into_iter()
            .map(|points| NewStatistics {
                total_points: points,
                ..Default::default()
            })
            .collect();

        let txn = db.begin().await.unwrap();
        let report = StatisticsSeeder::new(&rows).seed(&txn).await.unwrap();
        txn.commit().await.unwrap();
        assert_eq!(report.inserted, 3);

        for (user_id, points) in [(10, 1), (20, 2), (30, 3)] {
            let profile = user_profile::Model::find_by_user_id(&db, user_id)
                .await
                .unwrap()
                .unwrap();
            let stats = statistics::Model::find_by_user_profile_id(&db, profile.id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(stats.total_points, points, "user {user_id}");
            assert!(stats.last_activity_at.is_some());
        }
    }

    #[tokio::test]
    async fn rerun_skips_profiles_that_have_statistics() {
        let db = setup_test_db().await;
        user_profile::Model::insert_ignore(&db, &NewUserProfile::with_user_id(1))
            .await
            .unwrap();
        let rows = vec![NewStatistics::default()];
        let seeder = StatisticsSeeder::new(&rows);

        let txn = db.begin().await.unwrap();
        seeder.seed(&txn).await.unwrap();
        let again = seeder.seed(&txn).await.unwrap();
        txn.commit().await.unwrap();

        assert_eq!(again, SeedReport { attempted: 1, inserted: 0 });
        assert_eq!(statistics::Model::count(&db).await.unwrap(), 1);
    }
}
