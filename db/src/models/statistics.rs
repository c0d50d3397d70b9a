use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Alias, Expr, OnConflict, SimpleExpr};
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};

use super::user_profile::{self, ExperienceLevel};

/// Aggregate counters for one profile in the `statistics` table.
///
/// At most one row exists per profile (`user_profile_id` is unique).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_profile_id: i64,

    // Trails
    pub total_trails_completed: i32,
    pub total_distance_km: f64,
    pub total_time_minutes: i32,
    pub total_elevation_gain_m: f64,
    pub longest_trail_km: i32,
    pub highest_elevation_m: i32,

    // Activity
    pub total_photos_shared: i32,
    pub total_reviews_posted: i32,
    pub total_likes_received: i32,
    pub total_comments_received: i32,

    // Achievements
    pub total_badges_earned: i32,
    pub total_points: i32,
    pub current_streak: i32,
    pub longest_streak: i32,

    // Social
    pub total_followers: i32,
    pub total_following: i32,
    pub total_guides_booked: i32,

    // Ranking
    pub global_rank: i32,
    pub local_rank: i32,

    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub last_activity_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_profile::Entity",
        from = "Column::UserProfileId",
        to = "super::user_profile::Column::Id",
        on_delete = "Cascade"
    )]
    UserProfile,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Counter values for a new statistics row, without the profile reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewStatistics {
    pub total_trails_completed: i32,
    pub total_distance_km: f64,
    pub total_time_minutes: i32,
    pub total_elevation_gain_m: f64,
    pub longest_trail_km: i32,
    pub highest_elevation_m: i32,
    pub total_photos_shared: i32,
    pub total_reviews_posted: i32,
    pub total_likes_received: i32,
    pub total_comments_received: i32,
    pub total_badges_earned: i32,
    pub total_points: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_followers: i32,
    pub total_following: i32,
    pub total_guides_booked: i32,
    pub global_rank: i32,
    pub local_rank: i32,
}

impl NewStatistics {
    fn to_active_model(&self, user_profile_id: i64, last_activity_at: DateTime) -> ActiveModel {
        ActiveModel {
            user_profile_id: Set(user_profile_id),
            total_trails_completed: Set(self.total_trails_completed),
            total_distance_km: Set(self.total_distance_km),
            total_time_minutes: Set(self.total_time_minutes),
            total_elevation_gain_m: Set(self.total_elevation_gain_m),
            longest_trail_km: Set(self.longest_trail_km),
            highest_elevation_m: Set(self.highest_elevation_m),
            total_photos_shared: Set(self.total_photos_shared),
            total_reviews_posted: Set(self.total_reviews_posted),
            total_likes_received: Set(self.total_likes_received),
            total_comments_received: Set(self.total_comments_received),
            total_badges_earned: Set(self.total_badges_earned),
            total_points: Set(self.total_points),
            current_streak: Set(self.current_streak),
            longest_streak: Set(self.longest_streak),
            total_followers: Set(self.total_followers),
            total_following: Set(self.total_following),
            total_guides_booked: Set(self.total_guides_booked),
            global_rank: Set(self.global_rank),
            local_rank: Set(self.local_rank),
            last_activity_at: Set(Some(last_activity_at)),
            ..Default::default()
        }
    }
}

/// One line of the leaderboard: an active profile joined with its counters.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct RankingEntry {
    pub user_id: i64,
    pub display_name: Option<String>,
    pub location: Option<String>,
    pub experience_level: ExperienceLevel,
    pub total_points: i32,
    pub total_trails_completed: i32,
    pub total_distance_km: f64,
    pub total_time_minutes: i32,
    pub total_elevation_gain_m: f64,
    pub global_rank: i32,
}

impl Model {
    /// Inserts counters for a profile unless the profile already has a row.
    ///
    /// Uses `ON CONFLICT (user_profile_id) DO NOTHING`. Returns `true` when a
    /// row was written.
    pub async fn insert_ignore<C>(
        db: &C,
        user_profile_id: i64,
        stats: &NewStatistics,
        last_activity_at: DateTime,
    ) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Entity::insert(stats.to_active_model(user_profile_id, last_activity_at))
            .on_conflict(OnConflict::column(Column::UserProfileId).do_nothing().to_owned())
            .exec_without_returning(db)
            .await?;

        Ok(rows > 0)
    }

    pub async fn find_by_user_profile_id<C>(
        db: &C,
        user_profile_id: i64,
    ) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::UserProfileId.eq(user_profile_id))
            .one(db)
            .await
    }

    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find().count(db).await
    }

    /// Active profiles with the most points, best first.
    ///
    /// Ties on points are broken by ascending `user_id`. Profiles without a
    /// statistics row are not listed. Distance and elevation are read as
    /// double precision so tables that declare them `DECIMAL(10,2)` still
    /// decode.
    pub async fn top_ranked<C>(db: &C, limit: u64) -> Result<Vec<RankingEntry>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .select_only()
            .column(user_profile::Column::UserId)
            .column(user_profile::Column::DisplayName)
            .column(user_profile::Column::Location)
            .column(user_profile::Column::ExperienceLevel)
            .column(Column::TotalPoints)
            .column(Column::TotalTrailsCompleted)
            .column_as(as_double(Column::TotalDistanceKm), "total_distance_km")
            .column(Column::TotalTimeMinutes)
            .column_as(as_double(Column::TotalElevationGainM), "total_elevation_gain_m")
            .column(Column::GlobalRank)
            .inner_join(user_profile::Entity)
            .filter(user_profile::Column::IsActive.eq(true))
            .order_by_desc(Column::TotalPoints)
            .order_by_asc(user_profile::Column::UserId)
            .limit(limit)
            .into_model::<RankingEntry>()
            .all(db)
            .await
    }
}

/// `CAST(statistics.<column> AS double precision)`
fn as_double(column: Column) -> SimpleExpr {
    Expr::col((Entity, column)).cast_as(Alias::new("double precision"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user_profile::NewUserProfile;
    use crate::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};

    async fn profile_with_points(
        db: &DatabaseConnection,
        user_id: i64,
        points: i32,
        is_active: bool,
    ) -> i64 {
        let profile = NewUserProfile {
            display_name: Some(format!("Explorer {user_id}")),
            is_active,
            ..NewUserProfile::with_user_id(user_id)
        };
        user_profile::Model::insert_ignore(db, &profile).await.unwrap();
        let id = user_profile::Model::find_by_user_id(db, user_id)
            .await
            .unwrap()
            .unwrap()
            .id;

        let stats = NewStatistics {
            total_points: points,
            ..Default::default()
        };
        Model::insert_ignore(db, id, &stats, Utc::now().naive_utc())
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_insert_statistics_for_profile() {
        let db = setup_test_db().await;
        user_profile::Model::insert_ignore(&db, &NewUserProfile::with_user_id(101))
            .await
            .unwrap();
        let profile = user_profile::Model::find_by_user_id(&db, 101).await.unwrap().unwrap();

        let stats = NewStatistics {
            total_trails_completed: 180,
            total_distance_km: 3500.5,
            total_points: 25000,
            global_rank: 1,
            ..Default::default()
        };
        let inserted = Model::insert_ignore(&db, profile.id, &stats, Utc::now().naive_utc())
            .await
            .expect("Failed to insert statistics");
        assert!(inserted);

        let found = Model::find_by_user_profile_id(&db, profile.id)
            .await
            .unwrap()
            .expect("Statistics not found");
        assert_eq!(found.total_trails_completed, 180);
        assert_eq!(found.total_distance_km, 3500.5);
        assert_eq!(found.total_points, 25000);
        assert_eq!(found.total_followers, 0);
        assert!(found.last_activity_at.is_some());
    }

    #[tokio::test]
    async fn test_second_row_for_profile_is_skipped() {
        let db = setup_test_db().await;
        let id = profile_with_points(&db, 101, 100, true).await;

        let stats = NewStatistics {
            total_points: 999,
            ..Default::default()
        };
        let inserted = Model::insert_ignore(&db, id, &stats, Utc::now().naive_utc())
            .await
            .expect("Conflicting insert should not error");

        assert!(!inserted);
        assert_eq!(Model::count(&db).await.unwrap(), 1);
        let found = Model::find_by_user_profile_id(&db, id).await.unwrap().unwrap();
        assert_eq!(found.total_points, 100);
    }

    #[tokio::test]
    async fn test_statistics_require_existing_profile() {
        let db = setup_test_db().await;

        let result =
            Model::insert_ignore(&db, 12_345, &NewStatistics::default(), Utc::now().naive_utc())
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_statistics_cascade_with_profile() {
        let db = setup_test_db().await;
        let id = profile_with_points(&db, 101, 100, true).await;

        user_profile::Entity::delete_by_id(id).exec(&db).await.unwrap();

        assert_eq!(Model::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_top_ranked_orders_by_points_and_skips_inactive() {
        let db = setup_test_db().await;
        profile_with_points(&db, 101, 300, true).await;
        profile_with_points(&db, 102, 900, true).await;
        profile_with_points(&db, 103, 5000, false).await;
        profile_with_points(&db, 104, 600, true).await;

        let top = Model::top_ranked(&db, 5).await.expect("Failed to rank");

        let ids: Vec<i64> = top.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![102, 104, 101]);
        assert_eq!(top[0].total_points, 900);
        assert_eq!(top[0].display_name.as_deref(), Some("Explorer 102"));
        assert_eq!(top[0].experience_level, ExperienceLevel::Beginner);
    }

    #[tokio::test]
    async fn test_top_ranked_respects_limit_and_ties() {
        let db = setup_test_db().await;
        for user_id in 201..=207 {
            profile_with_points(&db, user_id, 50, true).await;
        }

        let top = Model::top_ranked(&db, 5).await.unwrap();

        assert_eq!(top.len(), 5);
        let ids: Vec<i64> = top.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![201, 202, 203, 204, 205]);
    }

    #[tokio::test]
    async fn test_deactivated_profile_drops_off_ranking() {
        let db = setup_test_db().await;
        profile_with_points(&db, 101, 10, true).await;
        profile_with_points(&db, 102, 20, true).await;

        let profile = user_profile::Model::find_by_user_id(&db, 102).await.unwrap().unwrap();
        let mut active = profile.into_active_model();
        active.is_active = Set(false);
        active.update(&db).await.unwrap();

        let top = Model::top_ranked(&db, 5).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].user_id, 101);
    }
}
