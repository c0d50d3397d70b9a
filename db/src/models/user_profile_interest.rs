use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A tag on a profile in the `user_profile_interests` table.
///
/// The table has no key of its own; rows are addressed through
/// `user_profile_id` and disappear with their profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile_interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_profile_id: i64,
    pub interest: Interest,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Interest {
    #[sea_orm(string_value = "HIKING")]
    Hiking,
    #[sea_orm(string_value = "TREKKING")]
    Trekking,
    #[sea_orm(string_value = "MOUNTAIN_CLIMBING")]
    MountainClimbing,
    #[sea_orm(string_value = "NATURE_PHOTOGRAPHY")]
    NaturePhotography,
    #[sea_orm(string_value = "BIRD_WATCHING")]
    BirdWatching,
    #[sea_orm(string_value = "CAMPING")]
    Camping,
    #[sea_orm(string_value = "ROCK_CLIMBING")]
    RockClimbing,
    #[sea_orm(string_value = "TRAIL_RUNNING")]
    TrailRunning,
    #[sea_orm(string_value = "ADVENTURE_SPORTS")]
    AdventureSports,
    #[sea_orm(string_value = "ECO_TOURISM")]
    EcoTourism,
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

impl Model {
    /// Tags a profile with an interest.
    pub async fn add<C>(db: &C, user_profile_id: i64, interest: Interest) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let active = ActiveModel {
            user_profile_id: Set(user_profile_id),
            interest: Set(interest),
        };
        Entity::insert(active).exec_without_returning(db).await?;
        Ok(())
    }

    /// Interests of one profile, sorted by name.
    pub async fn for_profile<C>(db: &C, user_profile_id: i64) -> Result<Vec<Interest>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Entity::find()
            .filter(Column::UserProfileId.eq(user_profile_id))
            .order_by_asc(Column::Interest)
            .all(db)
            .await?;

        Ok(rows.into_iter().map(|row| row.interest).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user_profile::{self, NewUserProfile};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_add_and_list_interests() {
        let db = setup_test_db().await;

        user_profile::Model::insert_ignore(&db, &NewUserProfile::with_user_id(101))
            .await
            .unwrap();
        let profile = user_profile::Model::find_by_user_id(&db, 101)
            .await
            .unwrap()
            .unwrap();

        Model::add(&db, profile.id, Interest::TrailRunning).await.unwrap();
        Model::add(&db, profile.id, Interest::Camping).await.unwrap();

        let interests = Model::for_profile(&db, profile.id).await.unwrap();
        assert_eq!(interests, vec![Interest::Camping, Interest::TrailRunning]);
    }

    #[tokio::test]
    async fn test_interests_cascade_with_profile() {
        let db = setup_test_db().await;

        user_profile::Model::insert_ignore(&db, &NewUserProfile::with_user_id(102))
            .await
            .unwrap();
        let profile = user_profile::Model::find_by_user_id(&db, 102)
            .await
            .unwrap()
            .unwrap();
        Model::add(&db, profile.id, Interest::Hiking).await.unwrap();

        user_profile::Entity::delete_by_id(profile.id)
            .exec(&db)
            .await
            .expect("Failed to delete profile");

        assert!(Model::for_profile(&db, profile.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_interest_requires_existing_profile() {
        let db = setup_test_db().await;

        let result = Model::add(&db, 9_999, Interest::Camping).await;
        assert!(result.is_err());
    }
}
