use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a trail explorer profile in the `user_profiles` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    /// Surrogate primary key (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business key assigned by the auth service. Unique.
    #[sea_orm(unique)]
    pub user_id: i64,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_picture_url: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    /// Free text, e.g. `"Curitiba, PR"`.
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub experience_level: ExperienceLevel,
    pub exploration_type: Option<ExplorationType>,
    pub privacy_level: PrivacyLevel,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
    #[sea_orm(string_value = "OTHER")]
    Other,
    #[sea_orm(string_value = "PREFER_NOT_TO_SAY")]
    PreferNotToSay,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ExperienceLevel {
    #[default]
    #[sea_orm(string_value = "BEGINNER")]
    Beginner,
    #[sea_orm(string_value = "INTERMEDIATE")]
    Intermediate,
    #[sea_orm(string_value = "ADVANCED")]
    Advanced,
    #[sea_orm(string_value = "EXPERT")]
    Expert,
}

/// What a user mostly goes out on the trails for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ExplorationType {
    #[sea_orm(string_value = "HIKING")]
    Hiking,
    #[sea_orm(string_value = "PHOTOGRAPHY")]
    Photography,
    #[sea_orm(string_value = "BIRDWATCHING")]
    Birdwatching,
    #[sea_orm(string_value = "ADVENTURE")]
    Adventure,
    #[sea_orm(string_value = "RESEARCH")]
    Research,
    #[sea_orm(string_value = "RELAXATION")]
    Relaxation,
    #[sea_orm(string_value = "NATURE_OBSERVATION")]
    NatureObservation,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PrivacyLevel {
    #[default]
    #[sea_orm(string_value = "PUBLIC")]
    Public,
    #[sea_orm(string_value = "FRIENDS_ONLY")]
    FriendsOnly,
    #[sea_orm(string_value = "PRIVATE")]
    Private,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::statistics::Entity")]
    Statistics,

    #[sea_orm(has_many = "super::user_profile_interest::Entity")]
    Interests,
}

impl Related<super::statistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Statistics.def()
    }
}

impl Related<super::user_profile_interest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_true() -> bool {
    true
}

/// Attributes supplied when inserting a profile. Timestamps and the surrogate
/// key are left to the database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub user_id: i64,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    pub exploration_type: Option<ExplorationType>,
    #[serde(default)]
    pub privacy_level: PrivacyLevel,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl NewUserProfile {
    /// A profile carrying only its business key; every other attribute takes
    /// the column default.
    pub fn with_user_id(user_id: i64) -> Self {
        Self {
            user_id,
            display_name: None,
            bio: None,
            profile_picture_url: None,
            date_of_birth: None,
            gender: None,
            location: None,
            phone_number: None,
            experience_level: ExperienceLevel::default(),
            exploration_type: None,
            privacy_level: PrivacyLevel::default(),
            is_active: true,
            is_verified: false,
        }
    }

    fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            user_id: Set(self.user_id),
            display_name: Set(self.display_name.clone()),
            bio: Set(self.bio.clone()),
            profile_picture_url: Set(self.profile_picture_url.clone()),
            date_of_birth: Set(self.date_of_birth),
            gender: Set(self.gender),
            location: Set(self.location.clone()),
            phone_number: Set(self.phone_number.clone()),
            experience_level: Set(self.experience_level),
            exploration_type: Set(self.exploration_type),
            privacy_level: Set(self.privacy_level),
            is_active: Set(self.is_active),
            is_verified: Set(self.is_verified),
            ..Default::default()
        }
    }
}

impl Model {
    /// Inserts a profile unless one with the same `user_id` already exists.
    ///
    /// Uses `ON CONFLICT (user_id) DO NOTHING`, so an existing row is left
    /// untouched. Returns `true` when a row was written.
    pub async fn insert_ignore<C>(db: &C, profile: &NewUserProfile) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Entity::insert(profile.to_active_model())
            .on_conflict(OnConflict::column(Column::UserId).do_nothing().to_owned())
            .exec_without_returning(db)
            .await?;

        Ok(rows > 0)
    }

    /// All profiles, ordered by ascending `user_id`.
    pub async fn all_ordered_by_user_id<C>(db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .order_by_asc(Column::UserId)
            .all(db)
            .await
    }

    pub async fn find_by_user_id<C>(db: &C, user_id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find().count(db).await
    }
}
