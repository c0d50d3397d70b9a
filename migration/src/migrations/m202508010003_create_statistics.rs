use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202508010003_create_statistics"
    }
}

/// Integer counters that follow the distance and elevation columns.
const TRAILING_COUNTERS: [&str; 15] = [
    "longest_trail_km",
    "highest_elevation_m",
    "total_photos_shared",
    "total_reviews_posted",
    "total_likes_received",
    "total_comments_received",
    "total_badges_earned",
    "total_points",
    "current_streak",
    "longest_streak",
    "total_followers",
    "total_following",
    "total_guides_booked",
    "global_rank",
    "local_rank",
];

fn counter(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .integer()
        .not_null()
        .default(0)
        .to_owned()
}

fn measure(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .double()
        .not_null()
        .default(0.0)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Alias::new("statistics"))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new("id"))
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Alias::new("user_profile_id"))
                    .big_integer()
                    .not_null()
                    .unique_key(),
            )
            .col(&mut counter("total_trails_completed"))
            .col(&mut measure("total_distance_km"))
            .col(&mut counter("total_time_minutes"))
            .col(&mut measure("total_elevation_gain_m"));

        for name in TRAILING_COUNTERS {
            table.col(&mut counter(name));
        }

        table
            .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
            .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
            .col(ColumnDef::new(Alias::new("last_activity_at")).timestamp())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_statistics_user_profile_id")
                    .from(Alias::new("statistics"), Alias::new("user_profile_id"))
                    .to(Alias::new("user_profiles"), Alias::new("id"))
                    .on_delete(ForeignKeyAction::Cascade),
            );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("statistics")).if_exists().to_owned())
            .await
    }
}
