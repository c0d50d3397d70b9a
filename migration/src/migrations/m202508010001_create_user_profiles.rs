use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202508010001_create_user_profiles"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("user_profiles"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("user_id")).big_integer().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("display_name")).string_len(100))
                    .col(ColumnDef::new(Alias::new("bio")).string_len(500))
                    .col(ColumnDef::new(Alias::new("profile_picture_url")).text())
                    .col(ColumnDef::new(Alias::new("date_of_birth")).date())
                    .col(ColumnDef::new(Alias::new("gender")).string_len(20))
                    .col(ColumnDef::new(Alias::new("location")).text())
                    .col(ColumnDef::new(Alias::new("phone_number")).string_len(20))
                    .col(
                        ColumnDef::new(Alias::new("experience_level"))
                            .string_len(20)
                            .not_null()
                            .default("BEGINNER"),
                    )
                    .col(ColumnDef::new(Alias::new("exploration_type")).string_len(30))
                    .col(
                        ColumnDef::new(Alias::new("privacy_level"))
                            .string_len(20)
                            .not_null()
                            .default("PUBLIC"),
                    )
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .col(ColumnDef::new(Alias::new("is_verified")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("user_profiles")).if_exists().to_owned())
            .await
    }
}
