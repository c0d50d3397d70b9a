use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202508010002_create_user_profile_interests"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("user_profile_interests"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("user_profile_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("interest")).string_len(50).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_interests_user_profile_id")
                            .from(Alias::new("user_profile_interests"), Alias::new("user_profile_id"))
                            .to(Alias::new("user_profiles"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("user_profile_interests"))
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
