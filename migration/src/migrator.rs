use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Table migrations in dependency order: profiles first, then the tables
    /// that reference them.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202508010001_create_user_profiles::Migration),
            Box::new(migrations::m202508010002_create_user_profile_interests::Migration),
            Box::new(migrations::m202508010003_create_statistics::Migration),
        ]
    }
}
