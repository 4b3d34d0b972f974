pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_reference_tables;
mod m20250301_000002_create_users;
mod m20250301_000003_create_facilities;
mod m20250301_000004_create_commerce;
mod m20250301_000005_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_reference_tables::Migration),
            Box::new(m20250301_000002_create_users::Migration),
            Box::new(m20250301_000003_create_facilities::Migration),
            Box::new(m20250301_000004_create_commerce::Migration),
            Box::new(m20250301_000005_seed_reference_data::Migration),
        ]
    }
}
