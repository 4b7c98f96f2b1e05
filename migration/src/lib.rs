pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_property_table;
mod m20250301_000003_create_property_amenity_table;
mod m20250301_000004_create_inquiry_table;
mod m20250301_000005_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_property_table::Migration),
            Box::new(m20250301_000003_create_property_amenity_table::Migration),
            Box::new(m20250301_000004_create_inquiry_table::Migration),
            Box::new(m20250301_000005_create_favorite_table::Migration),
        ]
    }
}
