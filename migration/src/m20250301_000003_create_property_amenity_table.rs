use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_property_table::Property;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyAmenity::Table)
                    .if_not_exists()
                    .col(integer(PropertyAmenity::PropertyId))
                    .col(string(PropertyAmenity::Amenity))
                    .primary_key(
                        Index::create()
                            .col(PropertyAmenity::PropertyId)
                            .col(PropertyAmenity::Amenity),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_amenity_property_id")
                            .from(PropertyAmenity::Table, PropertyAmenity::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_amenity_amenity")
                    .table(PropertyAmenity::Table)
                    .col(PropertyAmenity::Amenity)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PropertyAmenity {
    Table,
    PropertyId,
    Amenity,
}
