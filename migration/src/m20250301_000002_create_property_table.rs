use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string(Property::Title))
                    .col(string_uniq(Property::Slug))
                    .col(text(Property::Description))
                    .col(string(Property::PropertyType))
                    .col(string(Property::ListingType))
                    .col(string(Property::Status).default("available"))
                    .col(double(Property::Price))
                    .col(string(Property::PriceUnit).default("total"))
                    .col(string(Property::AddressStreet))
                    .col(string(Property::AddressCity))
                    .col(string(Property::AddressState))
                    .col(string(Property::AddressZipCode))
                    .col(string(Property::AddressCountry).default("USA"))
                    .col(double_null(Property::Longitude))
                    .col(double_null(Property::Latitude))
                    .col(string_null(Property::FormattedAddress))
                    .col(integer(Property::Bedrooms).default(0))
                    .col(integer(Property::Bathrooms).default(0))
                    .col(double(Property::Area))
                    .col(integer_null(Property::YearBuilt))
                    .col(integer(Property::Parking).default(0))
                    .col(integer(Property::Floors).default(1))
                    .col(json(Property::Images))
                    .col(string_null(Property::VirtualTour))
                    .col(string_null(Property::Video))
                    .col(integer(Property::AgentId))
                    .col(boolean(Property::IsFeatured).default(false))
                    .col(integer(Property::Views).default(0))
                    .col(timestamp_with_time_zone(Property::PublishedAt).default(Expr::current_timestamp()))
                    .col(boolean(Property::IsActive).default(true))
                    .col(timestamp_with_time_zone(Property::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Property::UpdatedAt).default(Expr::current_timestamp()))
                    .col(string(Property::TitleLower))
                    .col(text(Property::DescriptionLower))
                    .col(string(Property::AddressCityLower))
                    .col(string(Property::AddressStateLower))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_agent_id")
                            .from(Property::Table, Property::AgentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let indexes = [
            (
                "idx_property_city_state",
                vec![Property::AddressCityLower, Property::AddressStateLower],
            ),
            ("idx_property_price", vec![Property::Price]),
            ("idx_property_type", vec![Property::PropertyType]),
            ("idx_property_listing_type", vec![Property::ListingType]),
            ("idx_property_status", vec![Property::Status]),
            ("idx_property_featured", vec![Property::IsFeatured]),
            ("idx_property_created_at", vec![Property::CreatedAt]),
            ("idx_property_agent_id", vec![Property::AgentId]),
        ];

        for (name, cols) in indexes {
            let mut index = Index::create();
            index.name(name).table(Property::Table);
            for col in cols {
                index.col(col);
            }
            manager.create_index(index.to_owned()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    Title,
    Slug,
    Description,
    PropertyType,
    ListingType,
    Status,
    Price,
    PriceUnit,
    AddressStreet,
    AddressCity,
    AddressState,
    AddressZipCode,
    AddressCountry,
    Longitude,
    Latitude,
    FormattedAddress,
    Bedrooms,
    Bathrooms,
    Area,
    YearBuilt,
    Parking,
    Floors,
    Images,
    VirtualTour,
    Video,
    AgentId,
    IsFeatured,
    Views,
    PublishedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
    TitleLower,
    DescriptionLower,
    AddressCityLower,
    AddressStateLower,
}
