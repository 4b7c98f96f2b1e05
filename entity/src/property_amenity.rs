use sea_orm::entity::prelude::*;

/// Amenity tag attached to a listing. `amenity` holds the string value of
/// `sea_orm_active_enums::Amenity`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_amenity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub amenity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
