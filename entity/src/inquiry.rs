use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ContactMethod, ContactTime, InquiryStatus, InquiryType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub inquiry_type: InquiryType,
    pub preferred_contact_method: ContactMethod,
    pub preferred_contact_time: ContactTime,
    pub status: InquiryStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub response_message: Option<String>,
    pub responded_at: Option<DateTimeUtc>,
    pub responded_by: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
