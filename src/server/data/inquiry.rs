//! Inquiry data repository.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::InquiryStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    inquiry::{CreateInquiryParam, Inquiry, InquiryFilter, UpdateInquiryParam},
    pagination::PageRequest,
    property::PropertySummary,
    user::UserSummary,
};

pub struct InquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InquiryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new inquiry with status `new`.
    ///
    /// # Arguments
    /// - `param` - Validated inquiry fields
    /// - `user_id` - Submitter when they were logged in
    pub async fn create(
        &self,
        param: CreateInquiryParam,
        user_id: Option<i32>,
    ) -> Result<Inquiry, DbErr> {
        let now = Utc::now();
        let entity = entity::inquiry::ActiveModel {
            property_id: ActiveValue::Set(param.property_id),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            message: ActiveValue::Set(param.message),
            inquiry_type: ActiveValue::Set(param.inquiry_type),
            preferred_contact_method: ActiveValue::Set(param.preferred_contact_method),
            preferred_contact_time: ActiveValue::Set(param.preferred_contact_time),
            status: ActiveValue::Set(InquiryStatus::New),
            response_message: ActiveValue::Set(None),
            responded_at: ActiveValue::Set(None),
            responded_by: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Inquiry::from_entity(entity, None, None))
    }

    /// Finds an inquiry with its listing and submitter summaries.
    pub async fn find_by_id(&self, inquiry_id: i32) -> Result<Option<Inquiry>, DbErr> {
        let Some(entity) = entity::prelude::Inquiry::find_by_id(inquiry_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Gets inquiries matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((inquiries, total))` - Hydrated inquiries for the page and the number of matches
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &InquiryFilter,
        page: PageRequest,
    ) -> Result<(Vec<Inquiry>, u64), DbErr> {
        let paginator = entity::prelude::Inquiry::find()
            .filter(filter_condition(filter))
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;
        let inquiries = self.hydrate(entities).await?;

        Ok((inquiries, total))
    }

    /// Most recent `limit` inquiries matching `filter`.
    pub async fn recent(&self, filter: &InquiryFilter, limit: u64) -> Result<Vec<Inquiry>, DbErr> {
        let entities = entity::prelude::Inquiry::find()
            .filter(filter_condition(filter))
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    pub async fn count(&self, filter: &InquiryFilter) -> Result<u64, DbErr> {
        entity::prelude::Inquiry::find()
            .filter(filter_condition(filter))
            .count(self.db)
            .await
    }

    /// Applies status, notes and response changes.
    ///
    /// A response records the responder and the current time and forces the
    /// status to `responded`, overriding any status in `param`.
    ///
    /// # Returns
    /// - `Ok(Some(Inquiry))` - Updated, hydrated inquiry
    /// - `Ok(None)` - No inquiry with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        inquiry_id: i32,
        param: UpdateInquiryParam,
        responder_id: i32,
    ) -> Result<Option<Inquiry>, DbErr> {
        let Some(entity) = entity::prelude::Inquiry::find_by_id(inquiry_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::inquiry::ActiveModel = entity.into();
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(response) = param.response {
            active.response_message = ActiveValue::Set(Some(response));
            active.responded_at = ActiveValue::Set(Some(now));
            active.responded_by = ActiveValue::Set(Some(responder_id));
            active.status = ActiveValue::Set(InquiryStatus::Responded);
        }
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Moves an inquiry from `new` to `read`. Other statuses are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - The inquiry was new and is now read
    /// - `Ok(false)` - Nothing changed
    pub async fn mark_read(&self, inquiry_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Inquiry::update_many()
            .col_expr(
                entity::inquiry::Column::Status,
                Expr::value(InquiryStatus::Read),
            )
            .col_expr(entity::inquiry::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::inquiry::Column::Id.eq(inquiry_id))
            .filter(entity::inquiry::Column::Status.eq(InquiryStatus::New))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Permanently deletes an inquiry.
    ///
    /// # Returns
    /// - `Ok(true)` - Inquiry deleted
    /// - `Ok(false)` - No inquiry with that id
    pub async fn delete(&self, inquiry_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Inquiry::delete_by_id(inquiry_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn hydrate(&self, entities: Vec<entity::inquiry::Model>) -> Result<Vec<Inquiry>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids: Vec<i32> = entities.iter().map(|e| e.property_id).collect();
        let user_ids: Vec<i32> = entities.iter().filter_map(|e| e.user_id).collect();

        let properties: HashMap<i32, PropertySummary> = entity::prelude::Property::find()
            .filter(entity::property::Column::Id.is_in(property_ids))
            .all(self.db)
            .await?
            .iter()
            .map(|e| (e.id, PropertySummary::from_entity(e)))
            .collect();

        let users: HashMap<i32, UserSummary> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|e| {
                    (
                        e.id,
                        UserSummary {
                            id: e.id,
                            name: e.name,
                            email: e.email,
                        },
                    )
                })
                .collect()
        };

        Ok(entities
            .into_iter()
            .map(|entity| {
                let property = properties.get(&entity.property_id).cloned();
                let user = entity.user_id.and_then(|id| users.get(&id).cloned());
                Inquiry::from_entity(entity, property, user)
            })
            .collect())
    }
}

pub(super) fn filter_condition(filter: &InquiryFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = filter.status {
        condition = condition.add(entity::inquiry::Column::Status.eq(status));
    }
    if let Some(property_id) = filter.property_id {
        condition = condition.add(entity::inquiry::Column::PropertyId.eq(property_id));
    }
    if let Some(property_ids) = &filter.property_ids {
        condition = condition.add(entity::inquiry::Column::PropertyId.is_in(property_ids.clone()));
    }

    condition
}
