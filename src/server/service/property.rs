use entity::sea_orm_active_enums::PropertyStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::property::PropertyRepository,
    error::{auth::AuthError, AppError},
    model::{
        pagination::{Page, PageRequest},
        property::{
            CreatePropertyParam, Property, PropertyFilter, PropertySort, UpdatePropertyParam,
        },
        user::User,
    },
    util::slug::listing_slug,
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: &PropertyFilter,
        sort: PropertySort,
        page: PageRequest,
    ) -> Result<Page<Property>, AppError> {
        let (properties, total) = PropertyRepository::new(self.db)
            .get_paginated(filter, sort, page)
            .await?;

        Ok(Page::new(properties, total, page))
    }

    /// Gets a listing by id and counts the visit.
    pub async fn get(&self, property_id: i32) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        let property = repo.find_by_id(property_id).await?;

        self.record_view(property).await
    }

    /// Gets a listing by slug and counts the visit.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        let property = repo.find_by_slug(slug).await?;

        self.record_view(property).await
    }

    async fn record_view(&self, property: Option<Property>) -> Result<Property, AppError> {
        let mut property = property.ok_or_else(not_found)?;

        PropertyRepository::new(self.db)
            .increment_views(property.id)
            .await?;
        property.views += 1;

        Ok(property)
    }

    /// Creates a listing owned by `agent`.
    pub async fn create(
        &self,
        agent: &User,
        param: CreatePropertyParam,
    ) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        let slug = listing_slug(&param.title);
        let created = repo.create(agent.id, slug, param).await?;

        tracing::info!(
            property_id = created.id,
            agent_id = agent.id,
            "Created listing {}",
            created.slug
        );

        // Re-read so the response embeds the agent
        repo.find_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Listing missing after creation".to_string()))
    }

    /// Updates a listing owned by `actor`, or any listing when `actor` is an admin.
    pub async fn update(
        &self,
        actor: &User,
        property_id: i32,
        param: UpdatePropertyParam,
    ) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        let existing = repo.find_by_id(property_id).await?.ok_or_else(not_found)?;
        ensure_can_manage(actor, &existing, "Not authorized to update this property")?;

        let slug = match &param.title {
            Some(title) if *title != existing.title => Some(listing_slug(title)),
            _ => None,
        };

        repo.update(property_id, param, slug)
            .await?
            .ok_or_else(not_found)
    }

    /// Soft deletes a listing.
    pub async fn delete(&self, actor: &User, property_id: i32) -> Result<(), AppError> {
        let repo = PropertyRepository::new(self.db);

        let existing = repo.find_by_id(property_id).await?.ok_or_else(not_found)?;
        ensure_can_manage(actor, &existing, "Not authorized to delete this property")?;

        repo.deactivate(property_id).await?;

        tracing::info!(property_id, actor_id = actor.id, "Deactivated listing");

        Ok(())
    }

    /// Featured, active and available listings, newest first.
    pub async fn featured(&self, limit: u64) -> Result<Vec<Property>, AppError> {
        let filter = PropertyFilter {
            featured: Some(true),
            status: Some(PropertyStatus::Available),
            ..PropertyFilter::active()
        };

        let (properties, _) = PropertyRepository::new(self.db)
            .get_paginated(&filter, PropertySort::Newest, PageRequest::first(limit))
            .await?;

        Ok(properties)
    }

    /// Active listings of one agent, newest first.
    pub async fn by_agent(&self, agent_id: i32, page: PageRequest) -> Result<Page<Property>, AppError> {
        let filter = PropertyFilter {
            agent_id: Some(agent_id),
            ..PropertyFilter::active()
        };

        self.list(&filter, PropertySort::Newest, page).await
    }

    /// The caller's own listings, deactivated ones included unless filtered out.
    pub async fn mine(
        &self,
        actor: &User,
        status: Option<PropertyStatus>,
        is_active: Option<bool>,
        page: PageRequest,
    ) -> Result<Page<Property>, AppError> {
        let filter = PropertyFilter {
            agent_id: Some(actor.id),
            status,
            is_active,
            ..Default::default()
        };

        self.list(&filter, PropertySort::Newest, page).await
    }

    pub async fn similar(&self, property_id: i32, limit: u64) -> Result<Vec<Property>, AppError> {
        let repo = PropertyRepository::new(self.db);

        let base = repo.find_by_id(property_id).await?.ok_or_else(not_found)?;

        Ok(repo.similar(&base, limit).await?)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Property not found".to_string())
}

fn ensure_can_manage(actor: &User, property: &Property, message: &str) -> Result<(), AppError> {
    if actor.is_admin() || property.is_owned_by(actor.id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(actor.id, message.to_string()).into())
}
