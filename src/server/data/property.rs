//! Listing data repository.
//!
//! Listings are stored in the `property` table with their amenities in the
//! `property_amenity` join table. Reads hydrate both amenities and the owning
//! agent in batch so a page of listings costs a constant number of queries.

use std::collections::HashMap;

use chrono::Utc;
use entity::{
    property::PropertyImages,
    sea_orm_active_enums::{Amenity, PropertyStatus},
};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select, TransactionTrait,
};

use crate::server::{
    model::{
        pagination::PageRequest,
        property::{
            CreatePropertyParam, Property, PropertyFilter, PropertySort, PropertySummary,
            UpdatePropertyParam,
        },
        user::User,
    },
    util::parse::parse_stored_amenities,
};

/// Share of the base price either side that still counts as a similar listing.
const SIMILAR_PRICE_RANGE: f64 = 0.3;

pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a listing and its amenities in one transaction.
    ///
    /// # Arguments
    /// - `agent_id` - Owner of the listing
    /// - `slug` - Pre-generated unique slug
    /// - `param` - Validated listing fields
    ///
    /// # Returns
    /// - `Ok(Property)` - The created listing without its agent loaded
    /// - `Err(DbErr)` - Database error, including a slug collision
    pub async fn create(
        &self,
        agent_id: i32,
        slug: String,
        param: CreatePropertyParam,
    ) -> Result<Property, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::property::ActiveModel {
            title_lower: ActiveValue::Set(param.title.to_lowercase()),
            description_lower: ActiveValue::Set(param.description.to_lowercase()),
            address_city_lower: ActiveValue::Set(param.address.city.to_lowercase()),
            address_state_lower: ActiveValue::Set(param.address.state.to_lowercase()),
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(param.description),
            property_type: ActiveValue::Set(param.property_type),
            listing_type: ActiveValue::Set(param.listing_type),
            status: ActiveValue::Set(param.status),
            price: ActiveValue::Set(param.price),
            price_unit: ActiveValue::Set(param.price_unit),
            address_street: ActiveValue::Set(param.address.street),
            address_city: ActiveValue::Set(param.address.city),
            address_state: ActiveValue::Set(param.address.state),
            address_zip_code: ActiveValue::Set(param.address.zip_code),
            address_country: ActiveValue::Set(param.address.country),
            longitude: ActiveValue::Set(param.location.longitude),
            latitude: ActiveValue::Set(param.location.latitude),
            formatted_address: ActiveValue::Set(param.location.formatted_address),
            bedrooms: ActiveValue::Set(param.features.bedrooms),
            bathrooms: ActiveValue::Set(param.features.bathrooms),
            area: ActiveValue::Set(param.features.area),
            year_built: ActiveValue::Set(param.features.year_built),
            parking: ActiveValue::Set(param.features.parking),
            floors: ActiveValue::Set(param.features.floors),
            images: ActiveValue::Set(PropertyImages(param.images)),
            virtual_tour: ActiveValue::Set(param.virtual_tour),
            video: ActiveValue::Set(param.video),
            agent_id: ActiveValue::Set(agent_id),
            is_featured: ActiveValue::Set(param.is_featured),
            views: ActiveValue::Set(0),
            published_at: ActiveValue::Set(now),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_amenities(&txn, entity.id, &param.amenities).await?;
        txn.commit().await?;

        Ok(Property::from_entity(entity, param.amenities, None))
    }

    /// Finds a listing by id, active or not, with amenities and agent loaded.
    pub async fn find_by_id(&self, property_id: i32) -> Result<Option<Property>, DbErr> {
        let entity = entity::prelude::Property::find_by_id(property_id)
            .one(self.db)
            .await?;

        self.hydrate_one(entity).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Property>, DbErr> {
        let entity = entity::prelude::Property::find()
            .filter(entity::property::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        self.hydrate_one(entity).await
    }

    /// Loads fully hydrated listings keyed by id.
    pub async fn find_by_ids(&self, property_ids: &[i32]) -> Result<HashMap<i32, Property>, DbErr> {
        if property_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Property::find()
            .filter(entity::property::Column::Id.is_in(property_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(self
            .hydrate(entities)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }

    /// Loads listing summaries keyed by id without touching amenities or agents.
    pub async fn summaries_by_ids(
        &self,
        property_ids: &[i32],
    ) -> Result<HashMap<i32, PropertySummary>, DbErr> {
        if property_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Property::find()
            .filter(entity::property::Column::Id.is_in(property_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .iter()
            .map(|e| (e.id, PropertySummary::from_entity(e)))
            .collect())
    }

    /// Gets a page of listings matching `filter` in the requested order.
    ///
    /// # Returns
    /// - `Ok((properties, total))` - Hydrated listings for the page and the number of matches
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &PropertyFilter,
        sort: PropertySort,
        page: PageRequest,
    ) -> Result<(Vec<Property>, u64), DbErr> {
        let query = sorted(
            entity::prelude::Property::find().filter(filter_condition(filter)),
            sort,
        );

        let paginator = query.paginate(self.db, page.limit);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;
        let properties = self.hydrate(entities).await?;

        Ok((properties, total))
    }

    /// Gets up to `limit` summaries matching `filter` in the requested order.
    pub async fn get_summaries(
        &self,
        filter: &PropertyFilter,
        sort: PropertySort,
        limit: u64,
    ) -> Result<Vec<PropertySummary>, DbErr> {
        let entities = sorted(
            entity::prelude::Property::find().filter(filter_condition(filter)),
            sort,
        )
        .limit(limit)
        .all(self.db)
        .await?;

        Ok(entities.iter().map(PropertySummary::from_entity).collect())
    }

    /// Counts listings matching `filter`.
    pub async fn count(&self, filter: &PropertyFilter) -> Result<u64, DbErr> {
        entity::prelude::Property::find()
            .filter(filter_condition(filter))
            .count(self.db)
            .await
    }

    /// Applies a partial update. Amenities are replaced when present.
    ///
    /// # Arguments
    /// - `property_id` - Listing to update
    /// - `param` - Validated changes
    /// - `slug` - Regenerated slug when the title changed
    ///
    /// # Returns
    /// - `Ok(Some(Property))` - Updated, hydrated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        property_id: i32,
        param: UpdatePropertyParam,
        slug: Option<String>,
    ) -> Result<Option<Property>, DbErr> {
        let Some(entity) = entity::prelude::Property::find_by_id(property_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;
        let mut active: entity::property::ActiveModel = entity.into();

        if let Some(title) = param.title {
            active.title_lower = ActiveValue::Set(title.to_lowercase());
            active.title = ActiveValue::Set(title);
        }
        if let Some(slug) = slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = param.description {
            active.description_lower = ActiveValue::Set(description.to_lowercase());
            active.description = ActiveValue::Set(description);
        }
        if let Some(property_type) = param.property_type {
            active.property_type = ActiveValue::Set(property_type);
        }
        if let Some(listing_type) = param.listing_type {
            active.listing_type = ActiveValue::Set(listing_type);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(price_unit) = param.price_unit {
            active.price_unit = ActiveValue::Set(price_unit);
        }

        let address = param.address;
        if let Some(street) = address.street {
            active.address_street = ActiveValue::Set(street);
        }
        if let Some(city) = address.city {
            active.address_city_lower = ActiveValue::Set(city.to_lowercase());
            active.address_city = ActiveValue::Set(city);
        }
        if let Some(state) = address.state {
            active.address_state_lower = ActiveValue::Set(state.to_lowercase());
            active.address_state = ActiveValue::Set(state);
        }
        if let Some(zip_code) = address.zip_code {
            active.address_zip_code = ActiveValue::Set(zip_code);
        }
        if let Some(country) = address.country {
            active.address_country = ActiveValue::Set(country);
        }

        if let Some(location) = param.location {
            active.longitude = ActiveValue::Set(location.longitude);
            active.latitude = ActiveValue::Set(location.latitude);
            active.formatted_address = ActiveValue::Set(location.formatted_address);
        }

        let features = param.features;
        if let Some(bedrooms) = features.bedrooms {
            active.bedrooms = ActiveValue::Set(bedrooms);
        }
        if let Some(bathrooms) = features.bathrooms {
            active.bathrooms = ActiveValue::Set(bathrooms);
        }
        if let Some(area) = features.area {
            active.area = ActiveValue::Set(area);
        }
        if let Some(year_built) = features.year_built {
            active.year_built = ActiveValue::Set(Some(year_built));
        }
        if let Some(parking) = features.parking {
            active.parking = ActiveValue::Set(parking);
        }
        if let Some(floors) = features.floors {
            active.floors = ActiveValue::Set(floors);
        }

        if let Some(images) = param.images {
            active.images = ActiveValue::Set(PropertyImages(images));
        }
        if let Some(virtual_tour) = param.virtual_tour {
            active.virtual_tour = ActiveValue::Set(Some(virtual_tour));
        }
        if let Some(video) = param.video {
            active.video = ActiveValue::Set(Some(video));
        }
        if let Some(is_featured) = param.is_featured {
            active.is_featured = ActiveValue::Set(is_featured);
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(&txn).await?;

        if let Some(amenities) = param.amenities {
            entity::prelude::PropertyAmenity::delete_many()
                .filter(entity::property_amenity::Column::PropertyId.eq(property_id))
                .exec(&txn)
                .await?;
            insert_amenities(&txn, property_id, &amenities).await?;
        }

        txn.commit().await?;

        self.find_by_id(property_id).await
    }

    /// Soft deletes a listing.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing found and deactivated
    /// - `Ok(false)` - No listing with that id
    pub async fn deactivate(&self, property_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::update_many()
            .col_expr(entity::property::Column::IsActive, Expr::value(false))
            .col_expr(entity::property::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::property::Column::Id.eq(property_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the view counter in the database so concurrent readers never
    /// lose an increment.
    pub async fn increment_views(&self, property_id: i32) -> Result<(), DbErr> {
        entity::prelude::Property::update_many()
            .col_expr(entity::property::Column::Views, Expr::cust("views + 1"))
            .filter(entity::property::Column::Id.eq(property_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds other active, available listings sharing the base listing's type
    /// or city, or priced within 30% of it, newest first.
    pub async fn similar(&self, base: &Property, limit: u64) -> Result<Vec<Property>, DbErr> {
        let range = base.price * SIMILAR_PRICE_RANGE;

        let entities = entity::prelude::Property::find()
            .filter(entity::property::Column::Id.ne(base.id))
            .filter(entity::property::Column::IsActive.eq(true))
            .filter(entity::property::Column::Status.eq(PropertyStatus::Available))
            .filter(
                Condition::any()
                    .add(entity::property::Column::PropertyType.eq(base.property_type))
                    .add(entity::property::Column::AddressCity.eq(base.address.city.as_str()))
                    .add(
                        entity::property::Column::Price
                            .between(base.price - range, base.price + range),
                    ),
            )
            .order_by_desc(entity::property::Column::CreatedAt)
            .order_by_desc(entity::property::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Average price of available, active listings in `city`. Zero when there are none.
    pub async fn average_price_by_city(&self, city: &str) -> Result<f64, DbErr> {
        let prices: Vec<f64> = entity::prelude::Property::find()
            .select_only()
            .column(entity::property::Column::Price)
            .filter(entity::property::Column::AddressCity.eq(city))
            .filter(entity::property::Column::Status.eq(PropertyStatus::Available))
            .filter(entity::property::Column::IsActive.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        if prices.is_empty() {
            return Ok(0.0);
        }

        Ok(prices.iter().sum::<f64>() / prices.len() as f64)
    }

    /// Counts listings per agent. Agents without listings are absent from the map.
    ///
    /// # Arguments
    /// - `agent_ids` - Agents to count for
    /// - `active_only` - Count only active listings
    pub async fn counts_by_agent(
        &self,
        agent_ids: &[i32],
        active_only: bool,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if agent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut query = entity::prelude::Property::find()
            .select_only()
            .column(entity::property::Column::AgentId)
            .column_as(entity::property::Column::Id.count(), "count")
            .filter(entity::property::Column::AgentId.is_in(agent_ids.to_vec()))
            .group_by(entity::property::Column::AgentId);

        if active_only {
            query = query.filter(entity::property::Column::IsActive.eq(true));
        }

        let rows: Vec<(i32, i64)> = query.into_tuple().all(self.db).await?;

        Ok(rows
            .into_iter()
            .map(|(agent_id, count)| (agent_id, count.max(0) as u64))
            .collect())
    }

    /// Ids of every listing owned by `agent_id`, active or not.
    pub async fn ids_by_agent(&self, agent_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Property::find()
            .select_only()
            .column(entity::property::Column::Id)
            .filter(entity::property::Column::AgentId.eq(agent_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn hydrate_one(
        &self,
        entity: Option<entity::property::Model>,
    ) -> Result<Option<Property>, DbErr> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Attaches amenities and agent summaries to listing rows, keeping row order.
    async fn hydrate(&self, entities: Vec<entity::property::Model>) -> Result<Vec<Property>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut agent_ids: Vec<i32> = entities.iter().map(|e| e.agent_id).collect();
        agent_ids.sort_unstable();
        agent_ids.dedup();

        let mut amenities: HashMap<i32, Vec<String>> = HashMap::new();
        for row in entity::prelude::PropertyAmenity::find()
            .filter(entity::property_amenity::Column::PropertyId.is_in(property_ids))
            .order_by_asc(entity::property_amenity::Column::Amenity)
            .all(self.db)
            .await?
        {
            amenities.entry(row.property_id).or_default().push(row.amenity);
        }

        let agents: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(agent_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, User::from_entity(e)))
            .collect();

        Ok(entities
            .into_iter()
            .map(|entity| {
                let stored = amenities.remove(&entity.id).unwrap_or_default();
                let agent = agents.get(&entity.agent_id).map(User::agent_summary);
                Property::from_entity(entity, parse_stored_amenities(stored), agent)
            })
            .collect())
    }
}

async fn insert_amenities<C: ConnectionTrait>(
    conn: &C,
    property_id: i32,
    amenities: &[Amenity],
) -> Result<(), DbErr> {
    for amenity in amenities {
        entity::property_amenity::ActiveModel {
            property_id: ActiveValue::Set(property_id),
            amenity: ActiveValue::Set(amenity.to_value()),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Builds the WHERE clause for a listing filter. Every criterion must hold.
pub(super) fn filter_condition(filter: &PropertyFilter) -> Condition {
    use entity::property::Column;

    let mut condition = Condition::all();

    if let Some(is_active) = filter.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }
    if let Some(property_type) = filter.property_type {
        condition = condition.add(Column::PropertyType.eq(property_type));
    }
    if let Some(listing_type) = filter.listing_type {
        condition = condition.add(Column::ListingType.eq(listing_type));
    }
    if let Some(status) = filter.status {
        condition = condition.add(Column::Status.eq(status));
    }
    if let Some(city) = non_empty(&filter.city) {
        condition = condition.add(Column::AddressCityLower.contains(city.to_lowercase()));
    }
    if let Some(state) = non_empty(&filter.state) {
        condition = condition.add(Column::AddressStateLower.contains(state.to_lowercase()));
    }
    if let Some(min_price) = filter.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }
    if let Some(bedrooms) = filter.bedrooms {
        condition = condition.add(Column::Bedrooms.gte(bedrooms));
    }
    if let Some(bathrooms) = filter.bathrooms {
        condition = condition.add(Column::Bathrooms.gte(bathrooms));
    }
    if let Some(min_area) = filter.min_area {
        condition = condition.add(Column::Area.gte(min_area));
    }
    if let Some(max_area) = filter.max_area {
        condition = condition.add(Column::Area.lte(max_area));
    }
    for amenity in &filter.amenities {
        condition = condition.add(
            Column::Id.in_subquery(
                entity::prelude::PropertyAmenity::find()
                    .select_only()
                    .column(entity::property_amenity::Column::PropertyId)
                    .filter(entity::property_amenity::Column::Amenity.eq(amenity.to_value()))
                    .into_query(),
            ),
        );
    }
    if let Some(featured) = filter.featured {
        condition = condition.add(Column::IsFeatured.eq(featured));
    }
    if let Some(agent_id) = filter.agent_id {
        condition = condition.add(Column::AgentId.eq(agent_id));
    }
    if let Some(search) = non_empty(&filter.search) {
        let needle = search.to_lowercase();
        condition = condition.add(
            Condition::any()
                .add(Column::TitleLower.contains(needle.as_str()))
                .add(Column::DescriptionLower.contains(needle.as_str()))
                .add(Column::AddressCityLower.contains(needle.as_str())),
        );
    }

    condition
}

fn sorted(
    query: Select<entity::prelude::Property>,
    sort: PropertySort,
) -> Select<entity::prelude::Property> {
    use entity::property::Column;

    match sort {
        PropertySort::PriceAsc => query
            .order_by_asc(Column::Price)
            .order_by_asc(Column::Id),
        PropertySort::PriceDesc => query
            .order_by_desc(Column::Price)
            .order_by_desc(Column::Id),
        PropertySort::Newest => query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id),
        PropertySort::Oldest => query
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id),
        PropertySort::Popular => query
            .order_by_desc(Column::Views)
            .order_by_desc(Column::Id),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
