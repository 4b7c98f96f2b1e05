//! Demo data for a fresh database.
//!
//! Enabled with `SEED_DATABASE=true`. Seeding only runs while the user table
//! is empty, so restarting a seeded server leaves its data alone.

use entity::{
    property::PropertyImage,
    sea_orm_active_enums::{Amenity, ListingType, PriceUnit, PropertyStatus, PropertyType, Role},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, user::UserRepository},
    error::AppError,
    model::{
        property::{Address, CreatePropertyParam, Features, Location, DEFAULT_COUNTRY},
        user::{CreateUserParam, UpdateUserParam, User},
    },
    util::{password::hash_password, slug::listing_slug},
};

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    phone: &'static str,
    company: Option<&'static str>,
    bio: Option<&'static str>,
}

const USERS: [DemoUser; 4] = [
    DemoUser {
        name: "Admin User",
        email: "admin@realestate.com",
        password: "admin123",
        role: Role::Admin,
        phone: "+1 (555) 123-4567",
        company: Some("RealEstate Pro"),
        bio: Some("Platform administrator with extensive experience in real estate."),
    },
    DemoUser {
        name: "John Smith",
        email: "john@realestate.com",
        password: "agent123",
        role: Role::Agent,
        phone: "+1 (555) 234-5678",
        company: Some("Smith Realty"),
        bio: Some("Top-rated real estate agent with 10+ years of experience in luxury properties."),
    },
    DemoUser {
        name: "Sarah Johnson",
        email: "sarah@realestate.com",
        password: "agent123",
        role: Role::Agent,
        phone: "+1 (555) 345-6789",
        company: Some("Johnson Properties"),
        bio: Some("Specializing in family homes and residential properties."),
    },
    DemoUser {
        name: "Mike Wilson",
        email: "mike@example.com",
        password: "user123",
        role: Role::User,
        phone: "+1 (555) 456-7890",
        company: None,
        bio: None,
    },
];

/// Seeds demo users and listings when no user exists yet.
///
/// Listings are spread round-robin over the seeded agents and admins.
///
/// # Returns
/// - `Ok(true)` - Demo data was inserted
/// - `Ok(false)` - The database already has users, nothing was changed
/// - `Err(AppError)` - Hashing or a database write failed
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.count_all().await? > 0 {
        tracing::info!("Database already has users, skipping demo data");
        return Ok(false);
    }

    let mut listers: Vec<User> = Vec::new();
    for demo in &USERS {
        let user = seed_user(&user_repo, demo).await?;
        if user.role.can_list() {
            listers.push(user);
        }
    }

    let property_repo = PropertyRepository::new(db);
    let listings = demo_listings();
    let listing_count = listings.len();
    for (i, param) in listings.into_iter().enumerate() {
        let agent = &listers[i % listers.len()];
        let slug = listing_slug(&param.title);
        property_repo.create(agent.id, slug, param).await?;
    }

    tracing::info!(
        "Seeded {} demo users and {} demo listings",
        USERS.len(),
        listing_count
    );

    Ok(true)
}

async fn seed_user(repo: &UserRepository<'_>, demo: &DemoUser) -> Result<User, AppError> {
    let user = repo
        .create(CreateUserParam {
            name: demo.name.to_string(),
            email: demo.email.to_string(),
            password_hash: hash_password(demo.password)?,
            phone: Some(demo.phone.to_string()),
            role: demo.role,
        })
        .await?;

    if demo.role == Role::User {
        return Ok(user);
    }

    let profile = UpdateUserParam {
        company: demo.company.map(str::to_string),
        bio: demo.bio.map(str::to_string),
        is_verified: Some(true),
        ..Default::default()
    };

    repo.update(user.id, profile)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Seeded user {} vanished", user.id)))
}

#[allow(clippy::too_many_arguments)]
fn listing(
    title: &str,
    description: &str,
    property_type: PropertyType,
    listing_type: ListingType,
    (price, price_unit): (f64, PriceUnit),
    (street, city, state, zip_code): (&str, &str, &str, &str),
    [longitude, latitude]: [f64; 2],
    features: Features,
    amenities: Vec<Amenity>,
    image_urls: &[&str],
    is_featured: bool,
) -> CreatePropertyParam {
    CreatePropertyParam {
        title: title.to_string(),
        description: description.to_string(),
        property_type,
        listing_type,
        status: PropertyStatus::Available,
        price,
        price_unit,
        address: Address {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        },
        location: Location {
            longitude: Some(longitude),
            latitude: Some(latitude),
            formatted_address: None,
        },
        features,
        amenities,
        images: image_urls
            .iter()
            .enumerate()
            .map(|(i, url)| PropertyImage {
                url: url.to_string(),
                public_id: None,
                caption: None,
                is_main: i == 0,
            })
            .collect(),
        virtual_tour: None,
        video: None,
        is_featured,
    }
}

fn features(bedrooms: i32, bathrooms: i32, area: f64, year_built: i32, parking: i32, floors: i32) -> Features {
    Features {
        bedrooms,
        bathrooms,
        area,
        year_built: Some(year_built),
        parking,
        floors,
    }
}

fn demo_listings() -> Vec<CreatePropertyParam> {
    use Amenity::*;

    vec![
        listing(
            "Luxury Modern Villa with Pool",
            "Experience luxury living in this stunning modern villa. Features include a private pool, \
             spacious living areas, gourmet kitchen with high-end appliances, and breathtaking views. \
             Smart home technology throughout.",
            PropertyType::Villa,
            ListingType::Sale,
            (2_500_000.0, PriceUnit::Total),
            ("123 Luxury Lane", "Beverly Hills", "California", "90210"),
            [-118.4065, 34.0901],
            features(5, 6, 6500.0, 2022, 3, 2),
            vec![Pool, Gym, SmartHome, Security, Garden, Garage, AirConditioning],
            &[
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=1200",
                "https://images.unsplash.com/photo-1613977257363-707ba9348227?w=1200",
            ],
            true,
        ),
        listing(
            "Downtown Penthouse with City Views",
            "Spectacular penthouse in the heart of downtown. Floor-to-ceiling windows offer panoramic \
             city views, with private elevator access and a spacious rooftop terrace.",
            PropertyType::Apartment,
            ListingType::Sale,
            (3_200_000.0, PriceUnit::Total),
            ("500 High Rise Blvd", "New York", "New York", "10001"),
            [-73.9857, 40.7484],
            features(3, 3, 3200.0, 2021, 2, 1),
            vec![Elevator, Gym, Pool, Doorman, Rooftop, CityView, AirConditioning],
            &["https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=1200"],
            true,
        ),
        listing(
            "Charming Family Home in Quiet Neighborhood",
            "Perfect family home in a highly sought-after neighborhood. Updated kitchen, hardwood \
             floors, large backyard and an excellent school district. Move-in ready.",
            PropertyType::House,
            ListingType::Sale,
            (750_000.0, PriceUnit::Total),
            ("456 Family Circle", "Austin", "Texas", "78701"),
            [-97.7431, 30.2672],
            features(4, 3, 2800.0, 2015, 2, 2),
            vec![Garden, Garage, HardwoodFloors, PetFriendly, AirConditioning, Heating],
            &["https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=1200"],
            true,
        ),
        listing(
            "Modern Condo Near Beach",
            "Wake up to ocean breezes in this modern beachside condo. Open layout, updated finishes \
             and a private balcony with water views. Walking distance to the beach.",
            PropertyType::Condo,
            ListingType::Rent,
            (3_500.0, PriceUnit::Monthly),
            ("789 Ocean Drive", "Miami", "Florida", "33139"),
            [-80.1341, 25.7825],
            features(2, 2, 1400.0, 2019, 1, 1),
            vec![Pool, Gym, Balcony, Waterfront, AirConditioning, Security],
            &["https://images.unsplash.com/photo-1567496898669-ee935f5f647a?w=1200"],
            true,
        ),
        listing(
            "Cozy Studio in Arts District",
            "Charming studio apartment in the vibrant Arts District. Exposed brick, high ceilings \
             and large windows. Walking distance to galleries, cafes and public transit.",
            PropertyType::Apartment,
            ListingType::Rent,
            (1_800.0, PriceUnit::Monthly),
            ("321 Art Street", "Los Angeles", "California", "90013"),
            [-118.2349, 34.0447],
            features(0, 1, 600.0, 1920, 0, 1),
            vec![Laundry, PetFriendly, HardwoodFloors],
            &["https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=1200"],
            false,
        ),
        listing(
            "Executive Office Space Downtown",
            "Premium office space in a prime downtown location with conference rooms, a reception \
             area and parking. High-speed internet and 24/7 access included.",
            PropertyType::Office,
            ListingType::Rent,
            (8_500.0, PriceUnit::Monthly),
            ("100 Business Center", "Chicago", "Illinois", "60601"),
            [-87.6298, 41.8781],
            features(0, 2, 3000.0, 2018, 5, 1),
            vec![Elevator, Security, AirConditioning, Heating],
            &["https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200"],
            false,
        ),
    ]
}
