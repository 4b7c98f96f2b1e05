use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UpdatePasswordDto},
        favorite::{FavoriteCheckDto, FavoriteDto},
        inquiry::{CreateInquiryDto, InquiryDto, InquiryResponseDto, UpdateInquiryDto},
        property::{
            AddressDto, AddressUpdateDto, CreatePropertyDto, FeaturesDto, FeaturesInputDto,
            ImageDto, LocationDto, PropertyDto, PropertySummaryDto, UpdatePropertyDto,
        },
        stats::{
            AgentCountsDto, AgentStatsDto, DashboardStatsDto, GroupCountDto, MonthlyCountDto,
            OverviewCountsDto, OverviewStatsDto, PriceStatsDto,
        },
        upload::{ImageUploadForm, ImagesUploadForm, UploadedImageDto},
        user::{AgentSummaryDto, SocialLinksDto, UpdateUserDto, UserAddressDto, UserDto, UserSummaryDto},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            favorite::{self, FAVORITE_TAG},
            inquiry::{self, INQUIRY_TAG},
            property::{self, PROPERTY_TAG},
            stats::{self, STATS_TAG},
            upload::{self, UPLOAD_TAG},
            user::{self, USER_TAG},
        },
        error::AppError,
        service::upload::{MAX_IMAGES_PER_UPLOAD, MAX_IMAGE_SIZE},
        state::AppState,
    },
};

/// Body limit for upload routes: a full batch of images plus form overhead.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_SIZE * MAX_IMAGES_PER_UPLOAD + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "RealEstate API", description = "Property listings, inquiries and favorites"),
    paths(
        auth::register,
        auth::login,
        auth::me,
        auth::update_password,
        auth::logout,
        property::list_properties,
        property::get_property,
        property::get_property_by_slug,
        property::create_property,
        property::update_property,
        property::delete_property,
        property::featured_properties,
        property::agent_properties,
        property::my_properties,
        property::similar_properties,
        user::list_users,
        user::list_agents,
        user::get_user,
        user::update_user,
        user::delete_user,
        inquiry::create_inquiry,
        inquiry::list_inquiries,
        inquiry::my_inquiries,
        inquiry::get_inquiry,
        inquiry::update_inquiry,
        inquiry::delete_inquiry,
        favorite::list_favorites,
        favorite::add_favorite,
        favorite::remove_favorite,
        favorite::check_favorite,
        stats::overview_stats,
        stats::agent_stats,
        stats::dashboard_stats,
        upload::upload_image,
        upload::upload_images,
        upload::delete_image,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        MessageDto,
        RegisterDto,
        LoginDto,
        UpdatePasswordDto,
        UserDto,
        UserSummaryDto,
        AgentSummaryDto,
        UserAddressDto,
        SocialLinksDto,
        UpdateUserDto,
        PropertyDto,
        PropertySummaryDto,
        CreatePropertyDto,
        UpdatePropertyDto,
        AddressDto,
        AddressUpdateDto,
        LocationDto,
        FeaturesDto,
        FeaturesInputDto,
        ImageDto,
        InquiryDto,
        InquiryResponseDto,
        CreateInquiryDto,
        UpdateInquiryDto,
        FavoriteDto,
        FavoriteCheckDto,
        OverviewStatsDto,
        OverviewCountsDto,
        AgentStatsDto,
        AgentCountsDto,
        DashboardStatsDto,
        GroupCountDto,
        MonthlyCountDto,
        PriceStatsDto,
        UploadedImageDto,
        ImageUploadForm,
        ImagesUploadForm,
    )),
    tags(
        (name = AUTH_TAG, description = "Registration, login and sessions"),
        (name = PROPERTY_TAG, description = "Listing search and management"),
        (name = USER_TAG, description = "User profiles and agents"),
        (name = INQUIRY_TAG, description = "Contact requests about listings"),
        (name = FAVORITE_TAG, description = "Saved listings"),
        (name = STATS_TAG, description = "Dashboard statistics"),
        (name = UPLOAD_TAG, description = "Image uploads"),
    )
)]
pub struct ApiDoc;

/// Builds every API route, the OpenAPI document and the upload file server.
///
/// # Arguments
/// - `upload_dir` - Directory served under `/uploads`
pub fn router(upload_dir: &Path) -> Router<AppState> {
    let upload_routes = Router::new()
        .route("/api/upload/image", post(upload::upload_image))
        .route("/api/upload/images", post(upload::upload_images))
        .route(
            "/api/upload/image/{public_id}",
            axum::routing::delete(upload::delete_image),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password", put(auth::update_password))
        .route("/api/auth/logout", get(auth::logout))
        .route(
            "/api/properties",
            get(property::list_properties).post(property::create_property),
        )
        .route("/api/properties/featured", get(property::featured_properties))
        .route("/api/properties/slug/{slug}", get(property::get_property_by_slug))
        .route("/api/properties/agent/{agent_id}", get(property::agent_properties))
        .route(
            "/api/properties/dashboard/my-properties",
            get(property::my_properties),
        )
        .route(
            "/api/properties/{id}",
            get(property::get_property)
                .put(property::update_property)
                .delete(property::delete_property),
        )
        .route("/api/properties/{id}/similar", get(property::similar_properties))
        .route("/api/users", get(user::list_users))
        .route("/api/users/agents", get(user::list_agents))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/inquiries",
            get(inquiry::list_inquiries).post(inquiry::create_inquiry),
        )
        .route("/api/inquiries/my-inquiries", get(inquiry::my_inquiries))
        .route(
            "/api/inquiries/{id}",
            get(inquiry::get_inquiry)
                .put(inquiry::update_inquiry)
                .delete(inquiry::delete_inquiry),
        )
        .route("/api/favorites", get(favorite::list_favorites))
        .route(
            "/api/favorites/check/{property_id}",
            get(favorite::check_favorite),
        )
        .route(
            "/api/favorites/{property_id}",
            post(favorite::add_favorite).delete(favorite::remove_favorite),
        )
        .route("/api/stats", get(stats::overview_stats))
        .route("/api/stats/agent", get(stats::agent_stats))
        .route("/api/stats/dashboard", get(stats::dashboard_stats))
        .merge(upload_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
