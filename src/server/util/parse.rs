use entity::sea_orm_active_enums::Amenity;
use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a comma-separated amenity filter such as `pool,gym`.
///
/// Blank entries are skipped. Duplicates are removed while keeping the first
/// occurrence order.
///
/// # Returns
/// - `Ok(Vec<Amenity>)` - Parsed amenities, empty for a blank string
/// - `Err(AppError::BadRequest)` - An entry is not a known amenity
pub fn parse_amenity_list(value: &str) -> Result<Vec<Amenity>, AppError> {
    let mut amenities = Vec::new();

    for raw in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let amenity = Amenity::try_from_value(&raw.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown amenity '{}'", raw)))?;

        if !amenities.contains(&amenity) {
            amenities.push(amenity);
        }
    }

    Ok(amenities)
}

/// Parses the amenity strings stored in the join table.
///
/// Unknown values are skipped with a warning rather than failing the read.
pub fn parse_stored_amenities(values: Vec<String>) -> Vec<Amenity> {
    values
        .into_iter()
        .filter_map(|value| match Amenity::try_from_value(&value) {
            Ok(amenity) => Some(amenity),
            Err(_) => {
                tracing::warn!("Ignoring unknown stored amenity '{}'", value);
                None
            }
        })
        .collect()
}
