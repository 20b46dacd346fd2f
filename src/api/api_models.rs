use serde::Deserialize;

use crate::app::models::RestaurantDescription;

#[derive(Deserialize, Debug, Clone)]
pub struct RestaurantsPayload {
    pub restaurants: Vec<RestaurantEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RestaurantEntry {
    pub restaurant: Restaurant,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cuisines: String,
    pub location: Option<Location>,
    pub user_rating: Option<UserRating>,
    pub thumb: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Location {
    pub address: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserRating {
    pub aggregate_rating: String,
}

impl From<RestaurantEntry> for RestaurantDescription {
    fn from(entry: RestaurantEntry) -> Self {
        let Restaurant {
            id,
            name,
            cuisines,
            location,
            user_rating,
            thumb,
        } = entry.restaurant;

        Self {
            id,
            name,
            cuisines,
            address: location.map(|l| l.address).unwrap_or_default(),
            rating: user_rating.and_then(|r| r.aggregate_rating.trim().parse::<f32>().ok()),
            // the API sends an empty string rather than no thumbnail at all
            thumbnail: thumb.filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_entry_into_restaurant() {
        let payload: RestaurantsPayload = serde_json::from_str(
            r#"{"restaurants": [
                {"restaurant": {
                    "id": "16774318",
                    "name": "Otto Enoteca",
                    "cuisines": "Italian, Pizza",
                    "location": {"address": "1 5th Avenue, New York"},
                    "user_rating": {"aggregate_rating": "3.7"},
                    "thumb": ""
                }},
                {"restaurant": {"id": "2", "name": "Nameless"}}
            ]}"#,
        )
        .unwrap();

        let restaurants: Vec<RestaurantDescription> =
            payload.restaurants.into_iter().map(|e| e.into()).collect();

        assert_eq!(restaurants[0].name, "Otto Enoteca");
        assert_eq!(restaurants[0].address, "1 5th Avenue, New York");
        assert_eq!(restaurants[0].rating, Some(3.7));
        assert_eq!(restaurants[0].thumbnail, None);
        assert_eq!(restaurants[1].cuisines, "");
        assert_eq!(restaurants[1].rating, None);
    }

    #[test]
    fn test_unrated_restaurant() {
        let entry: RestaurantEntry = serde_json::from_str(
            r#"{"restaurant": {"id": "3", "name": "New", "user_rating": {"aggregate_rating": "Not rated"}}}"#,
        )
        .unwrap();

        let restaurant = RestaurantDescription::from(entry);
        assert_eq!(restaurant.rating, None);
    }
}
