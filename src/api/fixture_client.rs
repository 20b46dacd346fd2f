use futures::stream::{self, StreamExt};
use std::path::Path;
use std::sync::Arc;

use super::api_models::RestaurantsPayload;
use super::client::{PageUpdate, PageUpdates, PagedListUseCase, SourceError};
use crate::app::components::labels;
use crate::app::models::RestaurantDescription;
use crate::app::state::{NetworkStatus, PagedList, RestaurantPage};

const BUNDLED_RESTAURANTS: &str = include_str!("../../data/restaurants.json");

// Serves restaurants from a JSON document instead of the network, in batches
pub struct FixtureRestaurantsClient {
    restaurants: Vec<RestaurantDescription>,
    batch_size: usize,
}

impl FixtureRestaurantsClient {
    pub fn new(restaurants: Vec<RestaurantDescription>, batch_size: usize) -> Self {
        Self {
            restaurants,
            batch_size: batch_size.max(1),
        }
    }

    pub fn from_json(json: &str, batch_size: usize) -> Result<Self, SourceError> {
        let payload: RestaurantsPayload = serde_json::from_str(json)?;
        let restaurants = payload
            .restaurants
            .into_iter()
            .map(RestaurantDescription::from)
            .collect();
        Ok(Self::new(restaurants, batch_size))
    }

    pub fn from_file<P: AsRef<Path>>(path: P, batch_size: usize) -> Result<Self, SourceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, batch_size)
    }

    pub fn bundled(batch_size: usize) -> Result<Self, SourceError> {
        Self::from_json(BUNDLED_RESTAURANTS, batch_size)
    }

    fn empty_page(&self) -> RestaurantPage {
        PagedList::new(self.batch_size)
    }

    fn first_page(&self) -> RestaurantPage {
        let first_batch = self.restaurants.iter().take(self.batch_size).cloned().collect();
        self.empty_page().with_batch(first_batch)
    }

    pub fn get_paged_list(&self) -> Vec<PageUpdate> {
        if self.restaurants.is_empty() {
            return vec![(
                self.empty_page(),
                NetworkStatus::error(labels::NO_RESTAURANTS.as_str()),
            )];
        }

        let mut page = self.empty_page();
        let mut updates = vec![];
        for batch in self.restaurants.chunks(self.batch_size) {
            updates.push((page.clone(), NetworkStatus::Running));
            page = page.with_batch(batch.to_vec());
            updates.push((page.clone(), NetworkStatus::Success));
        }
        updates
    }

    pub fn refresh_paged_list(&self) -> Vec<PageUpdate> {
        if self.restaurants.is_empty() {
            return vec![(
                self.empty_page(),
                NetworkStatus::error(labels::NO_RESTAURANTS.as_str()),
            )];
        }

        let page = self.first_page();
        vec![(page.clone(), NetworkStatus::Running), (page, NetworkStatus::Success)]
    }
}

fn into_updates(updates: Vec<PageUpdate>) -> PageUpdates {
    stream::iter(updates.into_iter().map(Ok)).boxed()
}

pub struct GetPagedRestaurantsList(pub Arc<FixtureRestaurantsClient>);

impl PagedListUseCase for GetPagedRestaurantsList {
    fn call(&self) -> PageUpdates {
        debug!("loading restaurants by batches of {}", self.0.batch_size);
        into_updates(self.0.get_paged_list())
    }
}

pub struct RefreshPagedRestaurantsList(pub Arc<FixtureRestaurantsClient>);

impl PagedListUseCase for RefreshPagedRestaurantsList {
    fn call(&self) -> PageUpdates {
        debug!("refreshing restaurants");
        into_updates(self.0.refresh_paged_list())
    }
}
