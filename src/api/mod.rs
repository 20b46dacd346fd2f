mod api_models;
mod client;
mod fixture_client;

pub use client::{PageUpdate, PageUpdates, PagedListUseCase, SourceError};
pub use fixture_client::{
    FixtureRestaurantsClient, GetPagedRestaurantsList, RefreshPagedRestaurantsList,
};
