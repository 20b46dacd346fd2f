use futures::stream::BoxStream;
use thiserror::Error;

use crate::app::state::{NetworkStatus, RestaurantPage};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Restaurants unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
}

pub type PageUpdate = (RestaurantPage, NetworkStatus);

pub type PageUpdates = BoxStream<'static, Result<PageUpdate, SourceError>>;

// Starts loading the restaurant list; every call yields a fresh stream of updates
pub trait PagedListUseCase: Send + Sync {
    fn call(&self) -> PageUpdates;
}

impl<F> PagedListUseCase for F
where
    F: Fn() -> PageUpdates + Send + Sync,
{
    fn call(&self) -> PageUpdates {
        self()
    }
}
