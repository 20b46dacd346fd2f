pub mod components;
pub mod dispatch;
pub mod models;
pub mod state;

pub use components::{RestaurantList, RestaurantListModel};
pub use dispatch::Worker;
