mod restaurant_list;
mod restaurant_list_model;

pub use restaurant_list::RestaurantList;
pub use restaurant_list_model::RestaurantListModel;
