pub mod labels;

mod restaurant_list;
pub use restaurant_list::*;
