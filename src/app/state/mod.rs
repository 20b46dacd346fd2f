mod event;
mod network_state;
mod pagination;
mod restaurant_list_state;

pub use event::Event;
pub use network_state::NetworkStatus;
pub use pagination::PagedList;
pub use restaurant_list_state::*;

pub trait UpdatableState {
    type Action;
    type Event;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event>;
}
