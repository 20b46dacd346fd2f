use super::{Event, NetworkStatus, PagedList, UpdatableState};
use crate::app::models::RestaurantDescription;

pub type RestaurantPage = PagedList<RestaurantDescription>;

#[derive(Clone, Debug)]
pub enum RestaurantListAction {
    PageLoaded(RestaurantPage, NetworkStatus),
    LoadCompleted,
    LoadFailed(String),
    ShowMessage(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RestaurantListEvent {
    LoadingStarted,
    LoadingFinished,
    RestaurantsUpdated(usize),
    MessageShown(String),
}

// What the restaurant list screen shows
#[derive(Clone, Debug, Default)]
pub struct RestaurantListUiState {
    pub restaurants: Option<RestaurantPage>,
    pub is_loading: bool,
    pub message: Option<Event<String>>,
}

impl RestaurantListUiState {
    fn set_loading(&mut self, is_loading: bool) -> RestaurantListEvent {
        self.is_loading = is_loading;
        if is_loading {
            RestaurantListEvent::LoadingStarted
        } else {
            RestaurantListEvent::LoadingFinished
        }
    }

    fn show_message(&mut self, message: String) -> RestaurantListEvent {
        self.message = Some(Event::new(message.clone()));
        RestaurantListEvent::MessageShown(message)
    }
}

impl UpdatableState for RestaurantListUiState {
    type Action = RestaurantListAction;
    type Event = RestaurantListEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            RestaurantListAction::PageLoaded(page, status) => {
                let mut events = match status {
                    NetworkStatus::Running => vec![self.set_loading(true)],
                    NetworkStatus::Success => vec![self.set_loading(false)],
                    NetworkStatus::Failed(message) => vec![
                        self.set_loading(false),
                        self.show_message(message.unwrap_or_default()),
                    ],
                };
                events.push(RestaurantListEvent::RestaurantsUpdated(page.len()));
                self.restaurants = Some(page);
                events
            }
            RestaurantListAction::LoadCompleted => vec![self.set_loading(false)],
            RestaurantListAction::LoadFailed(message) => {
                vec![self.set_loading(false), self.show_message(message)]
            }
            RestaurantListAction::ShowMessage(message) => vec![self.show_message(message)],
        }
    }
}
