use futures::stream::StreamExt;
use std::cell::RefCell;
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::{PageUpdates, PagedListUseCase};
use crate::app::components::labels;
use crate::app::dispatch::{DispatchLoop, Dispatcher, Subscription, Worker};
use crate::app::state::{RestaurantListAction, RestaurantListUiState, UpdatableState};

/// Holds the state of the restaurant list screen.
///
/// Updates coming from the list use cases are folded one at a time into a single
/// [`RestaurantListUiState`], and the whole state is published after each of them.
/// Dropping the model cancels every load it started.
pub struct RestaurantListModel {
    worker: Worker,
    get_paged_list: Arc<dyn PagedListUseCase>,
    refresh_paged_list: Arc<dyn PagedListUseCase>,
    dispatcher: Dispatcher<RestaurantListAction>,
    ui_state: watch::Receiver<RestaurantListUiState>,
    subscriptions: RefCell<Vec<Subscription>>,
    _dispatch_loop: Subscription,
}

impl RestaurantListModel {
    pub fn new(
        worker: Worker,
        get_paged_list: Arc<dyn PagedListUseCase>,
        refresh_paged_list: Arc<dyn PagedListUseCase>,
    ) -> Self {
        let dispatch_loop = DispatchLoop::new();
        let dispatcher = dispatch_loop.make_dispatcher();

        let mut state = RestaurantListUiState::default();
        let (publisher, ui_state) = watch::channel(state.clone());

        let dispatch_loop = worker.send_task(dispatch_loop.attach(move |action| {
            let events = state.update_with(action);
            debug!("restaurant list: {:?}", events);
            publisher.send_replace(state.clone());
        }));

        Self {
            worker,
            get_paged_list,
            refresh_paged_list,
            dispatcher,
            ui_state,
            subscriptions: RefCell::new(vec![]),
            _dispatch_loop: dispatch_loop,
        }
    }

    // The latest published state, and every subsequent one
    pub fn ui_state(&self) -> watch::Receiver<RestaurantListUiState> {
        self.ui_state.clone()
    }

    pub fn on_location_requested(&self, granted: bool) {
        if !granted {
            info!("location permission denied");
            self.show_message(labels::NO_LOCATION_PERMISSION.clone());
            return;
        }

        self.subscribe(self.get_paged_list.call());
    }

    pub fn on_refresh(&self) {
        self.subscribe(self.refresh_paged_list.call());
    }

    #[cfg(test)]
    pub fn show_no_permission_error(&self) {
        self.show_message(labels::NO_LOCATION_PERMISSION.clone());
    }

    fn show_message(&self, message: String) {
        self.dispatcher
            .dispatch(RestaurantListAction::ShowMessage(message));
    }

    fn subscribe(&self, mut updates: PageUpdates) {
        let dispatcher = self.dispatcher.clone();

        let subscription = self.worker.send_task(async move {
            while let Some(update) = updates.next().await {
                let action = match update {
                    Ok((page, status)) => RestaurantListAction::PageLoaded(page, status),
                    Err(err) => {
                        warn!("restaurant list failed: {}", err);
                        dispatcher.dispatch(RestaurantListAction::LoadFailed(err.to_string()));
                        return;
                    }
                };
                if dispatcher.dispatch(action).is_none() {
                    return;
                }
            }
            dispatcher.dispatch(RestaurantListAction::LoadCompleted);
        });

        let mut subscriptions = self.subscriptions.borrow_mut();
        subscriptions.retain(|s| !s.is_finished());
        subscriptions.push(subscription);
    }
}

impl Drop for RestaurantListModel {
    fn drop(&mut self) {
        let subscriptions = self.subscriptions.get_mut();
        debug!("cancelling {} restaurant list subscription(s)", subscriptions.len());
        subscriptions.clear();
    }
}
