use crate::app::components::labels;
use crate::app::state::RestaurantListUiState;

// Renders the restaurant list screen as lines of text
pub struct RestaurantList {
    max_rows: usize,
}

impl RestaurantList {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn render(&self, state: &RestaurantListUiState) -> Vec<String> {
        let mut lines = vec![];

        if state.is_loading {
            lines.push(labels::LOADING.clone());
        }

        if let Some(restaurants) = state.restaurants.as_ref() {
            lines.push(labels::n_restaurants_label(restaurants.len()));
            lines.extend(
                restaurants
                    .iter()
                    .take(self.max_rows)
                    .enumerate()
                    .map(|(i, restaurant)| format!("{:>3}. {}", i + 1, restaurant)),
            );
            if restaurants.len() > self.max_rows {
                lines.push(format!("     … +{}", restaurants.len() - self.max_rows));
            }
        }

        if let Some(message) = state
            .message
            .as_ref()
            .and_then(|m| m.get_content_if_not_handled())
        {
            lines.push(format!("! {}", message));
        }

        lines
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::app::models::RestaurantDescription;
    use crate::app::state::{Event, PagedList};

    fn state_with(names: &[&str]) -> RestaurantListUiState {
        let restaurants = names
            .iter()
            .map(|name| RestaurantDescription::new(name, name))
            .collect();
        RestaurantListUiState {
            restaurants: Some(PagedList::new(10).with_batch(restaurants)),
            is_loading: false,
            message: None,
        }
    }

    #[test]
    fn test_render_restaurants() {
        let view = RestaurantList::new(2);

        let lines = view.render(&state_with(&["a", "b", "c"]));

        assert_eq!(
            lines,
            vec![
                "3 restaurants".to_string(),
                "  1. a (-)".to_string(),
                "  2. b (-)".to_string(),
                "     … +1".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_loading() {
        let view = RestaurantList::new(10);
        let state = RestaurantListUiState {
            is_loading: true,
            ..RestaurantListUiState::default()
        };

        assert_eq!(view.render(&state), vec!["Loading…".to_string()]);
    }

    #[test]
    fn test_message_shown_once() {
        let view = RestaurantList::new(10);
        let state = RestaurantListUiState {
            message: Some(Event::new("No location permission".to_string())),
            ..RestaurantListUiState::default()
        };

        assert_eq!(
            view.render(&state),
            vec!["! No location permission".to_string()]
        );
        // e.g. the screen being drawn again with the same state
        assert!(view.render(&state.clone()).is_empty());
    }
}
