use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Content that must be acted upon once, even if the state holding it is delivered again.
// Clones share the handled flag.
#[derive(Clone, Debug)]
pub struct Event<T> {
    content: T,
    handled: Arc<AtomicBool>,
}

impl<T> Event<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            handled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn get_content_if_not_handled(&self) -> Option<&T> {
        if self.handled.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(&self.content)
        }
    }

    pub fn peek_content(&self) -> &T {
        &self.content
    }

    pub fn has_been_handled(&self) -> bool {
        self.handled.load(Ordering::Acquire)
    }
}

impl<T> PartialEq for Event<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_handled_once() {
        let event = Event::new("boom".to_string());

        assert!(!event.has_been_handled());
        assert_eq!(event.get_content_if_not_handled().map(|s| &s[..]), Some("boom"));
        assert_eq!(event.get_content_if_not_handled(), None);
        assert!(event.has_been_handled());
    }

    #[test]
    fn test_clones_share_flag() {
        let event = Event::new(1);
        let redelivered = event.clone();

        assert_eq!(redelivered.get_content_if_not_handled(), Some(&1));
        assert_eq!(event.get_content_if_not_handled(), None);
        assert_eq!(*event.peek_content(), 1);
    }
}
