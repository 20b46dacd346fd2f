// Lifecycle of one fetch or refresh
#[derive(Clone, Debug, PartialEq)]
pub enum NetworkStatus {
    Running,
    Success,
    Failed(Option<String>),
}

impl NetworkStatus {
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::Failed(Some(message.into()))
    }
}
