use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::future::{self, Future};
use futures::stream::StreamExt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct Dispatcher<Action> {
    sender: UnboundedSender<Action>,
}

impl<Action> Dispatcher<Action> {
    fn new(sender: UnboundedSender<Action>) -> Self {
        Self { sender }
    }

    // Fails only once the loop is gone, i.e. the screen has been torn down
    pub fn dispatch(&self, action: Action) -> Option<()> {
        self.sender.unbounded_send(action).ok()
    }
}

// Actions from every dispatcher end up here, one after the other
pub struct DispatchLoop<Action> {
    receiver: UnboundedReceiver<Action>,
    sender: UnboundedSender<Action>,
}

impl<Action> DispatchLoop<Action> {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<Action>();
        Self { receiver, sender }
    }

    pub fn make_dispatcher(&self) -> Dispatcher<Action> {
        Dispatcher::new(self.sender.clone())
    }

    pub async fn attach(self, mut handler: impl FnMut(Action)) {
        let Self { receiver, sender } = self;
        // the loop must not keep itself alive
        drop(sender);
        receiver
            .for_each(|action| {
                handler(action);
                future::ready(())
            })
            .await;
    }
}

// A running task; dropping it cancels the task
pub struct Subscription(JoinHandle<()>);

impl Subscription {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Clone)]
pub struct Worker(Handle);

impl Worker {
    pub fn new(handle: Handle) -> Self {
        Self(handle)
    }

    pub fn send_task<T>(&self, task: T) -> Subscription
    where
        T: Future<Output = ()> + Send + 'static,
    {
        Subscription(self.0.spawn(task))
    }
}
