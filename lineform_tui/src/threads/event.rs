use crate::component::SharedComponent;

use crossterm::event::Event;

use std::{
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use super::{thread_group::ThreadGroup, util::any_to_string, Thread, ThreadError, ThreadResult};

const POLL_TIMEOUT: Duration = Duration::from_millis(500);

type Listeners = Arc<RwLock<Vec<SharedComponent>>>;

/// Reads terminal events and hands each one to every registered component.
pub struct EventThread {
    handle: Option<JoinHandle<ThreadResult>>,
    stop_channel_tx: Sender<()>,
    listeners: Listeners,
}

impl EventThread {
    pub fn new(thread_group: &ThreadGroup) -> Self {
        let (stop_channel_tx, stop_channel_rx) = mpsc::channel::<()>();
        let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();
        let listeners = Arc::new(RwLock::new(vec![]));
        let listeners_clone = listeners.clone();

        let handle = thread::spawn(move || -> ThreadResult {
            let res = Self::poll_events(&stop_channel_rx, &listeners_clone);
            if let Err(e) = &res {
                tracing::error!("event polling stopped: {e}");
                let _ = terminate_group_channel_tx.send(());
            }
            res
        });

        EventThread {
            handle: Some(handle),
            stop_channel_tx,
            listeners,
        }
    }

    pub fn register_event_listener(&mut self, listener: SharedComponent) {
        self.listeners.write().unwrap().push(listener);
    }

    fn poll_events(stop_channel_rx: &Receiver<()>, listeners: &Listeners) -> ThreadResult {
        while stop_channel_rx.try_recv().is_err() {
            if crossterm::event::poll(POLL_TIMEOUT)? {
                let event = crossterm::event::read()?;
                Self::notify_event_listeners(listeners, &event);
            }
        }
        Ok(())
    }

    fn notify_event_listeners(listeners: &Listeners, event: &Event) {
        for listener in listeners.read().unwrap().iter() {
            listener.write().unwrap().handle_event(event);
        }
    }
}

impl Thread for EventThread {
    fn name(&self) -> &'static str {
        "event"
    }

    fn terminate(&mut self) -> ThreadResult {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        let _ = self.stop_channel_tx.send(());
        handle
            .join()
            .map_err(|e| ThreadError::Panic(any_to_string(&e)))?
    }
}
