mod listener;
mod playback;

use std::{
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
};

use super::{
    thread_group::ThreadGroup, util::any_to_string, RendererMessage, Thread, ThreadError,
    ThreadResult,
};

pub use listener::{Listener, Listeners};
pub use playback::{Playback, State, Timing};

#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    /// Replaces whatever is playing with a new playback of `frames` frames.
    Start { playback_id: u64, frames: usize },
    Stop,
    Terminate,
}

/// Owns the animation clock. Each frame change is reported to the registered
/// listeners, followed by a redraw request.
pub struct AnimatorThread {
    channel: Sender<Request>,
    listeners: Arc<RwLock<Listeners>>,
    handle: Option<JoinHandle<ThreadResult>>,
}

impl AnimatorThread {
    pub fn new(
        timing: Timing,
        renderer_channel: Sender<RendererMessage>,
        thread_group: &ThreadGroup,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let listeners = Arc::new(RwLock::new(Vec::new()));
        let cloned_listeners = listeners.clone();
        let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();
        let handle = thread::spawn(move || -> ThreadResult {
            Self::thread(timing, rx, cloned_listeners, renderer_channel);
            let _ = terminate_group_channel_tx.send(());
            Ok(())
        });
        Self {
            channel: tx,
            listeners,
            handle: Some(handle),
        }
    }

    pub fn channel(&self) -> Sender<Request> {
        self.channel.clone()
    }

    pub fn register_listener(&self, listener: Arc<RwLock<dyn Listener>>) {
        self.listeners.write().unwrap().push(listener);
    }

    fn thread(
        timing: Timing,
        rx: Receiver<Request>,
        listeners: Arc<RwLock<Listeners>>,
        renderer_channel: Sender<RendererMessage>,
    ) {
        let mut playback = Playback::default();
        let mut playback_id = 0;
        loop {
            let request = match playback.next_delay(&timing) {
                Some(delay) => match rx.recv_timeout(delay) {
                    Ok(request) => Some(request),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => Some(Request::Terminate),
                },
                None => Some(rx.recv().unwrap_or(Request::Terminate)),
            };
            let frame = match request {
                None => playback.advance(),
                Some(Request::Start {
                    playback_id: id,
                    frames,
                }) => {
                    tracing::debug!(playback_id = id, frames, "playback started");
                    playback_id = id;
                    Some(playback.start(frames))
                }
                Some(Request::Stop) => {
                    tracing::debug!(playback_id, "playback stopped");
                    playback.stop();
                    None
                }
                Some(Request::Terminate) => return,
            };
            if let Some(frame) = frame {
                Self::notify(&listeners, playback_id, frame);
                let _ = renderer_channel.send(RendererMessage::Render);
            }
        }
    }

    fn notify(listeners: &Arc<RwLock<Listeners>>, playback_id: u64, frame: usize) {
        for listener in listeners.read().unwrap().iter() {
            listener.write().unwrap().on_frame(playback_id, frame);
        }
    }
}

impl Thread for AnimatorThread {
    fn name(&self) -> &'static str {
        "animator"
    }

    fn terminate(&mut self) -> ThreadResult {
        if let Some(handle) = self.handle.take() {
            let _ = self.channel.send(Request::Terminate);
            match handle.join() {
                Err(e) => Err(ThreadError::Panic(any_to_string(&e))),
                Ok(res) => res,
            }
        } else {
            Ok(())
        }
    }
}
