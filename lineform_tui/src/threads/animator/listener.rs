use std::sync::{Arc, RwLock};

pub type Listeners = Vec<Arc<RwLock<dyn Listener>>>;

pub trait Listener: Send + Sync {
    /// Called on the animator thread whenever playback `playback_id` moves to
    /// `frame`.
    fn on_frame(&mut self, playback_id: u64, frame: usize);
}
