use std::sync::{
    self,
    mpsc::{Receiver, Sender},
};

use super::{Thread, ThreadResult};

/// Threads that live and die together: when any of them signals the group,
/// [`ThreadGroup::join`] terminates all of them.
pub struct ThreadGroup {
    terminate_channel_rx: Receiver<()>,
    terminate_channel_tx: Sender<()>,
    threads: Vec<Box<dyn Thread>>,
}

impl ThreadGroup {
    pub fn new() -> Self {
        let (terminate_channel_tx, terminate_channel_rx) = sync::mpsc::channel();
        Self {
            terminate_channel_rx,
            terminate_channel_tx,
            threads: vec![],
        }
    }

    pub fn add_thread(&mut self, thread: Box<dyn Thread>) {
        self.threads.push(thread);
    }

    pub fn get_terminate_group_channel_tx(&self) -> Sender<()> {
        self.terminate_channel_tx.clone()
    }

    /// Blocks until the group is signalled, then terminates every thread in
    /// the order they were added.
    pub fn join(self) -> Vec<(&'static str, ThreadResult)> {
        let mut results = vec![];
        let _ = self.terminate_channel_rx.recv();
        tracing::info!("terminating thread group");
        for mut thread in self.threads {
            let res = thread.terminate();
            match &res {
                Ok(_) => tracing::info!(thread = thread.name(), "thread terminated"),
                Err(e) => tracing::error!(thread = thread.name(), "thread failed: {e}"),
            }
            results.push((thread.name(), res));
        }
        results
    }
}

impl Default for ThreadGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use super::ThreadGroup;
    use crate::threads::{Thread, ThreadError, ThreadResult};

    struct FakeThread {
        name: &'static str,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Thread for FakeThread {
        fn name(&self) -> &'static str {
            self.name
        }

        fn terminate(&mut self) -> ThreadResult {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                Err(ThreadError::Panic("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_join_terminates_all_threads_in_order() {
        let log = Arc::new(Mutex::new(vec![]));
        let mut thread_group = ThreadGroup::new();
        for (name, fail) in [("a", false), ("b", true), ("c", false)] {
            thread_group.add_thread(Box::new(FakeThread {
                name,
                fail,
                log: log.clone(),
            }));
        }
        thread_group.get_terminate_group_channel_tx().send(()).unwrap();

        let results = thread_group.join();

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
        let names: Vec<&str> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(results[0].1.is_ok());
        assert_eq!(
            results[1].1.as_ref().unwrap_err().to_string(),
            "panicked: boom"
        );
    }
}
