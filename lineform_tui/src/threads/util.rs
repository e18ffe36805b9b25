use std::{
    any::Any,
    panic::{self, PanicHookInfo},
    thread,
};

use super::ThreadGroup;

/// Makes a panic on any thread bring the whole group down, so the terminal
/// gets restored instead of hanging on the surviving threads.
pub fn setup_terminate_group_panic_hook(thread_group: &ThreadGroup) {
    let original_hook = panic::take_hook();
    let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();
    let panic_handler = move |hook_info: &PanicHookInfo| {
        let current = thread::current();
        let name = current.name().unwrap_or("unnamed");
        tracing::warn!(thread = name, "terminating thread group after panic");
        let _ = terminate_group_channel_tx.send(());
        original_hook(hook_info);
    };
    panic::set_hook(Box::new(panic_handler));
}

pub fn any_to_string(any: &Box<dyn Any + Send>) -> String {
    if let Some(message) = any.downcast_ref::<&'static str>() {
        message.to_string()
    } else if let Some(message) = any.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod test {
    use std::any::Any;

    use super::any_to_string;

    #[test]
    fn test_any_to_string() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(any_to_string(&payload), "static message");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(any_to_string(&payload), "owned message");
        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(any_to_string(&payload), "unknown panic payload");
    }
}
