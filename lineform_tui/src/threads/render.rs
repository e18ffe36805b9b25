use crate::component::SharedComponent;
use crate::tui::CrosstermTerminal;

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::thread_group::ThreadGroup;
use super::util::any_to_string;
use super::{Thread, ThreadError, ThreadResult};

#[derive(PartialEq, Debug)]
pub enum Message {
    Quit,
    Render,
}

/// Owns the terminal and redraws the root component on request.
pub struct RendererThread {
    handle: Option<JoinHandle<ThreadResult>>,
    message_channel_tx: Sender<Message>,
}

impl RendererThread {
    pub fn new(
        root_component: SharedComponent,
        message_channel_tx: Sender<Message>,
        message_channel_rx: Receiver<Message>,
        terminal: CrosstermTerminal,
        thread_group: &ThreadGroup,
    ) -> Self {
        let terminate_group_channel_tx = thread_group.get_terminate_group_channel_tx();

        let handle = thread::spawn(move || -> ThreadResult {
            let res = render_loop(&root_component, &message_channel_rx, terminal);
            if let Err(e) = &res {
                tracing::error!("rendering stopped: {e}");
            }
            let _ = terminate_group_channel_tx.send(());
            res
        });

        Self {
            handle: Some(handle),
            message_channel_tx,
        }
    }
}

fn render_loop(
    root_component: &SharedComponent,
    message_channel_rx: &Receiver<Message>,
    mut terminal: CrosstermTerminal,
) -> ThreadResult {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            root_component.write().unwrap().render(frame, area);
        })?;
        if next_message(message_channel_rx) == Message::Quit {
            return Ok(());
        }
    }
}

/// Blocks for the next message. Pending redraw requests collapse into one,
/// and a disconnected channel reads as `Quit`.
fn next_message(message_channel_rx: &Receiver<Message>) -> Message {
    let mut message = message_channel_rx.recv().unwrap_or(Message::Quit);
    while message == Message::Render {
        match message_channel_rx.try_recv() {
            Ok(next) => message = next,
            Err(_) => break,
        }
    }
    message
}

impl Thread for RendererThread {
    fn name(&self) -> &'static str {
        "renderer"
    }

    fn terminate(&mut self) -> ThreadResult {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        let _ = self.message_channel_tx.send(Message::Quit);
        handle
            .join()
            .map_err(|e| ThreadError::Panic(any_to_string(&e)))?
    }
}
