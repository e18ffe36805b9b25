use std::{
    process::ExitCode,
    sync::{mpsc, Arc, RwLock},
};

use clap::Parser;
use lineform_tui::{
    components,
    config::Config,
    error::LineformTuiResult,
    logging,
    threads::{
        animator::Timing, setup_terminate_group_panic_hook, AnimatorThread, EventThread,
        RendererThread, ThreadGroup, ThreadResult,
    },
    tui,
};

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    match run(&config) {
        Ok(results) => report(results),
        Err(e) => {
            let _ = tui::restore_terminal();
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> LineformTuiResult<Vec<(&'static str, ThreadResult)>> {
    let terminal = tui::init_terminal()?;
    let (renderer_channel_tx, renderer_channel_rx) = mpsc::channel();
    let mut thread_group = ThreadGroup::new();

    let timing = Timing {
        frame_interval: config.frame_interval(),
        loop_pause: config.loop_pause(),
    };
    let animator_thread = AnimatorThread::new(timing, renderer_channel_tx.clone(), &thread_group);

    let root = Arc::new(RwLock::new(components::Root::new(
        config,
        renderer_channel_tx.clone(),
        animator_thread.channel(),
    )));
    animator_thread.register_listener(root.clone());

    let mut event_thread = EventThread::new(&thread_group);
    event_thread.register_event_listener(root.clone());
    let renderer_thread = RendererThread::new(
        root.clone(),
        renderer_channel_tx,
        renderer_channel_rx,
        terminal,
        &thread_group,
    );

    root.write().unwrap().animate();

    thread_group.add_thread(Box::new(event_thread));
    thread_group.add_thread(Box::new(animator_thread));
    thread_group.add_thread(Box::new(renderer_thread));
    setup_terminate_group_panic_hook(&thread_group);
    let results = thread_group.join();

    tui::restore_terminal()?;
    Ok(results)
}

fn report(results: Vec<(&'static str, ThreadResult)>) -> ExitCode {
    let mut exit_code = ExitCode::SUCCESS;
    eprintln!("Thread termination status:");
    for (name, res) in results {
        match res {
            Ok(_) => eprintln!("> {name} thread terminated normally"),
            Err(e) => {
                eprintln!("> {name} thread terminated abnormally: {e}");
                exit_code = ExitCode::FAILURE;
            }
        }
    }
    exit_code
}
