use std::sync::{Arc, Mutex};

use hiscore_client::tui::ScoreTui;
use hiscore_core::tracker::ScoreTracker;

mod config;
mod crossterm_adapter;
mod tick;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tui_logger::init_logger(log::LevelFilter::Debug).unwrap();
    tui_logger::set_default_level(log::LevelFilter::Debug);

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        std::process::exit(1);
    }

    let config = config::load(args.get(1).map(String::as_str))?;
    let tracker = Arc::new(Mutex::new(ScoreTracker::new(config.tracker_config())));

    let ticker = tick::TickTask::start(tracker.clone());

    let app = ScoreTui::new(tracker);
    let adapter = crossterm_adapter::CrosstermAdapter::new(app);
    adapter.run();

    ticker.stop();
    Ok(())
}
