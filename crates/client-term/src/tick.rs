use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{JoinHandle, sleep, spawn};
use std::time::{Duration, Instant};

use hiscore_client::clock::wall_ms;
use hiscore_core::tracker::ScoreTracker;
use log::debug;

/// How often the tracker's derived fields are refreshed.
const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Poll granularity of the worker loop, so stop() stays responsive.
const POLL_PERIOD: Duration = Duration::from_millis(50);

/// Repeating 1-second tick behind the rate-limit countdown and the status
/// auto-clear. Must be stopped on teardown; `stop` joins the worker.
pub struct TickTask {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickTask {
    pub fn start(tracker: Arc<Mutex<ScoreTracker>>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));

        let flag = stop.clone();
        let handle = spawn(move || {
            let mut last_tick = Instant::now();
            while !flag.load(Ordering::Relaxed) {
                if last_tick.elapsed() >= TICK_PERIOD {
                    last_tick = Instant::now();
                    tracker.lock().unwrap().tick(wall_ms());
                }
                sleep(POLL_PERIOD);
            }
            debug!("tick task stopped");
        });

        TickTask {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
