//! Countdown renderer background task

use std::{fmt, sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    state::{time_remaining, RemainingDuration, Timer},
    utils::Clock,
};

/// Default recomputation cadence
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// What the countdown currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Frame {
    /// No timer configured
    #[default]
    Empty,
    Running { name: String, remaining: RemainingDuration },
    /// Terminal state once the target has passed
    Arrived { name: String },
}

impl Frame {
    /// Compute the frame for a timer at the clock's current instant
    pub fn compute(timer: Option<&Timer>, clock: &dyn Clock) -> Self {
        let Some(timer) = timer else {
            return Frame::Empty;
        };

        match time_remaining(Some(timer.target_date), clock) {
            Some(remaining) if !remaining.is_elapsed() => Frame::Running {
                name: timer.name.clone(),
                remaining,
            },
            _ => Frame::Arrived { name: timer.name.clone() },
        }
    }

    pub fn is_arrived(&self) -> bool {
        matches!(self, Frame::Arrived { .. })
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Empty => Ok(()),
            Frame::Running { name, remaining } => write!(
                f,
                "{}: {} Days {} Hours {} Minutes {} Seconds",
                name, remaining.days, remaining.hours, remaining.minutes, remaining.seconds
            ),
            Frame::Arrived { name } => write!(f, "🎉 {} has arrived!", name),
        }
    }
}

/// Drives the countdown for whatever timer is published to it
pub struct CountdownRenderer {
    clock: Arc<dyn Clock>,
    tick: Duration,
}

impl CountdownRenderer {
    pub fn new(clock: Arc<dyn Clock>, tick: Duration) -> Self {
        Self { clock, tick }
    }

    /// Start rendering the timers received on `timer_rx`
    ///
    /// The task lives until the returned handle is dropped or stopped, or the
    /// publishing side of `timer_rx` goes away.
    pub fn spawn(self, timer_rx: watch::Receiver<Option<Timer>>) -> CountdownHandle {
        let (frame_tx, frame_rx) = watch::channel(Frame::Empty);
        let task = tokio::spawn(countdown_task(self.clock, self.tick, timer_rx, frame_tx));

        CountdownHandle { task, frame_rx }
    }
}

/// Owner of a running countdown task; dropping it cancels the task
pub struct CountdownHandle {
    task: JoinHandle<()>,
    frame_rx: watch::Receiver<Frame>,
}

impl CountdownHandle {
    /// Receive every frame change from now on
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frame_rx.clone()
    }

    pub fn current(&self) -> Frame {
        self.frame_rx.borrow().clone()
    }

    /// Cancel the task and wait for it to wind down
    pub async fn stop(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
        debug!("Countdown task stopped");
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Recompute the frame every tick while a timer is present
async fn countdown_task(
    clock: Arc<dyn Clock>,
    tick: Duration,
    mut timer_rx: watch::Receiver<Option<Timer>>,
    frame_tx: watch::Sender<Frame>,
) {
    info!("Starting countdown task");

    'lifecycle: loop {
        let current = timer_rx.borrow_and_update().clone();

        let Some(timer) = current else {
            publish(&frame_tx, Frame::Empty);
            if timer_rx.changed().await.is_err() {
                break 'lifecycle;
            }
            continue;
        };

        info!("Counting down to '{}' at {}", timer.name, timer.target_date);

        // Dropped on every exit from the inner loop, which cancels the ticks
        let mut ticks = interval(tick);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    let frame = Frame::compute(Some(&timer), clock.as_ref());
                    let arrived = frame.is_arrived();
                    if publish(&frame_tx, frame) && arrived {
                        info!("Timer '{}' has arrived", timer.name);
                    }
                }

                changed = timer_rx.changed() => {
                    if changed.is_err() {
                        break 'lifecycle;
                    }
                    debug!("Timer changed, restarting countdown");
                    break;
                }
            }
        }
    }

    info!("Countdown task finished, timer source closed");
}

/// Publish a frame if it differs from the current one
fn publish(frame_tx: &watch::Sender<Frame>, frame: Frame) -> bool {
    frame_tx.send_if_modified(|current| {
        if *current == frame {
            return false;
        }
        debug!("Frame: {}", frame);
        *current = frame;
        true
    })
}
