//! Console countdown to the next poll.
//!
//! [`Countdown`] owns the ticking task. The engine calls [`Countdown::stop`]
//! before each poll and [`Countdown::restart`] with the next target after it.

use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// `"<m> minutes and <s> seconds"`, both truncated to whole units.
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = remaining.as_secs();
    format!("{} minutes and {} seconds", total_secs / 60, total_secs % 60)
}

/// Time left before `target`, or `None` once it has been reached.
pub fn remaining_until(target: Instant, now: Instant) -> Option<Duration> {
    let remaining = target.saturating_duration_since(now);
    (!remaining.is_zero()).then_some(remaining)
}

#[derive(Debug)]
pub struct Countdown {
    enabled: bool,
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            task: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Replaces any running countdown with one counting down to `target`.
    /// Must be called from within a tokio runtime.
    pub fn restart(&mut self, target: Instant) {
        self.stop();
        if !self.enabled {
            return;
        }

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let Some(remaining) = remaining_until(target, Instant::now()) else {
                    continue;
                };
                if let Err(e) = render(&mut io::stdout(), remaining) {
                    tracing::debug!("Countdown render failed: {}", e);
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}

fn render<W: Write>(out: &mut W, remaining: Duration) -> io::Result<()> {
    execute!(
        out,
        Clear(ClearType::CurrentLine),
        MoveToColumn(0),
        Print(format!("Next check in: {}", format_remaining(remaining)))
    )
}
