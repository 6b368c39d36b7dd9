//! Auto-stop countdown.
//!
//! The timer only tracks a wall-clock deadline; the session polls it on every
//! tick and performs the stop itself when [`TimerPoll::Expired`] comes back.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Unarmed,
    Armed {
        deadline: Instant,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPoll {
    Idle,
    Running(Duration),
    /// Reported exactly once per armed deadline; the timer is unarmed again.
    Expired,
}

#[derive(Clone, Debug, Default)]
pub struct SleepTimer {
    state: TimerState,
}

impl SleepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Armed { deadline } => Some(deadline),
            TimerState::Unarmed => None,
        }
    }

    /// Arm for `minutes` from `now`, replacing any previous deadline.
    /// Zero minutes disarms.
    pub fn arm(&mut self, minutes: u32, now: Instant) {
        if minutes == 0 {
            self.cancel();
            return;
        }
        let deadline = now + Duration::from_secs(u64::from(minutes) * 60);
        log::info!("[timer] armed for {} min", minutes);
        self.state = TimerState::Armed { deadline };
    }

    /// Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        if was_armed {
            log::info!("[timer] cancelled");
        }
        self.state = TimerState::Unarmed;
        was_armed
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|deadline| {
            if now >= deadline {
                Duration::ZERO
            } else {
                deadline - now
            }
        })
    }

    pub fn poll(&mut self, now: Instant) -> TimerPoll {
        match self.state {
            TimerState::Unarmed => TimerPoll::Idle,
            TimerState::Armed { deadline } if now >= deadline => {
                self.state = TimerState::Unarmed;
                TimerPoll::Expired
            }
            TimerState::Armed { deadline } => TimerPoll::Running(deadline - now),
        }
    }
}

/// `MM:SS`, or `H:MM:SS` from one hour up. Partial seconds round up so the
/// display never shows `00:00` while time remains.
pub fn format_remaining(remaining: Duration) -> String {
    let total = (remaining.as_millis() + 999) / 1000;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
