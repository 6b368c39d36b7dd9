//! Cooperative, time-driven tasks.
//!
//! Recurring work (droplet/chirp/rustle schedulers and the lullaby stepper)
//! lives here as plain data rather than callback chains. The engine polls
//! [`TaskQueue::take_due`] from the session tick, checks the owning category
//! is still registered, runs the task and hands it back with a new due time.

use crate::category::SoundCategory;
use crate::constants::{CHIRP_INTERVAL_SEC, DROPLET_INTERVAL_SEC, RUSTLE_INTERVAL_SEC};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

#[derive(Clone, Debug)]
pub enum TaskKind<N> {
    /// Rain droplet scheduler.
    Droplets,
    /// Forest bird-chirp scheduler.
    Chirps,
    /// Forest leaf-rustle scheduler.
    Rustles,
    /// Lullaby stepper driving a persistent oscillator/gain pair.
    Melody {
        osc: N,
        amp: N,
        step: usize,
        next_start: f64,
    },
}

impl<N> TaskKind<N> {
    /// Fixed period of a recurring scheduler; `None` for self-timed tasks.
    pub fn interval(&self) -> Option<f64> {
        match self {
            TaskKind::Droplets => Some(DROPLET_INTERVAL_SEC),
            TaskKind::Chirps => Some(CHIRP_INTERVAL_SEC),
            TaskKind::Rustles => Some(RUSTLE_INTERVAL_SEC),
            TaskKind::Melody { .. } => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Task<N> {
    pub id: TaskId,
    pub owner: SoundCategory,
    pub due: f64,
    pub kind: TaskKind<N>,
}

#[derive(Debug)]
pub struct TaskQueue<N> {
    tasks: Vec<Task<N>>,
    next_id: u32,
}

impl<N> Default for TaskQueue<N> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<N> TaskQueue<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, owner: SoundCategory, due: f64, kind: TaskKind<N>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push(Task {
            id,
            owner,
            due,
            kind,
        });
        id
    }

    /// Remove a task. Returns false if it already finished or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn owned_by(&self, owner: SoundCategory) -> usize {
        self.tasks.iter().filter(|t| t.owner == owner).count()
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<Task<N>> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due
    }

    pub fn requeue(&mut self, task: Task<N>) {
        self.tasks.push(task);
    }
}
