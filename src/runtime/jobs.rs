//! Cooperative job queue: at most one job per tick.
//!
//! Jobs receive the shared context and the queue itself, so a long task can
//! do one slice of work and push its continuation, yielding between slices.
//! The queue's ticker runs only while jobs are queued.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use super::ticker::Ticker;

/// A unit of work run against context `C`
pub type Job<C> = Box<dyn FnOnce(&mut C, &mut JobQueue<C>)>;

pub struct JobQueue<C> {
    jobs: VecDeque<Job<C>>,
    ticker: Ticker,
}

impl<C> JobQueue<C> {
    pub fn new(interval: Duration) -> Self {
        Self {
            jobs: VecDeque::new(),
            ticker: Ticker::new(interval),
        }
    }

    /// Queue a job and make sure the ticker is running
    pub fn push<F>(&mut self, job: F)
    where
        F: FnOnce(&mut C, &mut JobQueue<C>) + 'static,
    {
        self.jobs.push_back(Box::new(job));
        self.ticker.start();
    }

    /// Run the oldest job. Returns false if the queue was empty.
    pub fn tick(&mut self, ctx: &mut C) -> bool {
        let Some(job) = self.jobs.pop_front() else {
            self.ticker.stop();
            return false;
        };

        job(ctx, self);

        if self.jobs.is_empty() {
            self.ticker.stop();
        }
        true
    }

    /// Run one job if the ticker is due at `now`
    pub fn poll(&mut self, ctx: &mut C, now: Instant) -> bool {
        self.ticker.poll(now) && self.tick(ctx)
    }

    /// Run jobs until none are left. Returns how many ran.
    pub fn run_until_idle(&mut self, ctx: &mut C) -> usize {
        let mut ran = 0;
        while self.tick(ctx) {
            ran += 1;
        }
        ran
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

impl<C> fmt::Debug for JobQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobQueue")
            .field("jobs", &self.jobs.len())
            .field("ticker", &self.ticker)
            .finish()
    }
}
