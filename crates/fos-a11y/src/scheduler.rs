//! Deferred tasks
//!
//! Focus is applied on a later turn of the host's event loop. The host owns
//! the loop, so the focus logic only hands tasks to a [`TaskScheduler`] and
//! the host runs them when it gets around to it.

use std::collections::VecDeque;
use std::fmt;

/// Work to run later against the host
pub type DeferredTask<H> = Box<dyn FnOnce(&mut H)>;

/// "Run this later" capability
pub trait TaskScheduler<H> {
    fn schedule(&mut self, task: DeferredTask<H>);
}

/// FIFO task queue, drained explicitly by the host
pub struct TaskQueue<H> {
    pending: VecDeque<DeferredTask<H>>,
}

impl<H> TaskQueue<H> {
    pub fn new() -> Self {
        Self { pending: VecDeque::new() }
    }

    /// Number of tasks waiting to run
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run the oldest task. Returns false if the queue was empty.
    pub fn run_next(&mut self, host: &mut H) -> bool {
        match self.pending.pop_front() {
            Some(task) => {
                task(host);
                true
            }
            None => false,
        }
    }

    /// Run every queued task in order, returning how many ran
    pub fn run_pending(&mut self, host: &mut H) -> usize {
        let mut ran = 0;
        while self.run_next(host) {
            ran += 1;
        }
        if ran > 0 {
            tracing::trace!("Ran {} deferred task(s)", ran);
        }
        ran
    }

    /// Drop queued tasks without running them
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<H> TaskScheduler<H> for TaskQueue<H> {
    fn schedule(&mut self, task: DeferredTask<H>) {
        self.pending.push_back(task);
    }
}

impl<H> Default for TaskQueue<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for TaskQueue<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_fifo_only_when_drained() {
        let mut queue: TaskQueue<Vec<u32>> = TaskQueue::new();
        queue.schedule(Box::new(|log: &mut Vec<u32>| log.push(1)));
        queue.schedule(Box::new(|log: &mut Vec<u32>| log.push(2)));
        queue.schedule(Box::new(|log: &mut Vec<u32>| log.push(3)));

        let mut log = Vec::new();
        assert_eq!(queue.len(), 3);
        assert!(log.is_empty());

        assert!(queue.run_next(&mut log));
        assert_eq!(log, vec![1]);
        assert_eq!(queue.run_pending(&mut log), 2);
        assert_eq!(log, vec![1, 2, 3]);
        assert!(queue.is_empty());
        assert!(!queue.run_next(&mut log));
    }

    #[test]
    fn test_clear_drops_tasks() {
        let mut queue: TaskQueue<u32> = TaskQueue::default();
        queue.schedule(Box::new(|n: &mut u32| *n += 1));
        queue.clear();

        let mut n = 0;
        assert_eq!(queue.run_pending(&mut n), 0);
        assert_eq!(n, 0);
    }
}
