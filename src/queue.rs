//! A fixed-size OS-thread worker pool with a strict FIFO task queue.
//!
//! Grounded in spirit on `pleco_engine/src/threadpool/mod.rs` (spawned
//! worker threads signaled via a condition variable) and directly on
//! `original_source/src/magic_attacks.h`'s `ParMagicComputer`, which takes
//! a `shared_ptr<par::WorkQ>` and throws if it is null — this queue's
//! `QueueError::NullQueue` mirrors that contract. Unlike the teacher's
//! threadpool (raw pointers, `static mut`, tied to search-specific
//! `Searcher`/`Limits` types), this is a small generic primitive with no
//! unsafe code and, deliberately, no work stealing: every worker pulls
//! from the same shared deque, in submission order.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use crate::error::QueueError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Queue state guarded by a single mutex, so that setting `shutdown` and
/// notifying the condvar is atomic with respect to a worker's wait — the
/// predicate a condvar guards must be mutated under that condvar's own
/// lock, or a worker can observe `shutdown == false`, get preempted before
/// `wait()`, and park past the `notify_all` forever.
struct QueueState {
    jobs: VecDeque<Job>,
    shutdown: bool,
}

struct Shared {
    state: Mutex<QueueState>,
    condvar: Condvar,
}

/// A fixed pool of worker threads draining a single shared FIFO queue.
pub struct WorkQueue {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkQueue {
    /// Spawns `workers` threads, each blocking on the shared queue's
    /// condition variable when idle. Returns `QueueError::NullQueue` if
    /// asked for zero workers.
    pub fn new(workers: usize) -> Result<WorkQueue, QueueError> {
        if workers == 0 {
            return Err(QueueError::NullQueue);
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            condvar: Condvar::new(),
        });

        let handles = (0..workers)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || Self::worker_loop(shared))
            })
            .collect();

        Ok(WorkQueue {
            shared,
            workers: handles,
        })
    }

    /// A pool sized to the hardware concurrency hint, matching the
    /// teacher's `with_all_threads()` engine-pool factory.
    pub fn with_all_threads() -> Result<WorkQueue, QueueError> {
        Self::new(num_cpus::get())
    }

    fn worker_loop(shared: Arc<Shared>) {
        loop {
            let job = {
                let mut state = shared.state.lock().unwrap();
                loop {
                    if let Some(job) = state.jobs.pop_front() {
                        break Some(job);
                    }
                    if state.shutdown {
                        return;
                    }
                    state = shared.condvar.wait(state).unwrap();
                }
            };
            if let Some(job) = job {
                job();
            }
        }
    }

    /// Enqueues a zero-argument closure, returning a handle that can be
    /// waited on for the result.
    pub fn submit<T, F>(&self, f: F) -> JobHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let slot: Arc<(Mutex<Option<T>>, Condvar)> = Arc::new((Mutex::new(None), Condvar::new()));
        let slot_for_job = Arc::clone(&slot);

        let job: Job = Box::new(move || {
            let result = f();
            let (lock, cvar) = &*slot_for_job;
            *lock.lock().unwrap() = Some(result);
            cvar.notify_all();
        });

        {
            let mut state = self.shared.state.lock().unwrap();
            state.jobs.push_back(job);
        }
        self.shared.condvar.notify_one();

        JobHandle { slot }
    }

    /// Submits `fn(0), fn(1), ..., fn(n-1)` as independent tasks and
    /// returns their handles in index order. Execution order across
    /// workers is unspecified; only the submission order (and hence the
    /// returned handle order) is FIFO.
    pub fn for_range<T, F>(&self, n: usize, f: F) -> Vec<JobHandle<T>>
    where
        T: Send + 'static,
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        (0..n)
            .map(|i| {
                let f = Arc::clone(&f);
                self.submit(move || f(i))
            })
            .collect()
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.shutdown = true;
        }
        self.shared.condvar.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

/// A single-use handle over a pending computation's result.
pub struct JobHandle<T> {
    slot: Arc<(Mutex<Option<T>>, Condvar)>,
}

impl<T> JobHandle<T> {
    /// Blocks until the task has completed, without consuming the result.
    pub fn wait(&self) {
        let (lock, cvar) = &*self.slot;
        let guard = lock.lock().unwrap();
        let _ = cvar.wait_while(guard, |r| r.is_none()).unwrap();
    }

    /// Blocks until complete, then moves the result out.
    pub fn get(self) -> T {
        let (lock, cvar) = &*self.slot;
        let mut guard = lock.lock().unwrap();
        while guard.is_none() {
            guard = cvar.wait(guard).unwrap();
        }
        guard.take().expect("result present after wait")
    }
}
