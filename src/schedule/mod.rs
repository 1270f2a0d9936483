//! Timer system.
//!
//! The game never sleeps or spawns threads. All delays (the announcement
//! ticker and the enemy reactions) are tasks on a [`Scheduler`] that runs
//! on virtual time. The front end feeds real elapsed time in; tests feed
//! exact durations.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_bingo::schedule::Scheduler;
//!
//! let mut timers = Scheduler::new();
//! let tick = timers.schedule_repeating(Duration::from_secs(5), "announce");
//! timers.schedule(Duration::from_millis(700), "react");
//!
//! let first = timers.pop_due(Duration::from_secs(6)).unwrap();
//! assert_eq!(first.action, "react");
//! let second = timers.pop_due(Duration::from_secs(6)).unwrap();
//! assert_eq!(second.handle, tick);
//! assert!(timers.pop_due(Duration::from_secs(6)).is_none());
//! ```

mod scheduler;

pub use scheduler::{Fired, Scheduler, TaskHandle};
