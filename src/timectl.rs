/*
 * Talon, a bitboard chess move generator and alpha-beta search core
 * Copyright (C) 2026 Talon contributors
 *
 * Talon is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Talon is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Talon. If not, see <https://www.gnu.org/licenses/>.
 */

//! A cooperative search deadline, checked from inside the search rather than
//! enforced by interrupting it.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// A shared flag set by a detached timer thread once a deadline has passed.
///
/// Unlike a UCI engine polling a `stop` command on a channel, there is no
/// input to listen for here: the clock only ever counts down a fixed
/// [`Duration`] handed to it up front. `Ordering::Relaxed` is enough on both
/// sides because the flag only ever needs to be *eventually* observed, never
/// synchronised with any other memory access.
#[derive(Clone)]
pub struct TimeCtl {
    /// Set to `true` once the deadline has elapsed.
    expired: Arc<AtomicBool>,
}

impl TimeCtl {
    /// Starts a new deadline, spawning a detached thread that sleeps for
    /// `budget` and then raises the flag.
    ///
    /// `budget` of [`Duration::MAX`] never raises the flag; this is used for
    /// unbounded analysis.
    #[must_use]
    pub fn start(budget: Duration) -> Self {
        let expired = Arc::new(AtomicBool::new(false));

        if budget != Duration::MAX {
            let flag = Arc::clone(&expired);
            thread::spawn(move || {
                thread::sleep(budget);
                flag.store(true, Ordering::Relaxed);
            });
        }

        Self { expired }
    }

    /// Checks whether the deadline has elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired.load(Ordering::Relaxed)
    }

    /// Creates a [`TimeCtl`] that never expires, for testing and for callers
    /// that want to drive the search manually.
    #[must_use]
    pub fn never() -> Self {
        Self {
            expired: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_its_budget() {
        let clock = TimeCtl::start(Duration::from_millis(10));
        assert!(!clock.expired());
        thread::sleep(Duration::from_millis(60));
        assert!(clock.expired());
    }

    #[test]
    fn never_expiring_clock_stays_clear() {
        let clock = TimeCtl::never();
        thread::sleep(Duration::from_millis(20));
        assert!(!clock.expired());
    }
}
