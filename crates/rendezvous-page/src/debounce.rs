//! Trailing-edge debounce over an injected clock.

use std::time::{Duration, Instant};

/// Coalesces a burst of events into one firing after a quiet period.
///
/// The host owns the actual timer; this type only decides. Each [`poke`]
/// pushes the deadline out; [`due`] reports readiness exactly once per burst.
///
/// [`poke`]: Debouncer::poke
/// [`due`]: Debouncer::due
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use rendezvous_page::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(100));
/// let start = Instant::now();
/// debouncer.poke(start);
/// assert!(!debouncer.due(start + Duration::from_millis(50)));
/// assert!(debouncer.due(start + Duration::from_millis(100)));
/// assert!(!debouncer.due(start + Duration::from_millis(200)));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
	quiet: Duration,
	deadline: Option<Instant>,
}

impl Debouncer {
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			deadline: None,
		}
	}

	/// Records activity, pushing the firing deadline out.
	pub fn poke(&mut self, now: Instant) {
		self.deadline = Some(now + self.quiet);
	}

	/// Whether the quiet period has elapsed. Consumes the pending firing.
	pub fn due(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}

	pub fn pending(&self) -> bool {
		self.deadline.is_some()
	}
}
