//! Debounced value delivery.

use std::marker::PhantomData;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays delivery of a rapidly changing value until a quiet period elapses.
///
/// Each [`schedule`](DebounceScheduler::schedule) supersedes the previous
/// pending timer, so only the last value scheduled within a quiet window is
/// delivered, exactly once, roughly `delay` after the last call. A scheduler
/// owns at most one pending timer; dropping it cancels the timer without
/// firing.
///
/// Scheduling spawns a tokio task and therefore must happen within a tokio
/// runtime.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use loadgrid_tables::DebounceScheduler;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fired = Arc::new(AtomicUsize::new(0));
/// let mut scheduler = DebounceScheduler::new();
///
/// for text in ["a", "av", "avail"] {
///     let fired = Arc::clone(&fired);
///     scheduler.schedule(text, Duration::from_millis(20), move |_| {
///         fired.fetch_add(1, Ordering::SeqCst);
///     });
/// }
///
/// tokio::time::sleep(Duration::from_millis(80)).await;
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// # }
/// ```
pub struct DebounceScheduler<V> {
	pending: Option<JoinHandle<()>>,
	_value: PhantomData<fn(V)>,
}

impl<V> DebounceScheduler<V> {
	/// Creates a scheduler with no pending timer.
	pub fn new() -> Self {
		Self {
			pending: None,
			_value: PhantomData,
		}
	}

	/// Discards the pending timer, if any, without firing it.
	pub fn cancel(&mut self) {
		if let Some(handle) = self.pending.take() {
			handle.abort();
		}
	}

	/// True while a scheduled delivery has neither fired nor been cancelled.
	pub fn is_pending(&self) -> bool {
		self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
	}
}

impl<V: Send + 'static> DebounceScheduler<V> {
	/// Schedules `value` for delivery to `on_fire` after `delay`.
	///
	/// Cancels any previously pending timer first: values scheduled inside
	/// the quiet window are superseded, never queued.
	pub fn schedule<F>(&mut self, value: V, delay: Duration, on_fire: F)
	where
		F: FnOnce(V) + Send + 'static,
	{
		self.cancel();
		self.pending = Some(tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			tracing::trace!(delay_ms = delay.as_millis() as u64, "debounce window elapsed");
			on_fire(value);
		}));
	}
}

impl<V> Default for DebounceScheduler<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> Drop for DebounceScheduler<V> {
	fn drop(&mut self) {
		self.cancel();
	}
}
