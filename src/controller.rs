use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::observable::Observable;
use crate::publisher::Publisher;

/// The source of an on/off value stream.
///
/// A controller is either inactive or active with exactly one value.
/// `set` on an active controller always exits the old value before the new
/// one enters; there is no in-place update.
///
/// Calls made while the controller is already dispatching a transition
/// (for example from inside a scope factory it triggered) are queued and
/// applied, in order, once the running transition has finished.
pub struct Controller<T> {
	body: Rc<ControllerBody<T>>,
}

impl<T> Clone for Controller<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct ControllerBody<T> {
	name: &'static str,
	publisher: Rc<Publisher<T>>,
	inner: RefCell<ControllerInner<T>>,
}

struct ControllerInner<T> {
	closed: bool,
	dispatching: bool,
	pending: VecDeque<Action<T>>,
}

enum Action<T> {
	Set(T),
	Reset,
	Close,
}

impl<T> Default for Controller<T>
where
	T: Clone + 'static,
{
	fn default() -> Self {
		Controller::new()
	}
}

impl<T> Controller<T>
where
	T: Clone + 'static,
{
	#[must_use]
	pub fn new() -> Self {
		Self::with_name("<unnamed>")
	}

	#[must_use]
	pub fn with_name(name: &'static str) -> Self {
		Controller {
			body: Rc::new(ControllerBody {
				name,
				publisher: Publisher::new(),
				inner: RefCell::new(ControllerInner {
					closed: false,
					dispatching: false,
					pending: VecDeque::new(),
				}),
			}),
		}
	}

	pub fn name(&self) -> &'static str {
		self.body.name
	}

	/// Activates the controller with `value`.
	///
	/// # Panics
	///
	/// Panics if the controller has been closed.
	pub fn set(&self, value: T) {
		if let Err(err) = self.try_set(value) {
			panic!("{}", err);
		}
	}

	/// Deactivates the controller. Does nothing if it is not active.
	///
	/// # Panics
	///
	/// Panics if the controller has been closed.
	pub fn reset(&self) {
		if let Err(err) = self.try_reset() {
			panic!("{}", err);
		}
	}

	pub fn try_set(&self, value: T) -> Result<()> {
		self.body.dispatch(Action::Set(value))
	}

	pub fn try_reset(&self) -> Result<()> {
		self.body.dispatch(Action::Reset)
	}

	/// Deactivates the controller and drops all of its observers.
	/// Any later `set` or `reset` fails.
	pub fn close(&self) {
		self.body.close();
	}

	pub fn is_active(&self) -> bool {
		self.body.publisher.is_active()
	}

	pub fn is_closed(&self) -> bool {
		self.body.inner.borrow().closed
	}

	/// Returns a copy of the active value.
	pub fn value(&self) -> Option<T> {
		self.body.publisher.value()
	}
}

impl<T> ControllerBody<T>
where
	T: Clone + 'static,
{
	fn dispatch(&self, action: Action<T>) -> Result<()> {
		if self.inner.borrow().closed {
			return Err(Error::Closed { name: self.name });
		}

		self.run(action);
		Ok(())
	}

	fn close(&self) {
		let was_closed = std::mem::replace(&mut self.inner.borrow_mut().closed, true);
		if !was_closed {
			self.run(Action::Close);
		}
	}

	/// Queues `action` and, unless a transition is already running further
	/// up the stack, drains the queue.
	fn run(&self, action: Action<T>) {
		{
			let mut inner = self.inner.borrow_mut();
			inner.pending.push_back(action);
			if inner.dispatching {
				tracing::trace!(controller = self.name, "queued action");
				return;
			}
			inner.dispatching = true;
		}

		let _guard = Dispatching { body: self };

		loop {
			let next = self.inner.borrow_mut().pending.pop_front();
			let action = match next {
				Some(action) => action,
				None => break,
			};

			match action {
				Action::Set(value) => {
					tracing::trace!(controller = self.name, "set");
					self.publisher.activate(value);
				}
				Action::Reset => {
					if self.publisher.deactivate() {
						tracing::trace!(controller = self.name, "reset");
					}
				}
				Action::Close => {
					self.publisher.deactivate();
					self.publisher.clear();
					tracing::debug!(controller = self.name, "closed");
				}
			}
		}
	}
}

/// Ends a dispatch loop, even when a callback unwinds out of it. Actions
/// queued behind a panicking callback are discarded.
struct Dispatching<'a, T> {
	body: &'a ControllerBody<T>,
}

impl<T> Drop for Dispatching<'_, T> {
	fn drop(&mut self) {
		let discarded = {
			let mut inner = self.body.inner.borrow_mut();
			inner.dispatching = false;
			std::mem::take(&mut inner.pending)
		};

		if !discarded.is_empty() {
			tracing::warn!(
				controller = self.body.name,
				discarded = discarded.len(),
				"dispatch interrupted by a panic"
			);
		}
	}
}

impl<T> Observable<T> for Controller<T>
where
	T: Clone + 'static,
{
	fn publisher(&self) -> &Rc<Publisher<T>> {
		&self.body.publisher
	}
}

impl<T> Debug for Controller<T>
where
	T: Clone + Debug + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Controller")
			.field("name", &self.body.name)
			.field("value", &self.value())
			.field("observers", &self.body.publisher.observer_count())
			.field("closed", &self.is_closed())
			.finish()
	}
}
