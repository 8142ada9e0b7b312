use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::addr::RcAddr;

/// Receives activation transitions from a [`Publisher`].
pub(crate) trait Observer<T> {
	fn enter(&self, value: &T);
	fn exit(&self);
}

type Observers<T> = SmallVec<[RcAddr<dyn Observer<T>>; 4]>;

/// The active value of a node in the state graph together with everyone
/// watching it.
///
/// Observers enter in subscription order and exit in reverse subscription
/// order. Callbacks always run against a snapshot of the observer list,
/// so they are free to subscribe or unsubscribe while being notified.
///
/// Every transition bumps a generation counter. A fan-out stops as soon as
/// a callback has started another transition, so observers later in the
/// snapshot never see a value that is no longer current.
#[doc(hidden)]
pub struct Publisher<T> {
	inner: RefCell<PublisherInner<T>>,
}

struct PublisherInner<T> {
	value: Option<T>,
	generation: u64,
	observers: Observers<T>,
}

impl<T> Publisher<T>
where
	T: Clone + 'static,
{
	pub(crate) fn new() -> Rc<Self> {
		Rc::new(Publisher {
			inner: RefCell::new(PublisherInner {
				value: None,
				generation: 0,
				observers: SmallVec::new(),
			}),
		})
	}

	pub(crate) fn value(&self) -> Option<T> {
		self.inner.borrow().value.clone()
	}

	pub(crate) fn is_active(&self) -> bool {
		self.inner.borrow().value.is_some()
	}

	/// Deactivates the current value, if any, and enters `value`.
	pub(crate) fn activate(&self, value: T) {
		self.deactivate();

		let (generation, observers) = {
			let mut inner = self.inner.borrow_mut();
			inner.value = Some(value.clone());
			inner.generation += 1;
			(inner.generation, inner.observers.clone())
		};

		for observer in &observers {
			if !self.is_current(generation) {
				break;
			}
			observer.enter(&value);
		}
	}

	/// Returns `false` if there was nothing to deactivate.
	pub(crate) fn deactivate(&self) -> bool {
		let (generation, observers) = {
			let mut inner = self.inner.borrow_mut();
			if inner.value.take().is_none() {
				return false;
			}
			inner.generation += 1;
			(inner.generation, inner.observers.clone())
		};

		for observer in observers.iter().rev() {
			if !self.is_current(generation) {
				break;
			}
			observer.exit();
		}

		true
	}

	fn is_current(&self, generation: u64) -> bool {
		self.inner.borrow().generation == generation
	}

	/// Adds `observer` to the end of the list. An already active publisher
	/// enters the new observer before returning.
	pub(crate) fn subscribe(&self, observer: Rc<dyn Observer<T>>) {
		let value = {
			let mut inner = self.inner.borrow_mut();
			inner.observers.push(RcAddr::new(observer.clone()));
			inner.value.clone()
		};

		if let Some(value) = value {
			observer.enter(&value);
		}
	}

	pub(crate) fn unsubscribe(&self, observer: Rc<dyn Observer<T>>) {
		let observer = RcAddr::new(observer);
		self.inner
			.borrow_mut()
			.observers
			.retain(|item| *item != observer);
	}

	pub(crate) fn clear(&self) {
		let observers = std::mem::take(&mut self.inner.borrow_mut().observers);
		std::mem::drop(observers);
	}

	pub(crate) fn observer_count(&self) -> usize {
		self.inner.borrow().observers.len()
	}
}
