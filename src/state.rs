use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};

use crate::observable::Observable;
use crate::publisher::{Observer, Publisher};
use crate::scope::{Factory, Scope};

/// A watcher attached to an upstream publisher.
///
/// Every upstream activation runs the scope factory and keeps the returned
/// teardown until the activation ends. A state republishes the upstream
/// value, so other states can watch it in turn. Downstream watchers enter
/// after this state and exit before it.
///
/// The upstream keeps the state alive. Dropping the handle does not detach
/// it; call [`State::close`] for that.
pub struct State<T> {
	body: Rc<StateBody<T>>,
}

impl<T> Clone for State<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

struct StateBody<T> {
	factory: Factory<T>,
	scope: RefCell<Option<Scope>>,
	closed: Cell<bool>,
	epoch: Cell<u64>,
	publisher: Rc<Publisher<T>>,
	upstream: Weak<Publisher<T>>,
}

impl<T> State<T>
where
	T: Clone + 'static,
{
	pub(crate) fn attach(upstream: &Rc<Publisher<T>>, factory: Factory<T>) -> Self {
		let body = Rc::new(StateBody {
			factory,
			scope: RefCell::new(None),
			closed: Cell::new(false),
			epoch: Cell::new(0),
			publisher: Publisher::new(),
			upstream: Rc::downgrade(upstream),
		});

		upstream.subscribe(body.clone() as Rc<dyn Observer<T>>);
		State { body }
	}

	/// Detaches from the upstream, running the teardown first if the state
	/// is active. Closing twice is a no-op.
	pub fn close(&self) {
		let body = &self.body;
		if body.closed.replace(true) {
			return;
		}

		if let Some(upstream) = body.upstream.upgrade() {
			upstream.unsubscribe(body.clone() as Rc<dyn Observer<T>>);
		}

		body.exit();
	}

	pub fn is_active(&self) -> bool {
		self.body.scope.borrow().is_some()
	}

	pub fn is_closed(&self) -> bool {
		self.body.closed.get()
	}
}

impl<T> Observer<T> for StateBody<T>
where
	T: Clone + 'static,
{
	fn enter(&self, value: &T) {
		if self.closed.get() {
			return;
		}

		self.exit();

		let epoch = self.epoch.get() + 1;
		self.epoch.set(epoch);

		let scope = (self.factory)(value);

		// The factory closed us, or the upstream moved on while it ran.
		if self.closed.get() || self.epoch.get() != epoch {
			scope();
			return;
		}

		*self.scope.borrow_mut() = Some(scope);
		self.publisher.activate(value.clone());
	}

	fn exit(&self) {
		self.epoch.set(self.epoch.get() + 1);

		if self.scope.borrow().is_none() {
			return;
		}

		self.publisher.deactivate();

		let scope = self.scope.borrow_mut().take();
		if let Some(scope) = scope {
			scope();
		}
	}
}

impl<T> Observable<T> for State<T>
where
	T: Clone + 'static,
{
	fn publisher(&self) -> &Rc<Publisher<T>> {
		&self.body.publisher
	}
}

impl<T> Debug for State<T>
where
	T: Clone + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("State")
			.field("active", &self.is_active())
			.field("closed", &self.is_closed())
			.finish()
	}
}
