use std::fmt::Debug;
use std::rc::Rc;

use crate::controller::Controller;
use crate::observable::Observable;
use crate::publisher::Publisher;

/// A publisher derived from other publishers by a combinator such as
/// [`Observable::and`] or [`not`](crate::not).
///
/// It has no lifecycle of its own: it is driven entirely by its operands
/// and lives as long as they do.
pub struct Composite<T> {
	source: Controller<T>,
}

impl<T> Clone for Composite<T> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
		}
	}
}

impl<T> Composite<T>
where
	T: Clone + 'static,
{
	pub(crate) fn new(source: Controller<T>) -> Self {
		Composite { source }
	}

	pub fn is_active(&self) -> bool {
		self.source.is_active()
	}

	pub fn value(&self) -> Option<T> {
		self.source.value()
	}
}

impl<T> Observable<T> for Composite<T>
where
	T: Clone + 'static,
{
	fn publisher(&self) -> &Rc<Publisher<T>> {
		self.source.publisher()
	}
}

impl<T> Debug for Composite<T>
where
	T: Clone + Debug + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Composite")
			.field("kind", &self.source.name())
			.field("value", &self.value())
			.finish()
	}
}
