use std::rc::Rc;

use crate::combinators;
use crate::composite::Composite;
use crate::publisher::Publisher;
use crate::scope;
use crate::state::State;
use crate::types::{Both, Either, Maybe};

/// Anything that can be watched: controllers, states and composites.
///
/// Every combinator returns a new publisher that is itself `Observable`, so
/// they nest freely, e.g. `a.and(&b).or(&c.and(&d)).watch(..)`.
pub trait Observable<T>
where
	T: Clone + 'static,
{
	#[doc(hidden)]
	fn publisher(&self) -> &Rc<Publisher<T>>;

	/// Attaches a new [`State`] that calls `factory` on every activation and
	/// the closure it returns when that activation ends.
	///
	/// If `self` is already active, the factory runs before `watch` returns.
	fn watch<F, S>(&self, factory: F) -> State<T>
	where
		F: Fn(&T) -> S + 'static,
		S: FnOnce() + 'static,
	{
		State::attach(self.publisher(), scope::boxed(factory))
	}

	/// Active while both `self` and `other` are active.
	fn and<U, O>(&self, other: &O) -> Composite<Both<T, U>>
	where
		U: Clone + 'static,
		O: Observable<U>,
		Self: Sized,
	{
		combinators::and(self, other)
	}

	/// Active while at least one of `self` and `other` is active, carrying
	/// the side that activated last.
	fn or<U, O>(&self, other: &O) -> Composite<Either<T, U>>
	where
		U: Clone + 'static,
		O: Observable<U>,
		Self: Sized,
	{
		combinators::or(self, other)
	}

	/// Holds the value of the latest activation, even after it ended.
	fn on_activated(&self) -> Composite<T>
	where
		Self: Sized,
	{
		combinators::on_activated(self)
	}

	/// Holds the value of the latest activation that has ended.
	fn on_deactivated(&self) -> Composite<T>
	where
		Self: Sized,
	{
		combinators::on_deactivated(self)
	}

	fn only_if<P>(&self, predicate: P) -> Composite<T>
	where
		P: Fn(&T) -> bool + 'static,
		Self: Sized,
	{
		combinators::only_if(self, predicate)
	}

	fn map<U, F>(&self, func: F) -> Composite<U>
	where
		U: Clone + 'static,
		F: Fn(&T) -> U + 'static,
		Self: Sized,
	{
		combinators::map(self, func)
	}

	/// Like [`map`](Observable::map), but activations mapped to an absent
	/// value are skipped.
	fn filter_map<U, F>(&self, func: F) -> Composite<U>
	where
		U: Clone + 'static,
		F: Fn(&T) -> Maybe<U> + 'static,
		Self: Sized,
	{
		combinators::filter_map(self, func)
	}
}
