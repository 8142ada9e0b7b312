use std::cell::RefCell;
use std::rc::Rc;

use enclose::enclose;

use crate::composite::Composite;
use crate::controller::Controller;
use crate::observable::Observable;
use crate::types::{Both, Either, Maybe, Unit};

pub(crate) fn and<T, U, A, B>(a: &A, b: &B) -> Composite<Both<T, U>>
where
	T: Clone + 'static,
	U: Clone + 'static,
	A: Observable<T>,
	B: Observable<U>,
{
	let out = Controller::with_name("and");
	let slots = Rc::new(RefCell::new((None::<T>, None::<U>)));

	a.watch(enclose!((out, slots) move |value: &T| {
		slots.borrow_mut().0 = Some(value.clone());
		let other = slots.borrow().1.clone();
		if let Some(other) = other {
			out.set(Both::new(value.clone(), other));
		}

		enclose!((out, slots) move || {
			slots.borrow_mut().0 = None;
			out.reset();
		})
	}));

	b.watch(enclose!((out, slots) move |value: &U| {
		slots.borrow_mut().1 = Some(value.clone());
		let other = slots.borrow().0.clone();
		if let Some(other) = other {
			out.set(Both::new(other, value.clone()));
		}

		enclose!((out, slots) move || {
			slots.borrow_mut().1 = None;
			out.reset();
		})
	}));

	Composite::new(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
	First,
	Second,
}

enum Next<V> {
	Keep,
	Set(V),
	Reset,
}

impl<V> Next<V>
where
	V: Clone + 'static,
{
	fn apply(self, out: &Controller<V>) {
		match self {
			Next::Keep => {}
			Next::Set(value) => out.set(value),
			Next::Reset => out.reset(),
		}
	}
}

/// Bookkeeping for `or`: the live value of each operand and which one the
/// composite currently reports.
struct Sides<A, B> {
	first: Option<A>,
	second: Option<B>,
	shown: Option<Side>,
}

impl<A, B> Sides<A, B>
where
	A: Clone,
	B: Clone,
{
	fn new() -> Self {
		Sides {
			first: None,
			second: None,
			shown: None,
		}
	}

	fn enter_first(&mut self, value: A) -> Either<A, B> {
		self.first = Some(value.clone());
		self.shown = Some(Side::First);
		Either::First(value)
	}

	fn enter_second(&mut self, value: B) -> Either<A, B> {
		self.second = Some(value.clone());
		self.shown = Some(Side::Second);
		Either::Second(value)
	}

	fn exit(&mut self, side: Side) -> Next<Either<A, B>> {
		match side {
			Side::First => self.first = None,
			Side::Second => self.second = None,
		}

		if self.shown != Some(side) {
			return Next::Keep;
		}

		if let Some(value) = &self.first {
			self.shown = Some(Side::First);
			Next::Set(Either::First(value.clone()))
		} else if let Some(value) = &self.second {
			self.shown = Some(Side::Second);
			Next::Set(Either::Second(value.clone()))
		} else {
			self.shown = None;
			Next::Reset
		}
	}
}

pub(crate) fn or<T, U, A, B>(a: &A, b: &B) -> Composite<Either<T, U>>
where
	T: Clone + 'static,
	U: Clone + 'static,
	A: Observable<T>,
	B: Observable<U>,
{
	let out = Controller::with_name("or");
	let sides = Rc::new(RefCell::new(Sides::<T, U>::new()));

	a.watch(enclose!((out, sides) move |value: &T| {
		let value = sides.borrow_mut().enter_first(value.clone());
		out.set(value);

		enclose!((out, sides) move || {
			let next = sides.borrow_mut().exit(Side::First);
			next.apply(&out);
		})
	}));

	b.watch(enclose!((out, sides) move |value: &U| {
		let value = sides.borrow_mut().enter_second(value.clone());
		out.set(value);

		enclose!((out, sides) move || {
			let next = sides.borrow_mut().exit(Side::Second);
			next.apply(&out);
		})
	}));

	Composite::new(out)
}

pub(crate) fn on_activated<T, O>(source: &O) -> Composite<T>
where
	T: Clone + 'static,
	O: Observable<T>,
{
	let out = Controller::with_name("on_activated");
	source.watch(enclose!((out) move |value: &T| {
		out.set(value.clone());
		|| {}
	}));
	Composite::new(out)
}

pub(crate) fn on_deactivated<T, O>(source: &O) -> Composite<T>
where
	T: Clone + 'static,
	O: Observable<T>,
{
	let out = Controller::with_name("on_deactivated");
	source.watch(enclose!((out) move |value: &T| {
		let value = value.clone();
		enclose!((out) move || out.set(value))
	}));
	Composite::new(out)
}

pub(crate) fn only_if<T, O, P>(source: &O, predicate: P) -> Composite<T>
where
	T: Clone + 'static,
	O: Observable<T>,
	P: Fn(&T) -> bool + 'static,
{
	let out = Controller::with_name("only_if");
	source.watch(enclose!((out) move |value: &T| {
		let passed = predicate(value);
		if passed {
			out.set(value.clone());
		}

		enclose!((out) move || {
			if passed {
				out.reset();
			}
		})
	}));
	Composite::new(out)
}

pub(crate) fn map<T, U, O, F>(source: &O, func: F) -> Composite<U>
where
	T: Clone + 'static,
	U: Clone + 'static,
	O: Observable<T>,
	F: Fn(&T) -> U + 'static,
{
	let out = Controller::with_name("map");
	source.watch(enclose!((out) move |value: &T| {
		out.set(func(value));
		enclose!((out) move || out.reset())
	}));
	Composite::new(out)
}

pub(crate) fn filter_map<T, U, O, F>(source: &O, func: F) -> Composite<U>
where
	T: Clone + 'static,
	U: Clone + 'static,
	O: Observable<T>,
	F: Fn(&T) -> Maybe<U> + 'static,
{
	let out = Controller::with_name("filter_map");
	source.watch(enclose!((out) move |value: &T| {
		let mapped = func(value).into_option();
		let present = mapped.is_some();
		if let Some(mapped) = mapped {
			out.set(mapped);
		}

		enclose!((out) move || {
			if present {
				out.reset();
			}
		})
	}));
	Composite::new(out)
}

/// Active, carrying [`Unit`], exactly while `source` is not.
pub fn not<T, O>(source: &O) -> Composite<Unit>
where
	T: Clone + 'static,
	O: Observable<T>,
{
	let out = Controller::with_name("not");
	out.set(Unit);
	source.watch(enclose!((out) move |_: &T| {
		out.reset();
		enclose!((out) move || out.set(Unit))
	}));
	Composite::new(out)
}

/// Republishes the activations of `source` that carry a present value.
pub fn if_not_none<T, O>(source: &O) -> Composite<T>
where
	T: Clone + 'static,
	O: Observable<Maybe<T>>,
{
	source.filter_map(|value: &Maybe<T>| value.clone())
}
