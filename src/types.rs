//! Small algebraic value types carried by composed publishers.

use std::fmt::{Display, Formatter};

use crate::matching::{Matcher, Visitor};

/// The empty value. Prints as `()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit;

impl Unit {
	/// There is nothing to dispatch on, so the matcher is a plain thunk.
	pub fn match_with<R>(self, matcher: impl FnOnce() -> R) -> R {
		matcher()
	}

	pub fn fold<R>(self, func: impl FnOnce() -> R) -> R {
		self.match_with(func)
	}
}

impl Display for Unit {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("()")
	}
}

/// Exactly one `A` and one `B`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Both<A, B> {
	pub first: A,
	pub second: B,
}

impl<A, B> Both<A, B> {
	pub fn new(first: A, second: B) -> Self {
		Both { first, second }
	}

	/// Unlike the other types, calls *both* arms of the visitor.
	pub fn visit(&self, visitor: &mut impl Visitor<A, B>) {
		visitor.first(&self.first);
		visitor.second(&self.second);
	}

	/// Both arms are always present, so the matcher receives them together.
	pub fn match_with<R>(self, matcher: impl FnOnce(A, B) -> R) -> R {
		matcher(self.first, self.second)
	}

	pub fn fold<R>(self, func: impl FnOnce(A, B) -> R) -> R {
		self.match_with(func)
	}

	pub fn into_tuple(self) -> (A, B) {
		(self.first, self.second)
	}
}

impl<A, B> From<(A, B)> for Both<A, B> {
	fn from((first, second): (A, B)) -> Self {
		Both { first, second }
	}
}

impl<A: Display, B: Display> Display for Both<A, B> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}, {}", self.first, self.second)
	}
}

/// Exactly one of `A` or `B`, tagged with which.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<A, B> {
	First(A),
	Second(B),
}

impl<A, B> Either<A, B> {
	pub fn is_first(&self) -> bool {
		matches!(self, Either::First(_))
	}

	pub fn is_second(&self) -> bool {
		matches!(self, Either::Second(_))
	}

	pub fn visit(&self, visitor: &mut impl Visitor<A, B>) {
		match self {
			Either::First(value) => visitor.first(value),
			Either::Second(value) => visitor.second(value),
		}
	}

	pub fn match_with<R>(self, matcher: impl Matcher<A, B, R>) -> R {
		match self {
			Either::First(value) => matcher.first(value),
			Either::Second(value) => matcher.second(value),
		}
	}

	pub fn fold<R>(self, first: impl FnOnce(A) -> R, second: impl FnOnce(B) -> R) -> R {
		self.match_with((first, second))
	}
}

impl<A: Display, B: Display> Display for Either<A, B> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Either::First(value) => value.fmt(f),
			Either::Second(value) => value.fmt(f),
		}
	}
}

/// Zero or one `T`.
///
/// A thin wrapper over `Option` that adds visitor dispatch, where absence is
/// reported as [`Unit`], and prints absence as `()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Maybe<T>(Option<T>);

impl<T> Default for Maybe<T> {
	fn default() -> Self {
		Maybe(None)
	}
}

impl<T> Maybe<T> {
	pub fn some(value: T) -> Self {
		Maybe(Some(value))
	}

	pub fn none() -> Self {
		Maybe(None)
	}

	pub fn is_present(&self) -> bool {
		self.0.is_some()
	}

	pub fn as_ref(&self) -> Maybe<&T> {
		Maybe(self.0.as_ref())
	}

	pub fn if_present(&self, consumer: impl FnOnce(&T)) {
		if let Some(value) = &self.0 {
			consumer(value)
		}
	}

	pub fn map<U>(self, func: impl FnOnce(T) -> U) -> Maybe<U> {
		Maybe(self.0.map(func))
	}

	pub fn and_then<U>(self, func: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
		match self.0 {
			Some(value) => func(value),
			None => Maybe(None),
		}
	}

	/// # Panics
	///
	/// Panics if the value is absent.
	pub fn unwrap(self) -> T {
		match self.0 {
			Some(value) => value,
			None => panic!("called `Maybe::unwrap()` on an absent value"),
		}
	}

	pub fn into_option(self) -> Option<T> {
		self.0
	}

	pub fn visit(&self, visitor: &mut impl Visitor<T, Unit>) {
		match &self.0 {
			Some(value) => visitor.first(value),
			None => visitor.second(&Unit),
		}
	}

	pub fn match_with<R>(self, matcher: impl Matcher<T, Unit, R>) -> R {
		match self.0 {
			Some(value) => matcher.first(value),
			None => matcher.second(Unit),
		}
	}
}

impl<T> From<Option<T>> for Maybe<T> {
	fn from(value: Option<T>) -> Self {
		Maybe(value)
	}
}

impl<T> From<Maybe<T>> for Option<T> {
	fn from(value: Maybe<T>) -> Self {
		value.0
	}
}

impl<T: Display> Display for Maybe<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(value) => value.fmt(f),
			None => Unit.fmt(f),
		}
	}
}

pub fn unit() -> Unit {
	Unit
}

pub fn both<A, B>(first: A, second: B) -> Both<A, B> {
	Both::new(first, second)
}

pub fn first<A, B>(value: A) -> Either<A, B> {
	Either::First(value)
}

pub fn second<A, B>(value: B) -> Either<A, B> {
	Either::Second(value)
}

pub fn some<T>(value: T) -> Maybe<T> {
	Maybe::some(value)
}

pub fn none<T>() -> Maybe<T> {
	Maybe::none()
}

/// Turns an `Option` into a `Maybe`, `None` becoming absence.
pub fn wrap_maybe<T>(value: Option<T>) -> Maybe<T> {
	Maybe::from(value)
}
