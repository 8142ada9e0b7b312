//! Double-dispatch over two-armed values.
//!
//! [`Visitor`] observes a value by reference and may be called for both
//! arms (see [`Both::visit`](crate::Both::visit)). [`Matcher`] consumes
//! exactly one arm and produces a result. Both traits are implemented for
//! pairs of closures.

pub trait Visitor<A, B> {
	fn first(&mut self, value: &A);
	fn second(&mut self, value: &B);
}

pub trait Matcher<A, B, R> {
	fn first(self, value: A) -> R;
	fn second(self, value: B) -> R;
}

impl<A, B, F1, F2> Visitor<A, B> for (F1, F2)
where
	F1: FnMut(&A),
	F2: FnMut(&B),
{
	fn first(&mut self, value: &A) {
		(self.0)(value)
	}

	fn second(&mut self, value: &B) {
		(self.1)(value)
	}
}

impl<A, B, R, F1, F2> Matcher<A, B, R> for (F1, F2)
where
	F1: FnOnce(A) -> R,
	F2: FnOnce(B) -> R,
{
	fn first(self, value: A) -> R {
		(self.0)(value)
	}

	fn second(self, value: B) -> R {
		(self.1)(value)
	}
}
