use std::rc::Rc;

/// Teardown handle returned by a scope factory. It is invoked exactly once,
/// when the activation that produced it ends.
pub type Scope = Box<dyn FnOnce()>;

pub(crate) type Factory<T> = Box<dyn Fn(&T) -> Scope>;

pub(crate) fn boxed<T, F, S>(factory: F) -> Factory<T>
where
	T: 'static,
	F: Fn(&T) -> S + 'static,
	S: FnOnce() + 'static,
{
	Box::new(move |value: &T| Box::new(factory(value)) as Scope)
}

/// Scope factory that runs `func` on every activation and nothing on exit.
pub fn on_enter<T, F>(func: F) -> impl Fn(&T) -> Scope
where
	T: 'static,
	F: Fn(&T) + 'static,
{
	move |value: &T| {
		func(value);
		Box::new(|| {}) as Scope
	}
}

/// Scope factory that runs `func` with the activation value once that
/// activation ends.
pub fn on_exit<T, F>(func: F) -> impl Fn(&T) -> Scope
where
	T: Clone + 'static,
	F: Fn(&T) + 'static,
{
	let func = Rc::new(func);
	move |value: &T| {
		let func = func.clone();
		let value = value.clone();
		Box::new(move || func(&value)) as Scope
	}
}
