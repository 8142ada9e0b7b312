use std::ops::Deref;
use std::rc::Rc;

/// Compares `Rc`s by the address of their allocation, ignoring
/// any vtable metadata carried by unsized pointers.
pub struct RcAddr<T: ?Sized> {
	ptr: Rc<T>,
}

impl<T: ?Sized> RcAddr<T> {
	pub fn new(ptr: Rc<T>) -> Self {
		RcAddr { ptr }
	}

	fn addr(&self) -> *const () {
		Rc::as_ptr(&self.ptr) as *const ()
	}
}

impl<T: ?Sized> Clone for RcAddr<T> {
	fn clone(&self) -> Self {
		RcAddr {
			ptr: self.ptr.clone(),
		}
	}
}

impl<T: ?Sized> Deref for RcAddr<T> {
	type Target = Rc<T>;
	fn deref(&self) -> &Self::Target {
		&self.ptr
	}
}

impl<T: ?Sized> PartialEq for RcAddr<T> {
	fn eq(&self, other: &Self) -> bool {
		self.addr().eq(&other.addr())
	}
}

impl<T: ?Sized> Eq for RcAddr<T> {}
