use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("controller `{name}` is closed")]
	Closed { name: &'static str },
}
