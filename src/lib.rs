//! Scoped reactive state machines.
//!
//! A [`Controller`] is switched on with a value and off again. [`State`]s
//! watch it: each activation opens a scope by calling the state's factory,
//! and the closure the factory returned is run when the activation ends.
//! Activations propagate in subscription order and deactivations in the
//! reverse order, so nested scopes unwind like a stack.
//!
//! Publishers compose with [`Observable::and`], [`Observable::or`], [`not`]
//! and friends into new publishers that carry [`Both`], [`Either`],
//! [`Maybe`] or [`Unit`] values.
//!
//! The graph is single-threaded.

pub mod macros;

mod addr;
mod combinators;
mod composite;
mod controller;
mod error;
pub mod matching;
mod observable;
mod publisher;
mod scope;
mod state;
pub mod types;

pub use combinators::{if_not_none, not};
pub use composite::Composite;
pub use controller::Controller;
pub use error::{Error, Result};
pub use matching::{Matcher, Visitor};
pub use observable::Observable;
pub use scope::{on_enter, on_exit, Scope};
pub use state::State;
pub use types::{both, first, none, second, some, unit, wrap_maybe, Both, Either, Maybe, Unit};
