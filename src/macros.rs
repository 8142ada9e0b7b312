pub use enclose::*;

/// Builds a scope factory, cloning the listed captures into it first.
///
/// The body runs on activation and must evaluate to the teardown closure.
/// Captures used by the teardown have to be cloned again, since the factory
/// runs once per activation.
#[macro_export]
macro_rules! scope {
    (( $($d_tt:tt)* ) $value:ident : $ty:ty => $($b:tt)*) => {
        $crate::macros::enclose!(($( $d_tt )*) move |$value: &$ty| { $($b)* })
    };
    (( $($d_tt:tt)* ) $value:ident => $($b:tt)*) => {
        $crate::macros::enclose!(($( $d_tt )*) move |$value: &_| { $($b)* })
    };
    ($value:ident : $ty:ty => $($b:tt)*) => {
        move |$value: &$ty| { $($b)* }
    };
    ($value:ident => $($b:tt)*) => {
        move |$value: &_| { $($b)* }
    };
}
