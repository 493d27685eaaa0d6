//! Lock primitive behind [`ConcurrentSet`](crate::ConcurrentSet).
//!
//! Normal builds use [`parking_lot::Mutex`]: no poisoning, guards released on
//! drop. With the `loom` feature the lock is [`loom::sync::Mutex`] so the
//! two-lock protocol can be model checked; poisoning is recovered so both
//! builds behave alike after a panicking callback.

#[cfg(not(feature = "loom"))]
pub(crate) use parking_lot::{Mutex, MutexGuard};

#[cfg(feature = "loom")]
pub(crate) use model::{Mutex, MutexGuard};

#[cfg(feature = "loom")]
mod model {
    use std::sync::PoisonError;

    pub(crate) type MutexGuard<'a, T> = loom::sync::MutexGuard<'a, T>;

    pub(crate) struct Mutex<T> {
        inner: loom::sync::Mutex<T>,
    }

    impl<T> Mutex<T> {
        pub(crate) fn new(value: T) -> Self {
            Self {
                inner: loom::sync::Mutex::new(value),
            }
        }

        pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub(crate) fn into_inner(self) -> T {
            self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
