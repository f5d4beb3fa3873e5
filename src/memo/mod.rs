//! Conditional memoization keyed by dependency identity.
//!
//! [`MemoCell`] is a single-slot cache: it holds the last derived value
//! together with the dependency tuple that produced it, and hands the
//! cached value back while the dependencies still compare the same.
//! Consumers that compare handler props by reference (to skip
//! re-subscription) rely on this, so "same" is identity-shaped: `Rc`
//! dependencies compare by allocation, not by contents.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Dependency values compared when deciding whether a cached derivation
/// is still current.
pub trait Dependency {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Dependency for Rc<T> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<D: Dependency> Dependency for Option<D> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Dependency, B: Dependency> Dependency for (A, B) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1)
    }
}

/// Macro to implement [`Dependency`] by value equality for plain types.
macro_rules! value_dependency {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dependency for $ty {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_dependency!(bool, i32, i64, u32, u64, usize, String);

impl Dependency for &str {
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

/// Single-slot cache keyed by a dependency tuple.
///
/// Interior mutability via `RefCell`: the host dispatch model is
/// single-threaded and synchronous, so the cell is neither `Send` nor
/// `Sync` on purpose. The slot borrow is held across the factory call;
/// a factory that re-enters the same cell panics.
pub struct MemoCell<D, T> {
    slot: RefCell<Option<(D, T)>>,
}

impl<D, T> MemoCell<D, T> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<D, T> Default for MemoCell<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dependency, T: Clone> MemoCell<D, T> {
    /// Return the cached value while `deps` compare the same as the
    /// cached tuple; otherwise run `build`, replace the slot, and return
    /// the fresh value.
    pub fn get_or_insert_with(&self, deps: D, build: impl FnOnce() -> T) -> T {
        let mut slot = self.slot.borrow_mut();
        if let Some((cached_deps, value)) = slot.as_ref() {
            if cached_deps.same(&deps) {
                return value.clone();
            }
        }
        let value = build();
        *slot = Some((deps, value.clone()));
        value
    }

    /// Guarded variant: a false `condition` yields `None` without
    /// running `build` and without touching the slot. The dependency
    /// comparison still gates reuse once the condition holds again.
    pub fn get_if(&self, condition: bool, deps: D, build: impl FnOnce() -> T) -> Option<T> {
        if !condition {
            return None;
        }
        Some(self.get_or_insert_with(deps, build))
    }
}

impl<D, T> fmt::Debug for MemoCell<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCell")
            .field("populated", &self.slot.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_deps_reuse_the_cached_value() {
        let cell: MemoCell<String, Rc<u32>> = MemoCell::new();
        let mut builds = 0;

        let first = cell.get_or_insert_with("a".to_string(), || {
            builds += 1;
            Rc::new(1)
        });
        let second = cell.get_or_insert_with("a".to_string(), || {
            builds += 1;
            Rc::new(2)
        });

        assert_eq!(builds, 1);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn changed_deps_rebuild() {
        let cell: MemoCell<String, Rc<u32>> = MemoCell::new();

        let first = cell.get_or_insert_with("a".to_string(), || Rc::new(1));
        let second = cell.get_or_insert_with("b".to_string(), || Rc::new(2));

        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(*second, 2);
    }

    #[test]
    fn rc_deps_compare_by_allocation() {
        let cell: MemoCell<Rc<String>, u32> = MemoCell::new();
        let dep = Rc::new("cb".to_string());
        let mut builds = 0;

        cell.get_or_insert_with(Rc::clone(&dep), || {
            builds += 1;
            1
        });
        cell.get_or_insert_with(Rc::clone(&dep), || {
            builds += 1;
            2
        });
        // Equal contents, different allocation: must rebuild.
        cell.get_or_insert_with(Rc::new("cb".to_string()), || {
            builds += 1;
            3
        });

        assert_eq!(builds, 2);
    }

    #[test]
    fn false_condition_never_builds() {
        let cell: MemoCell<bool, u32> = MemoCell::new();
        let mut builds = 0;

        assert_eq!(
            cell.get_if(false, true, || {
                builds += 1;
                1
            }),
            None
        );
        assert_eq!(builds, 0);

        assert_eq!(
            cell.get_if(true, true, || {
                builds += 1;
                1
            }),
            Some(1)
        );
        assert_eq!(builds, 1);
    }

    #[test]
    fn condition_flip_keeps_the_slot() {
        let cell: MemoCell<&str, u32> = MemoCell::new();
        let mut builds = 0;

        cell.get_if(true, "a", || {
            builds += 1;
            1
        });
        cell.get_if(false, "a", || {
            builds += 1;
            2
        });
        let value = cell.get_if(true, "a", || {
            builds += 1;
            3
        });

        assert_eq!(builds, 1);
        assert_eq!(value, Some(1));
    }

    #[test]
    fn option_and_pair_deps_compare_structurally() {
        let a = Rc::new(1u32);
        assert!(Some(Rc::clone(&a)).same(&Some(Rc::clone(&a))));
        assert!(!Some(Rc::clone(&a)).same(&None));
        assert!(None::<Rc<u32>>.same(&None));
        assert!(("x", true).same(&("x", true)));
        assert!(!("x", true).same(&("x", false)));
    }
}
