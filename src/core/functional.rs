//! Type-erased suppliers and operators stored by decoration strategies
//!
//! Side-effect and sack strategies carry caller-provided values and functions
//! of arbitrary types. The set that holds them is heterogeneous, so values
//! are erased to `Box<dyn Any>` and functions to `Arc<dyn Fn>` aliases. The
//! typed adapter functions below do the erasure (and the downcast on the way
//! back) so the configuration surface stays fully typed for callers.

use std::any::Any;
use std::sync::Arc;

/// A type-erased value owned by one executor or branch.
pub type ErasedValue = Box<dyn Any + Send + Sync>;

/// Produces a fresh, independently-owned initial value per invocation.
pub type Supplier = Arc<dyn Fn() -> ErasedValue + Send + Sync>;

/// Merges two contributions under one side-effect key into one value.
/// Must be associative (and commutative enough for the engine's merge order).
pub type Reducer = Arc<dyn Fn(ErasedValue, ErasedValue) -> ErasedValue + Send + Sync>;

/// Derives a forked branch's sack value from its parent's. Must be a pure
/// function of its input.
pub type SplitOperator = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> ErasedValue + Send + Sync>;

/// Combines two sack values when branches rejoin. Must be a pure function of
/// its inputs.
pub type MergeOperator = Arc<dyn Fn(ErasedValue, ErasedValue) -> ErasedValue + Send + Sync>;

/// Wrap a literal value as a supplier that clones it per invocation, so each
/// executor/branch gets independent storage rather than a shared reference.
pub fn constant_supplier<T>(value: T) -> Supplier
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move || Box::new(value.clone()) as ErasedValue)
}

/// Erase a typed value-producing function.
pub fn supplier_of<T, F>(f: F) -> Supplier
where
    T: Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Arc::new(move || Box::new(f()) as ErasedValue)
}

/// Erase a typed binary reducer. The stored value type is an invariant of the
/// key it is registered under; a mismatch is a wiring bug in the engine.
pub fn reducer_of<T, F>(f: F) -> Reducer
where
    T: Send + Sync + 'static,
    F: Fn(T, T) -> T + Send + Sync + 'static,
{
    Arc::new(move |a, b| {
        let a = *a.downcast::<T>().expect("reducer applied to mismatched value type");
        let b = *b.downcast::<T>().expect("reducer applied to mismatched value type");
        Box::new(f(a, b)) as ErasedValue
    })
}

/// Erase a typed sack split operator.
pub fn split_of<T, F>(f: F) -> SplitOperator
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    Arc::new(move |parent| {
        let parent = parent
            .downcast_ref::<T>()
            .expect("split operator applied to mismatched sack type");
        Box::new(f(parent)) as ErasedValue
    })
}

/// Erase a typed sack merge operator.
pub fn merge_of<T, F>(f: F) -> MergeOperator
where
    T: Send + Sync + 'static,
    F: Fn(T, T) -> T + Send + Sync + 'static,
{
    Arc::new(move |a, b| {
        let a = *a.downcast::<T>().expect("merge operator applied to mismatched sack type");
        let b = *b.downcast::<T>().expect("merge operator applied to mismatched sack type");
        Box::new(f(a, b)) as ErasedValue
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_supplier_produces_independent_values() {
        let supplier = constant_supplier(vec![42i64]);
        let a = supplier();
        let b = supplier();
        let a = a.downcast::<Vec<i64>>().expect("vec");
        let mut b = b.downcast::<Vec<i64>>().expect("vec");
        b.push(7);
        // mutating one instance never shows through the other
        assert_eq!(*a, vec![42]);
        assert_eq!(*b, vec![42, 7]);
    }

    #[test]
    fn test_supplier_of_invokes_function_per_call() {
        let supplier = supplier_of(|| String::from("fresh"));
        let a = supplier().downcast::<String>().expect("string");
        let b = supplier().downcast::<String>().expect("string");
        assert_eq!(*a, "fresh");
        assert_eq!(*b, "fresh");
    }

    #[test]
    fn test_reducer_of_round_trip() {
        let reducer = reducer_of(|a: i64, b: i64| a + b);
        let out = reducer(Box::new(2i64), Box::new(40i64));
        assert_eq!(*out.downcast::<i64>().expect("i64"), 42);
    }

    #[test]
    fn test_split_and_merge_round_trip() {
        let split = split_of(|parent: &i64| parent * 2);
        let forked = split(&10i64);
        assert_eq!(*forked.downcast::<i64>().expect("i64"), 20);

        let merge = merge_of(|a: i64, b: i64| a.max(b));
        let joined = merge(Box::new(3i64), Box::new(9i64));
        assert_eq!(*joined.downcast::<i64>().expect("i64"), 9);
    }
}
