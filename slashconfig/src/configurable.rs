//! The wrapper that turns a value into a source of modified copies.
//!
//! Every operation returns a bare `T`. To keep chaining, rewrap the result
//! with [`IntoConfigurable::configurable`] (or [`wrap`]).

use tracing::trace;

use crate::field::Field;

/// Holds one value and produces modified copies of it.
///
/// The `&self` operations ([`setter`](Self::setter), [`mapper`](Self::mapper),
/// [`transform`](Self::transform) and their `try_` forms) clone the wrapped
/// value and never touch it. The consuming operations ([`set`](Self::set),
/// [`map`](Self::map), [`configure`](Self::configure)) reuse the wrapped value
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Configurable<T> {
    value: T,
}

/// Wrap `value` so field updates can be applied to it.
pub fn wrap<T>(value: T) -> Configurable<T> {
    Configurable::new(value)
}

impl<T> Configurable<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Consume the wrapper and return its value with `field` set to `value`.
    pub fn set<V>(self, field: Field<T, V>, value: V) -> T {
        trace!(field = field.name(), "set");
        let mut next = self.value;
        field.set(&mut next, value);
        next
    }

    /// Consume the wrapper and return its value with `field` replaced by
    /// `f(current)`.
    pub fn map<V, F>(self, field: Field<T, V>, f: F) -> T
    where
        F: FnOnce(&V) -> V,
    {
        trace!(field = field.name(), "map");
        let mut next = self.value;
        field.modify(&mut next, f);
        next
    }

    /// Consume the wrapper and return its value after `mutator` has run on it.
    pub fn configure<F>(self, mutator: F) -> T
    where
        F: FnOnce(&mut T),
    {
        trace!("configure");
        let mut next = self.value;
        mutator(&mut next);
        next
    }
}

impl<T: Clone> Configurable<T> {
    /// Return a function that produces a copy with `field` set to its argument.
    ///
    /// The function can be called any number of times; every call starts from
    /// the wrapped value.
    pub fn setter<V>(&self, field: Field<T, V>) -> impl Fn(V) -> T {
        move |value: V| {
            trace!(field = field.name(), "setter");
            let mut copy = self.value.clone();
            field.set(&mut copy, value);
            copy
        }
    }

    /// Return a function that produces a copy with `field` replaced by the
    /// result of the mapping closure it is given.
    ///
    /// The mapping closure runs exactly once per call, with the field's current
    /// value. If it panics, the copy is dropped and the panic propagates.
    pub fn mapper<V, F>(&self, field: Field<T, V>) -> impl Fn(F) -> T
    where
        F: FnOnce(&V) -> V,
    {
        move |f: F| {
            trace!(field = field.name(), "mapper");
            let mut copy = self.value.clone();
            field.modify(&mut copy, f);
            copy
        }
    }

    /// Fallible [`mapper`](Self::mapper): an `Err` from the mapping closure is
    /// returned as is and no copy escapes.
    pub fn try_mapper<V, E, F>(&self, field: Field<T, V>) -> impl Fn(F) -> Result<T, E>
    where
        F: FnOnce(&V) -> Result<V, E>,
    {
        move |f: F| {
            trace!(field = field.name(), "try_mapper");
            let mut copy = self.value.clone();
            field.try_modify(&mut copy, f)?;
            Ok(copy)
        }
    }

    /// Clone the wrapped value once, let `mutator` edit the clone, and return it.
    pub fn transform<F>(&self, mutator: F) -> T
    where
        F: FnOnce(&mut T),
    {
        trace!("transform");
        let mut copy = self.value.clone();
        mutator(&mut copy);
        copy
    }

    /// Fallible [`transform`](Self::transform). A partially edited copy is
    /// dropped when `mutator` returns `Err`.
    pub fn try_transform<E, F>(&self, mutator: F) -> Result<T, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        trace!("try_transform");
        let mut copy = self.value.clone();
        mutator(&mut copy)?;
        Ok(copy)
    }
}

impl<T> From<T> for Configurable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Postfix rewrapping: `value.configurable()` is `wrap(value)`.
pub trait IntoConfigurable: Sized {
    fn configurable(self) -> Configurable<Self> {
        Configurable::new(self)
    }
}

impl<T> IntoConfigurable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Starship, refit, titan};

    #[test]
    fn setter_copies_and_leaves_wrapped_value() {
        let wrapped = wrap(titan());
        let set_officer = wrapped.setter(Starship::commanding_officer());

        let first = set_officer("Liam Shaw".to_string());
        let second = set_officer("Jean-Luc Picard".to_string());

        assert_eq!(first.commanding_officer, "Liam Shaw");
        assert_eq!(second.commanding_officer, "Jean-Luc Picard");
        assert_eq!(first.registry, titan().registry);
        assert_eq!(wrapped.value(), &titan());
    }

    #[test]
    fn mapper_applies_closure_to_current_value() {
        let wrapped = wrap(titan());
        let refit = wrapped.mapper(Starship::registry())(|registry| format!("{registry}-A"));

        assert_eq!(refit.registry, "NCC-80102-A");
        assert_eq!(refit.commanding_officer, titan().commanding_officer);
        assert_eq!(wrapped.into_inner(), titan());
    }

    #[test]
    fn mapper_calls_closure_once() {
        let mut calls = 0;
        let wrapped = wrap(titan());
        let _ = wrapped.mapper(Starship::is_active())(|active| {
            calls += 1;
            !active
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn transform_edits_only_the_copy() {
        let wrapped = wrap(titan());
        let result = wrapped.transform(|ship| {
            ship.commanding_officer = "Liam Shaw".to_string();
            ship.registry.push_str("-A");
            ship.is_active = true;
        });

        assert_eq!(result, refit());
        assert_eq!(wrapped.value(), &titan());
    }

    #[test]
    fn consuming_forms_match_borrowing_forms() {
        let by_ref = wrap(titan()).setter(Starship::registry())("NX-01".to_string());
        let by_value = wrap(titan()).set(Starship::registry(), "NX-01".to_string());
        assert_eq!(by_ref, by_value);

        let mapped = titan()
            .configurable()
            .map(Starship::registry(), |registry| registry.replace("NCC", "NX"));
        assert_eq!(mapped.registry, "NX-80102");

        let configured = titan().configurable().configure(|ship| ship.is_active = true);
        assert!(configured.is_active);
    }

    #[test]
    fn try_mapper_returns_callers_error() {
        let wrapped = wrap(titan());
        let result: Result<Starship, String> = wrapped.try_mapper(Starship::registry())(|registry| {
            Err(format!("{registry} is locked"))
        });

        assert_eq!(result, Err("NCC-80102 is locked".to_string()));
        assert_eq!(wrapped.value(), &titan());
    }

    #[test]
    fn try_transform_discards_partial_copy() {
        let wrapped = wrap(titan());
        let result: Result<Starship, &str> = wrapped.try_transform(|ship| {
            ship.commanding_officer = "Liam Shaw".to_string();
            Err("drydock unavailable")
        });

        assert_eq!(result, Err("drydock unavailable"));
        assert_eq!(wrapped.value(), &titan());
    }

    #[test]
    fn from_and_rewrap_are_wrap() {
        assert_eq!(Configurable::from(titan()), wrap(titan()));
        assert_eq!(titan().configurable(), wrap(titan()));
    }
}
