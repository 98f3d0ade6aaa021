//! Typed references to a single named field of a value type.

use std::fmt;

/// A designator for one named field of `T` whose static type is `V`.
///
/// A `Field` carries a shared and a mutable projection into `T`. Both are
/// plain function pointers, so the reference is `Copy` and carries no state
/// of its own. Build one with [`field!`](crate::field) or through the
/// accessors generated by [`fields!`](crate::fields).
pub struct Field<T, V> {
    name: &'static str,
    get: fn(&T) -> &V,
    get_mut: fn(&mut T) -> &mut V,
}

impl<T, V> Field<T, V> {
    /// Create a field reference from its name and projections.
    ///
    /// The projections must address the same field; `name` is only used for
    /// diagnostics.
    pub const fn new(name: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self {
        Self { name, get, get_mut }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, target: &'a T) -> &'a V {
        (self.get)(target)
    }

    pub fn get_mut<'a>(&self, target: &'a mut T) -> &'a mut V {
        (self.get_mut)(target)
    }

    /// Overwrite the field in place.
    pub fn set(&self, target: &mut T, value: V) {
        *self.get_mut(target) = value;
    }

    /// Overwrite the field in place and return the previous value.
    pub fn replace(&self, target: &mut T, value: V) -> V {
        std::mem::replace(self.get_mut(target), value)
    }

    /// Replace the field with `f(current)`.
    ///
    /// `f` runs exactly once, before the field is written.
    pub fn modify<F>(&self, target: &mut T, f: F)
    where
        F: FnOnce(&V) -> V,
    {
        let next = f(self.get(target));
        self.set(target, next);
    }

    /// Fallible [`modify`](Self::modify). On `Err` the field is left untouched.
    pub fn try_modify<E, F>(&self, target: &mut T, f: F) -> Result<(), E>
    where
        F: FnOnce(&V) -> Result<V, E>,
    {
        let next = f(self.get(target))?;
        self.set(target, next);
        Ok(())
    }
}

impl<T: Clone, V> Field<T, V> {
    /// Return a copy of `source` with this field set to `value`.
    pub fn with(&self, source: &T, value: V) -> T {
        let mut copy = source.clone();
        self.set(&mut copy, value);
        copy
    }

    /// Return a copy of `source` with this field replaced by `f(current)`.
    pub fn update<F>(&self, source: &T, f: F) -> T
    where
        F: FnOnce(&V) -> V,
    {
        let mut copy = source.clone();
        self.modify(&mut copy, f);
        copy
    }
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}
