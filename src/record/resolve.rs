//! Kind and value lookup used by `record!`.
//!
//! `(&Resolve::<T>::new()).field_kind()` goes through [`Field`] when `T`
//! implements it and falls back to the unsupported kind otherwise. Method
//! resolution tries the `Resolve<T>` receiver before the autoref'd
//! `&Resolve<T>` one, so the `Field` path wins whenever it applies.

use crate::record::data::{Field, FieldKind, Value};
use std::marker::PhantomData;

pub struct Resolve<T>(PhantomData<T>);

impl<T> Resolve<T> {
    pub const fn new() -> Self {
        Resolve(PhantomData)
    }
}

impl<T> Default for Resolve<T> {
    fn default() -> Self {
        Resolve::new()
    }
}

pub trait ResolveField {
    type Target;

    fn field_kind(&self) -> FieldKind;

    fn field_value<'a>(&self, field: &'a Self::Target) -> Value<'a>;
}

impl<T: Field> ResolveField for Resolve<T> {
    type Target = T;

    fn field_kind(&self) -> FieldKind {
        T::kind()
    }

    fn field_value<'a>(&self, field: &'a T) -> Value<'a> {
        field.value()
    }
}

pub trait ResolveFallback {
    type Target;

    fn field_kind(&self) -> FieldKind;

    fn field_value<'a>(&self, field: &'a Self::Target) -> Value<'a>;
}

impl<T> ResolveFallback for &Resolve<T> {
    type Target = T;

    fn field_kind(&self) -> FieldKind {
        FieldKind::Unsupported
    }

    fn field_value<'a>(&self, _: &'a T) -> Value<'a> {
        Value::Unsupported
    }
}
