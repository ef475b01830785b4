use crate::record::Record;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Declared kind of a record field. Renderers are chosen from this, never
/// from the runtime [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Int,
    Float32,
    Float64,
    Bool,
    Optional(Box<FieldKind>),
    Unsupported,
}

/// Current value of a field, borrowed from the record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Null,
    Unsupported,
}

/// A type that can appear as a record field.
///
/// Every method has a default that marks the type as unsupported, so
/// `impl Field for MyType {}` is enough to let a record carry it; such a
/// field renders as the empty string.
pub trait Field {
    fn kind() -> FieldKind
    where
        Self: Sized,
    {
        FieldKind::Unsupported
    }

    fn value(&self) -> Value<'_> {
        Value::Unsupported
    }

    /// Records return themselves here; this is what the encoder checks
    /// before touching the output map.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }
}

impl Field for String {
    fn kind() -> FieldKind {
        FieldKind::String
    }

    fn value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl Field for &str {
    fn kind() -> FieldKind {
        FieldKind::String
    }

    fn value(&self) -> Value<'_> {
        Value::Str(*self)
    }
}

impl Field for i64 {
    fn kind() -> FieldKind {
        FieldKind::Int
    }

    fn value(&self) -> Value<'_> {
        Value::Int(*self)
    }
}

impl Field for isize {
    fn kind() -> FieldKind {
        FieldKind::Int
    }

    fn value(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }
}

impl Field for f32 {
    fn kind() -> FieldKind {
        FieldKind::Float32
    }

    fn value(&self) -> Value<'_> {
        Value::Float32(*self)
    }
}

impl Field for f64 {
    fn kind() -> FieldKind {
        FieldKind::Float64
    }

    fn value(&self) -> Value<'_> {
        Value::Float64(*self)
    }
}

impl Field for bool {
    fn kind() -> FieldKind {
        FieldKind::Bool
    }

    fn value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl<T: Field> Field for Option<T> {
    fn kind() -> FieldKind {
        FieldKind::Optional(Box::new(T::kind()))
    }

    fn value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.value(),
            None => Value::Null,
        }
    }
}

// A box always points somewhere, so it takes the pointee's kind as is.
impl<T: Field> Field for Box<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T: Field> Field for Rc<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T: Field> Field for Arc<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

macro_rules! unsupported {
    ($($ty:ty),+ $(,)?) => {
        $(impl Field for $ty {})+
    };
}

unsupported!(
    i8, i16, i32, i128, u8, u16, u32, u64, u128, usize, char, (), Duration, PathBuf,
);

macro_rules! unsupported_tuples {
    ($(($($name:ident),+))+) => {
        $(impl<$($name),+> Field for ($($name,)+) {})+
    };
}

unsupported_tuples!((A) (A, B) (A, B, C) (A, B, C, D) (A, B, C, D, E) (A, B, C, D, E, F));

impl<T> Field for Vec<T> {}
impl<T> Field for VecDeque<T> {}
impl<T, const N: usize> Field for [T; N] {}
impl<T, S> Field for HashSet<T, S> {}
impl<T> Field for BTreeSet<T> {}
impl<K, V, S> Field for HashMap<K, V, S> {}
impl<K, V> Field for BTreeMap<K, V> {}
