pub mod render;
pub mod values;

use crate::encode::render::renderer;
use crate::encode::values::ValueMap;
use crate::error::EncodeError;
use crate::record::data::Field;
use crate::record::tag::Tag;
use indexmap::IndexMap;
use tracing::{debug, trace};

pub const DEFAULT_TAG_ID: &str = "url";

/// Encodes records into `key -> [value]` maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    tag_id: String,
}

impl Encoder {
    /// An encoder reading the `url` tag.
    pub fn new() -> Self {
        Encoder::with_tag_id(DEFAULT_TAG_ID)
    }

    pub fn with_tag_id(tag_id: impl Into<String>) -> Self {
        Encoder {
            tag_id: tag_id.into(),
        }
    }

    pub fn tag_id(&self) -> &str {
        &self.tag_id
    }

    /// Encodes the fields of `src` into `dst`, in declaration order.
    ///
    /// Fails with [`ErrorCode::TypeMismatch`](crate::ErrorCode::TypeMismatch)
    /// if `src` is not a record, in which case `dst` is untouched. Existing
    /// entries in `dst` are kept unless a field writes the same key.
    pub fn encode<T, M>(&self, src: &T, dst: &mut M) -> Result<(), EncodeError>
    where
        T: Field + ?Sized,
        M: ValueMap + ?Sized,
    {
        let record = src.as_record().ok_or_else(EncodeError::type_mismatch)?;
        let schema = record.schema();

        debug!(tag_id = %self.tag_id, fields = schema.len(), "encoding record");

        let mut emitted = 0usize;

        for field in schema.values() {
            let annotation = field.tag.get(&self.tag_id);
            let tag = Tag::parse(&annotation);

            if tag.is_skipped() {
                trace!(field = field.name, "skipping field");
                continue;
            }

            let render = renderer(&field.kind);
            let value = render(&record.field_value(field.name));

            if value.is_empty() && tag.omit_empty() {
                trace!(field = field.name, key = tag.name(), "omitting empty field");
                continue;
            }

            dst.set(tag.name(), value);
            emitted += 1;
        }

        debug!(emitted, "encoded record");

        Ok(())
    }

    /// Encodes `src` into a new map that keeps the first-write order of keys.
    pub fn to_values<T>(&self, src: &T) -> Result<IndexMap<String, Vec<String>>, EncodeError>
    where
        T: Field + ?Sized,
    {
        let mut values: IndexMap<String, Vec<String>> = IndexMap::new();

        self.encode(src, &mut values)?;

        Ok(values)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}
