//! Encodes typed records into `key -> [value]` maps for query strings and
//! form bodies.
//!
//! Records are declared with [`record!`] (or implement [`Record`] by hand).
//! Each field's `url` tag picks its output key and options:
//!
//! - `name` writes the field under `name`
//! - `name,omitempty` drops the field when it renders as `""`
//! - `-` never writes the field

pub mod encode;
pub mod error;
pub mod record;

pub use encode::values::ValueMap;
pub use encode::{Encoder, DEFAULT_TAG_ID};
pub use error::{EncodeError, ErrorCode};
pub use record::data::{Field, FieldKind, Value};
pub use record::tag::{StructTag, Tag, TagOptions};
pub use record::{FieldSchema, Record, Schema};
