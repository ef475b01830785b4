pub mod data;
#[doc(hidden)]
pub mod resolve;
pub mod tag;

use crate::record::data::{FieldKind, Value};
use crate::record::tag::StructTag;
use indexmap::IndexMap;

/// Declared fields of a record keyed by field identifier, in declaration
/// order.
pub type Schema = IndexMap<&'static str, FieldSchema>;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub tag: StructTag,
}

impl FieldSchema {
    pub fn new(name: &'static str, kind: FieldKind, tag: StructTag) -> FieldSchema {
        FieldSchema { name, kind, tag }
    }
}

/// A struct-shaped value with a fixed set of named, typed fields.
///
/// Usually implemented through [`record!`](crate::record!). A hand-written
/// implementation must also implement [`Field`](crate::Field) with
/// `as_record` returning `Some(self)`, or the encoder will reject it.
pub trait Record {
    fn schema(&self) -> Schema;

    /// Current value of the field with identifier `field`. Unknown
    /// identifiers yield [`Value::Unsupported`].
    fn field_value(&self, field: &str) -> Value<'_>;
}

/// Declares a struct and implements [`Record`] and [`Field`](crate::Field)
/// for it.
///
/// A field may carry a `#[tag(key = "value", ...)]` attribute anywhere among
/// its other attributes. Its pairs become the field's [`StructTag`] as
/// written, so values need no escaping. Every other attribute (doc comments,
/// `#[allow]`, derive helpers) stays on the generated field. `#[cfg]` on a
/// field is not supported since the schema always names every field.
///
/// Any field type is accepted. Types without a [`Field`](crate::Field)
/// impl are declared [`FieldKind::Unsupported`] and render as `""`.
///
/// ```
/// use std::time::Duration;
///
/// urlvalues::record! {
///     #[derive(Debug, Default)]
///     pub struct Search {
///         /// Free text query.
///         #[tag(url = "q")]
///         pub query: String,
///         #[tag(url = "page,omitempty")]
///         pub page: Option<i64>,
///         #[tag(url = "-")]
///         #[allow(dead_code)]
///         pub session: String,
///         #[tag(url = "timeout,omitempty")]
///         pub timeout: Duration,
///     }
/// }
///
/// let search = Search { query: "rust".to_string(), ..Default::default() };
/// let values = urlvalues::Encoder::new().to_values(&search).unwrap();
///
/// assert_eq!(values["q"], vec!["rust"]);
/// assert_eq!(values["page"], vec!["null"]);
/// assert!(!values.contains_key("session"));
/// assert!(!values.contains_key("timeout"));
/// ```
#[macro_export]
macro_rules! record {
    // #[tag(...)] on the current field.
    (@field $head:tt [$($done:tt)*] [$($attrs:tt)*] [$($tags:tt)*]
        #[tag($($key:ident = $value:literal),* $(,)?)]
        $($rest:tt)*
    ) => {
        $crate::record!(@field $head [$($done)*] [$($attrs)*]
            [$($tags)* $(($key, $value))*] $($rest)*);
    };

    // Any other attribute is kept on the field.
    (@field $head:tt [$($done:tt)*] [$($attrs:tt)*] [$($tags:tt)*]
        #[$attr:meta]
        $($rest:tt)*
    ) => {
        $crate::record!(@field $head [$($done)*] [$($attrs)* #[$attr]] [$($tags)*]
            $($rest)*);
    };

    // All fields collected.
    (@field [[$($meta:tt)*] [$($vis:tt)*] $name:ident]
        [$({
            [$($attr:tt)*]
            [$(($key:ident, $value:literal))*]
            [$($field_vis:tt)*]
            $field:ident : $ty:ty
        })*]
        [] []
    ) => {
        $($meta)*
        $($vis)* struct $name {
            $(
                $($attr)*
                $($field_vis)* $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn schema(&self) -> $crate::Schema {
                #[allow(unused_imports)]
                use $crate::record::resolve::{ResolveFallback as _, ResolveField as _};

                let mut fields = $crate::Schema::new();

                $(
                    fields.insert(
                        stringify!($field),
                        $crate::FieldSchema::new(
                            stringify!($field),
                            (&$crate::record::resolve::Resolve::<$ty>::new()).field_kind(),
                            $crate::StructTag::from_pairs(&[$((stringify!($key), $value)),*]),
                        ),
                    );
                )*

                fields
            }

            fn field_value(&self, field: &str) -> $crate::Value<'_> {
                #[allow(unused_imports)]
                use $crate::record::resolve::{ResolveFallback as _, ResolveField as _};

                match field {
                    $(
                        stringify!($field) => (&$crate::record::resolve::Resolve::<$ty>::new())
                            .field_value(&self.$field),
                    )*
                    _ => $crate::Value::Unsupported,
                }
            }
        }

        impl $crate::Field for $name {
            fn as_record(&self) -> ::core::option::Option<&dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }
        }
    };

    // A field declaration closes the current field.
    (@field $head:tt [$($done:tt)*] [$($attrs:tt)*] [$($tags:tt)*]
        $field_vis:vis $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::record!(@field $head
            [$($done)* { [$($attrs)*] [$($tags)*] [$field_vis] $field : $ty }]
            [] [] $($($rest)*)?);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@field [[$(#[$meta])*] [$vis] $name] [] [] [] $($body)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::data::Field;
    use std::net::Ipv4Addr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    crate::record! {
        #[derive(Debug, Clone, Default)]
        struct Account {
            /// Display name.
            #[tag(url = "name", json = "display_name")]
            name: String,
            #[tag(url = "age,omitempty")]
            age: i64,
            balance: f64,
            nickname: Option<String>,
            tags: Vec<String>,
        }
    }

    crate::record! {
        #[derive(Debug)]
        pub(crate) struct Request {
            #[tag(url = "method")]
            pub method: &'static str,
            #[tag(url = "timeout")]
            timeout: Duration,
            #[tag(url = "retry")]
            retry: Option<Duration>,
            #[tag(url = "attempts")]
            pub(crate) attempts: Arc<i64>,
            #[tag(url = "range")]
            range: (i64, i64),
            #[tag(url = "path")]
            path: PathBuf,
            #[tag(url = "addr")]
            addr: Ipv4Addr,
            #[tag(url = "fallback")]
            fallback: Option<Ipv4Addr>,
        }
    }

    crate::record! {
        struct Quoted {
            #[allow(dead_code)]
            /// Leading doc.
            #[tag(url = "say \"hi\"")]
            /// Trailing doc.
            quote: String,
            #[tag(url = r"a\b")]
            #[allow(dead_code)]
            backslash: String,
        }
    }

    fn request() -> Request {
        Request {
            method: "GET",
            timeout: Duration::from_secs(5),
            retry: None,
            attempts: Arc::new(3),
            range: (1, 2),
            path: PathBuf::from("/tmp"),
            addr: Ipv4Addr::LOCALHOST,
            fallback: None,
        }
    }

    struct Point {
        x: i64,
        y: i64,
    }

    impl Record for Point {
        fn schema(&self) -> Schema {
            let mut fields = Schema::new();

            fields.insert(
                "x",
                FieldSchema::new("x", FieldKind::Int, StructTag::new(r#"url:"x""#)),
            );
            fields.insert(
                "y",
                FieldSchema::new("y", FieldKind::Int, StructTag::new(r#"url:"y""#)),
            );

            fields
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "x" => self.x.value(),
                "y" => self.y.value(),
                _ => Value::Unsupported,
            }
        }
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = Account::default().schema();
        let names: Vec<&str> = schema.keys().copied().collect();

        assert_eq!(names, vec!["name", "age", "balance", "nickname", "tags"]);
    }

    #[test]
    fn test_schema_kinds() {
        let schema = Account::default().schema();

        assert_eq!(schema["name"].kind, FieldKind::String);
        assert_eq!(schema["age"].kind, FieldKind::Int);
        assert_eq!(schema["balance"].kind, FieldKind::Float64);
        assert_eq!(
            schema["nickname"].kind,
            FieldKind::Optional(Box::new(FieldKind::String))
        );
        assert_eq!(schema["tags"].kind, FieldKind::Unsupported);
    }

    #[test]
    fn test_schema_tags() {
        let schema = Account::default().schema();

        assert_eq!(schema["name"].tag.get("url"), "name");
        assert_eq!(schema["name"].tag.get("json"), "display_name");
        assert_eq!(schema["age"].tag.get("url"), "age,omitempty");
        assert_eq!(schema["balance"].tag.lookup("url"), None);
        assert!(schema["balance"].tag.is_empty());
    }

    #[test]
    fn test_field_values() {
        let account = Account {
            name: "Alice".to_string(),
            age: 30,
            balance: 1.5,
            nickname: None,
            tags: vec!["a".to_string()],
        };

        assert_eq!(account.field_value("name"), Value::Str("Alice"));
        assert_eq!(account.field_value("age"), Value::Int(30));
        assert_eq!(account.field_value("balance"), Value::Float64(1.5));
        assert_eq!(account.field_value("nickname"), Value::Null);
        assert_eq!(account.field_value("tags"), Value::Unsupported);
        assert_eq!(account.field_value("missing"), Value::Unsupported);
    }

    #[test]
    fn test_generated_record_is_field() {
        let account = Account::default();

        assert!(account.as_record().is_some());
        assert_eq!(Account::kind(), FieldKind::Unsupported);
        assert_eq!(Field::value(&account), Value::Unsupported);
    }

    #[test]
    fn test_hand_written_record() {
        let point = Point { x: 3, y: -4 };
        let schema = point.schema();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema["y"].tag.get("url"), "y");
        assert_eq!(point.field_value("y"), Value::Int(-4));
    }
    #[test]
    fn test_any_field_type_is_accepted() {
        let request = request();
        let schema = request.schema();

        assert_eq!(schema["method"].kind, FieldKind::String);
        assert_eq!(schema["timeout"].kind, FieldKind::Unsupported);
        assert_eq!(
            schema["retry"].kind,
            FieldKind::Optional(Box::new(FieldKind::Unsupported))
        );
        assert_eq!(schema["attempts"].kind, FieldKind::Int);
        assert_eq!(schema["range"].kind, FieldKind::Unsupported);
        assert_eq!(schema["path"].kind, FieldKind::Unsupported);
        assert_eq!(schema["addr"].kind, FieldKind::Unsupported);
        assert_eq!(schema["fallback"].kind, FieldKind::Unsupported);

        assert_eq!(request.field_value("method"), Value::Str("GET"));
        assert_eq!(request.field_value("timeout"), Value::Unsupported);
        assert_eq!(request.field_value("retry"), Value::Null);
        assert_eq!(request.field_value("attempts"), Value::Int(3));
        assert_eq!(request.field_value("addr"), Value::Unsupported);
        assert_eq!(request.field_value("fallback"), Value::Unsupported);
    }

    #[test]
    fn test_tag_values_are_taken_verbatim() {
        let quoted = Quoted {
            quote: String::new(),
            backslash: String::new(),
        };
        let schema = quoted.schema();

        assert_eq!(schema["quote"].tag.get("url"), r#"say "hi""#);
        assert_eq!(schema["backslash"].tag.get("url"), r"a\b");
    }

    #[test]
    fn test_field_attributes_are_kept() {
        let names: Vec<&str> = Quoted {
            quote: String::new(),
            backslash: String::new(),
        }
        .schema()
        .keys()
        .copied()
        .collect();

        assert_eq!(names, vec!["quote", "backslash"]);
    }
}
