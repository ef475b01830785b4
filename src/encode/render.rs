use crate::record::data::{FieldKind, Value};
use num_traits::Float;
use std::fmt::Display;

pub type Renderer = Box<dyn Fn(&Value<'_>) -> String>;

pub(crate) const NULL: &str = "null";

const FLOAT_PRECISION: usize = 6;

/// Picks the rendering function for a declared field kind.
///
/// Every renderer is total: a value that does not match the declared kind
/// renders as the empty string, same as an unsupported kind.
pub fn renderer(kind: &FieldKind) -> Renderer {
    match kind {
        FieldKind::String => Box::new(render_string),
        FieldKind::Int => Box::new(render_int),
        FieldKind::Float32 => Box::new(render_float32),
        FieldKind::Float64 => Box::new(render_float64),
        FieldKind::Bool => Box::new(render_bool),
        FieldKind::Optional(inner) => render_optional(inner),
        FieldKind::Unsupported => Box::new(render_unsupported),
    }
}

fn render_string(value: &Value<'_>) -> String {
    match value {
        Value::Str(s) => s.to_string(),
        _ => String::new(),
    }
}

fn render_int(value: &Value<'_>) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        _ => String::new(),
    }
}

fn render_float32(value: &Value<'_>) -> String {
    match value {
        Value::Float32(f) => fixed(*f),
        _ => String::new(),
    }
}

fn render_float64(value: &Value<'_>) -> String {
    match value {
        Value::Float64(f) => fixed(*f),
        _ => String::new(),
    }
}

fn render_bool(value: &Value<'_>) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        _ => String::new(),
    }
}

fn render_optional(inner: &FieldKind) -> Renderer {
    let render = renderer(inner);

    Box::new(move |value: &Value<'_>| -> String {
        match value {
            Value::Null => NULL.to_string(),
            present => render(present),
        }
    })
}

fn render_unsupported(_: &Value<'_>) -> String {
    String::new()
}

fn fixed<F: Float + Display>(value: F) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else {
        format!("{:.*}", FLOAT_PRECISION, value)
    }
}
