//! Indented JSON rendering used for every response body.
//!
//! Objects are laid out one field per line with two-space indentation and a
//! `" : "` separator, arrays stay on one line (`[ 1, 2 ]`). Null, empty
//! string, empty array and empty object fields are dropped before rendering.

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Serializer, Value};
use std::io;

use super::error::AppError;

/// Render `value` as pretty JSON with empty fields omitted.
pub fn pretty_print<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let value = strip_empty(serde_json::to_value(value)?);

    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter::default());
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| AppError::Serialization(e.to_string()))
}

fn strip_empty(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, field)| {
                    let field = strip_empty(field);
                    (!is_empty(&field)).then_some((key, field))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_empty).collect()),
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[derive(Debug, Default)]
struct SpacedFormatter {
    depth: usize,
    has_value: bool,
}

impl SpacedFormatter {
    fn newline_indent<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")?;
        for _ in 0..self.depth {
            writer.write_all(b"  ")?;
        }
        Ok(())
    }
}

impl Formatter for SpacedFormatter {
    // Arrays are inline and do not add an indentation level
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" ]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b" " } else { b", " })
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            self.newline_indent(writer)?;
        } else {
            writer.write_all(b" ")?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline_indent(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object_layout() {
        let user = json!({ "id": "one", "name": { "firstName": "test" } });

        assert_eq!(
            pretty_print(&user).unwrap(),
            "{\n  \"id\" : \"one\",\n  \"name\" : {\n    \"firstName\" : \"test\"\n  }\n}"
        );
    }

    #[test]
    fn test_keeps_insertion_order() {
        let user: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();

        assert_eq!(
            pretty_print(&user).unwrap(),
            "{\n  \"zeta\" : 1,\n  \"alpha\" : 2,\n  \"mid\" : 3\n}"
        );
    }

    #[test]
    fn test_omits_empty_fields() {
        let user = json!({
            "id": "two",
            "nickname": null,
            "bio": "",
            "tags": [],
            "address": { "street": "" },
            "active": false,
            "age": 0
        });

        assert_eq!(
            pretty_print(&user).unwrap(),
            "{\n  \"id\" : \"two\",\n  \"active\" : false,\n  \"age\" : 0\n}"
        );
    }

    #[test]
    fn test_arrays_stay_inline() {
        let user = json!({ "id": "three", "roles": ["admin", "dev"], "scores": [1, 2.5] });

        assert_eq!(
            pretty_print(&user).unwrap(),
            "{\n  \"id\" : \"three\",\n  \"roles\" : [ \"admin\", \"dev\" ],\n  \"scores\" : [ 1, 2.5 ]\n}"
        );
    }

    #[test]
    fn test_objects_inside_arrays() {
        let user = json!({ "id": "x", "phones": [{ "type": "home" }, { "type": "work" }] });

        assert_eq!(
            pretty_print(&user).unwrap(),
            "{\n  \"id\" : \"x\",\n  \"phones\" : [ {\n    \"type\" : \"home\"\n  }, {\n    \"type\" : \"work\"\n  } ]\n}"
        );
    }

    #[test]
    fn test_empty_top_level_values() {
        assert_eq!(pretty_print(&json!({})).unwrap(), "{ }");
        assert_eq!(pretty_print(&json!([])).unwrap(), "[ ]");
        assert_eq!(pretty_print(&json!({ "gone": null })).unwrap(), "{ }");
    }
}
