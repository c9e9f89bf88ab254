//! Short, human-readable rendering of export value types.
//!
//! Primitives use their WIT names. Aggregates nested two or more levels
//! deep collapse to their kind (`record`, `variant`, `enum`, `flags`) so a
//! signature stays on one line.

use crate::model::catalog::ValueType;

const MAX_EXPANDED_DEPTH: usize = 2;

/// Render `typ` the way it appears in a function suggestion.
pub fn short_type_name(typ: &ValueType) -> String {
    render(typ, 0)
}

fn render(typ: &ValueType, depth: usize) -> String {
    let collapsed = depth >= MAX_EXPANDED_DEPTH;
    match typ {
        ValueType::Bool => "bool".to_string(),
        ValueType::S8 => "s8".to_string(),
        ValueType::U8 => "u8".to_string(),
        ValueType::S16 => "s16".to_string(),
        ValueType::U16 => "u16".to_string(),
        ValueType::S32 => "s32".to_string(),
        ValueType::U32 => "u32".to_string(),
        ValueType::S64 => "s64".to_string(),
        ValueType::U64 => "u64".to_string(),
        ValueType::F32 => "f32".to_string(),
        ValueType::F64 => "f64".to_string(),
        ValueType::Chr => "char".to_string(),
        ValueType::Str => "string".to_string(),
        ValueType::List { inner } => format!("list<{}>", render(inner, depth + 1)),
        ValueType::Option { inner } => format!("option<{}>", render(inner, depth + 1)),
        ValueType::Result { ok, err } => match (ok, err) {
            (Some(ok), Some(err)) => format!(
                "result<{}, {}>",
                render(ok, depth + 1),
                render(err, depth + 1)
            ),
            (Some(ok), None) => format!("result<{}>", render(ok, depth + 1)),
            (None, Some(err)) => format!("result<_, {}>", render(err, depth + 1)),
            (None, None) => "result".to_string(),
        },
        ValueType::Tuple { items } => {
            let items: Vec<String> = items.iter().map(|t| render(t, depth + 1)).collect();
            format!("tuple<{}>", items.join(", "))
        }
        ValueType::Record { .. } if collapsed => "record".to_string(),
        ValueType::Record { fields } => {
            let fields: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}", f.name, render(&f.typ, depth + 1)))
                .collect();
            format!("record{{{}}}", fields.join(", "))
        }
        ValueType::Variant { .. } if collapsed => "variant".to_string(),
        ValueType::Variant { cases } => {
            let cases: Vec<String> = cases
                .iter()
                .map(|c| match &c.typ {
                    Some(t) => format!("{}({})", c.name, render(t, depth + 1)),
                    None => c.name.clone(),
                })
                .collect();
            format!("variant{{{}}}", cases.join(", "))
        }
        ValueType::Enum { .. } if collapsed => "enum".to_string(),
        ValueType::Enum { cases } => format!("enum{{{}}}", cases.join(", ")),
        ValueType::Flags { .. } if collapsed => "flags".to_string(),
        ValueType::Flags { names } => format!("flags{{{}}}", names.join(", ")),
        ValueType::Handle { resource } => format!("handle<{}>", resource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{NamedType, VariantCase};

    fn boxed(t: ValueType) -> Box<ValueType> {
        Box::new(t)
    }

    fn record(fields: Vec<(&str, ValueType)>) -> ValueType {
        ValueType::Record {
            fields: fields
                .into_iter()
                .map(|(name, typ)| NamedType {
                    name: name.to_string(),
                    typ,
                })
                .collect(),
        }
    }

    #[test]
    fn test_primitives() {
        assert_eq!(short_type_name(&ValueType::Str), "string");
        assert_eq!(short_type_name(&ValueType::Chr), "char");
        assert_eq!(short_type_name(&ValueType::S64), "s64");
    }

    #[test]
    fn test_containers() {
        let list = ValueType::List {
            inner: boxed(ValueType::Str),
        };
        assert_eq!(short_type_name(&list), "list<string>");

        let opt = ValueType::Option {
            inner: boxed(ValueType::U32),
        };
        assert_eq!(short_type_name(&opt), "option<u32>");

        let tuple = ValueType::Tuple {
            items: vec![ValueType::U8, ValueType::Bool],
        };
        assert_eq!(short_type_name(&tuple), "tuple<u8, bool>");
    }

    #[test]
    fn test_result_shapes() {
        let full = ValueType::Result {
            ok: Some(boxed(ValueType::U64)),
            err: Some(boxed(ValueType::Str)),
        };
        assert_eq!(short_type_name(&full), "result<u64, string>");

        let err_only = ValueType::Result {
            ok: None,
            err: Some(boxed(ValueType::Str)),
        };
        assert_eq!(short_type_name(&err_only), "result<_, string>");

        let ok_only = ValueType::Result {
            ok: Some(boxed(ValueType::Bool)),
            err: None,
        };
        assert_eq!(short_type_name(&ok_only), "result<bool>");

        let unit = ValueType::Result { ok: None, err: None };
        assert_eq!(short_type_name(&unit), "result");
    }

    #[test]
    fn test_aggregates() {
        let item = record(vec![("sku", ValueType::Str), ("qty", ValueType::U32)]);
        assert_eq!(short_type_name(&item), "record{sku: string, qty: u32}");

        let status = ValueType::Variant {
            cases: vec![
                VariantCase {
                    name: "failed".into(),
                    typ: Some(ValueType::Str),
                },
                VariantCase {
                    name: "done".into(),
                    typ: None,
                },
            ],
        };
        assert_eq!(short_type_name(&status), "variant{failed(string), done}");

        let color = ValueType::Enum {
            cases: vec!["red".into(), "green".into()],
        };
        assert_eq!(short_type_name(&color), "enum{red, green}");

        let perms = ValueType::Flags {
            names: vec!["read".into(), "write".into()],
        };
        assert_eq!(short_type_name(&perms), "flags{read, write}");

        let handle = ValueType::Handle {
            resource: "cart".into(),
        };
        assert_eq!(short_type_name(&handle), "handle<cart>");
    }

    #[test]
    fn test_deep_aggregates_collapse() {
        let innermost = record(vec![("c", ValueType::Bool)]);
        let middle = record(vec![("b", innermost)]);
        let outer = record(vec![("a", middle)]);
        assert_eq!(short_type_name(&outer), "record{a: record{b: record}}");

        let nested = ValueType::List {
            inner: boxed(ValueType::List {
                inner: boxed(ValueType::Enum {
                    cases: vec!["x".into()],
                }),
            }),
        };
        assert_eq!(short_type_name(&nested), "list<list<enum>>");
    }
}
