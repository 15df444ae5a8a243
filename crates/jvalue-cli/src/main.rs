//! `jvalue`: read a JSON document, merge command-line overrides into it and
//! print the result.
//!
//! ```text
//! jvalue [--input=FILE] [--indent=N|TEXT] [--arrays=positional|append|replace] [+path.to.key=VALUE ...]
//! ```
//!
//! Without `--input` the document is read from stdin. Override values are
//! probed like any other argument: quoted text stays a string, numeric text
//! becomes a number, and a bare `+flag` sets `true`.

use std::io::Read;

use jvalue::{from_command_line_arguments, ArrayMerge, MergeOptions, Value};
use tracing_subscriber::EnvFilter;

const OPTION_PREFIX: &str = "--";
const OVERRIDE_PREFIX: &str = "+";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jvalue=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = from_command_line_arguments(&args, &[OPTION_PREFIX]);
    let overrides = from_command_line_arguments(&args, &[OVERRIDE_PREFIX]);

    let text = match input_path(options.get("input"))? {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let mut document = Value::parse(&text)?;

    let merge = MergeOptions {
        arrays: array_merge(options.get("arrays"))?,
    };
    for (path, value) in overrides.entries() {
        tracing::debug!(path, "applying override");
        apply_override(&mut document, path, &override_value(value), &merge);
    }

    println!("{}", document.to_json_string(&indent_unit(options.get("indent"))));
    Ok(())
}

/// `--input` must name a file. A bare `--input` probes to `true` and a
/// numeric name to a number; both are refused.
fn input_path(option: &Value) -> Result<Option<&str>, String> {
    match option {
        Value::Null => Ok(None),
        Value::String(path) => Ok(Some(path.as_str())),
        other => Err(format!("--input expects a file path, got `{other}`")),
    }
}

fn array_merge(option: &Value) -> Result<ArrayMerge, String> {
    if option.is_null() {
        return Ok(ArrayMerge::default());
    }
    match option.as_string().as_str() {
        "positional" => Ok(ArrayMerge::Positional),
        "append" => Ok(ArrayMerge::Append),
        "replace" => Ok(ArrayMerge::Replace),
        other => Err(format!(
            "unknown --arrays mode `{other}` (expected positional, append or replace)"
        )),
    }
}

/// `--indent=2` means two spaces; any non-numeric text is used verbatim.
fn indent_unit(option: &Value) -> String {
    match option {
        Value::Null => String::new(),
        Value::Number(_) => " ".repeat(option.as_u32() as usize),
        other => other.as_string(),
    }
}

/// Override values that look like a JSON array or object are parsed, so
/// `+tags=[1,2]` merges a list rather than a string.
fn override_value(value: &Value) -> Value {
    match value.as_str() {
        Some(text) if text.starts_with(['[', '{']) => {
            Value::try_parse(text).unwrap_or_else(|| value.clone())
        }
        _ => value.clone(),
    }
}

/// Merge `value` into the member of `document` addressed by the dotted
/// `path`, creating it as needed. Numeric segments address array elements,
/// or the member under that decimal key when the parent is an object.
fn apply_override(document: &mut Value, path: &str, value: &Value, merge: &MergeOptions) {
    let mut slot = document;
    for segment in path.split('.') {
        slot = match segment.parse::<usize>() {
            Ok(index) => &mut slot[index],
            Err(_) => slot.get_or_insert(segment),
        };
    }
    slot.assign_with(value, merge);
}
