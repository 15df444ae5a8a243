//! Building an object from `key=value` command-line arguments.

use crate::number::parse_number_literal;
use crate::value::Value;

/// Collect `key=value` arguments into an object.
///
/// Only the first `=` separates key from value; an argument without one sets
/// its key to `true`. Values are probed with [`probe_value`]. When `prefixes`
/// is non-empty an argument is kept only if its key starts with one of them,
/// and the first matching prefix (in the order given) is stripped from the
/// key. Later arguments overwrite earlier ones with the same key.
///
/// ```
/// use jvalue::from_command_line_arguments;
///
/// let args = ["--foo=bar", "--flag", "plain=1"];
/// let value = from_command_line_arguments(args, &["--"]);
/// assert_eq!(value.to_string(), r#"{"foo":"bar","flag":true}"#);
/// ```
pub fn from_command_line_arguments<I, S>(args: I, prefixes: &[&str]) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut object = Value::object();
    for arg in args {
        let arg = arg.as_ref();
        let (key, raw) = match arg.split_once('=') {
            Some((key, raw)) => (key, Some(raw)),
            None => (arg, None),
        };
        let key = if prefixes.is_empty() {
            key
        } else {
            match prefixes.iter().find_map(|prefix| key.strip_prefix(*prefix)) {
                Some(stripped) => stripped,
                None => continue,
            }
        };
        let value = raw.map_or(Value::Bool(true), probe_value);
        object.set(key, value);
    }
    object
}

/// Guess the value an argument string stands for.
///
/// Text wrapped in matching `"` or `'` quotes is a string holding the inner
/// text; a `0x` hex or decimal literal is a number; anything else is the
/// string itself.
pub fn probe_value(text: &str) -> Value {
    if let Some(inner) = unquote(text) {
        return Value::String(inner.to_owned());
    }
    match parse_number_literal(text) {
        Some(n) => Value::Number(n),
        None => Value::String(text.to_owned()),
    }
}

fn unquote(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        text.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
