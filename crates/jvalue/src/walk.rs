//! Pre-order traversal of a value tree.

use crate::value::Value;

/// Returned by a [`Value::scan_items`] callback to steer the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanControl {
    #[default]
    Continue,
    /// Do not descend into the children of the value just visited.
    SkipChildren,
}

/// Call `callback` on `value` and then on every nested array element and
/// object entry value, depth first.
pub fn walk<F>(value: &Value, callback: &mut F)
where
    F: FnMut(&Value),
{
    scan(value, &mut |node| {
        callback(node);
        ScanControl::Continue
    });
}

fn scan<F>(value: &Value, callback: &mut F)
where
    F: FnMut(&Value) -> ScanControl,
{
    if callback(value) == ScanControl::SkipChildren {
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                scan(item, callback);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                scan(item, callback);
            }
        }
        _ => {}
    }
}

impl Value {
    /// Visit this value and its descendants in document order. The callback
    /// can prune a subtree by returning [`ScanControl::SkipChildren`].
    pub fn scan_items<F>(&self, mut callback: F)
    where
        F: FnMut(&Value) -> ScanControl,
    {
        scan(self, &mut callback);
    }
}
