//! 嵌套 JSON 对象扁平化
//!
//! Twitter API 返回的推文是嵌套对象，例如 `{"user": {"name": "a"}}`，
//! 扁平化后为 `{"user_name": "a"}`，便于和模型属性一一对应。

use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

use crate::core::Value;

/// 将嵌套对象展开为单层映射，键名用 `sep` 连接
///
/// 数组和标量保持原样，只有对象会被继续展开
pub fn flatten_object(object: &Map<String, JsonValue>, sep: &str) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into(object, "", sep, &mut flat);
    flat
}

fn flatten_into(
    object: &Map<String, JsonValue>,
    prefix: &str,
    sep: &str,
    flat: &mut BTreeMap<String, Value>,
) {
    for (key, value) in object {
        let name = format!("{}{}", prefix, key);
        match value {
            JsonValue::Object(inner) => {
                flatten_into(inner, &format!("{}{}", name, sep), sep, flat);
            }
            other => {
                flat.insert(name, Value::from(other.clone()));
            }
        }
    }
}
