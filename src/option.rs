//! 选项数据模型
//!
//! 选项是一组字符串属性加一个 disabled 标记，label/value 通过可配置的 key 读取。

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_LABEL_KEY: &str = "label";
pub const DEFAULT_VALUE_KEY: &str = "value";
const DISABLED_KEY: &str = "disabled";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectOption {
    attrs: BTreeMap<String, String>,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(DEFAULT_LABEL_KEY.to_string(), label.into());
        Self {
            attrs,
            disabled: false,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.with_attr(DEFAULT_VALUE_KEY, value)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// 缺失 label 属性时返回空串
    pub fn label(&self, label_key: &str) -> &str {
        self.attr(label_key).unwrap_or("")
    }

    pub fn value(&self, value_key: &str, label_key: &str) -> &str {
        self.attr(value_key)
            .unwrap_or_else(|| self.label(label_key))
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for SelectOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.disabled);
        let mut map = serializer.serialize_map(Some(self.attrs.len() + extra))?;
        for (k, v) in &self.attrs {
            map.serialize_entry(k, v)?;
        }
        if self.disabled {
            map.serialize_entry(DISABLED_KEY, &true)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionVisitor)
    }
}

struct OptionVisitor;

impl<'de> Visitor<'de> for OptionVisitor {
    type Value = SelectOption;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("选项对象，例如 {\"label\": \"A\"}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut option = SelectOption::default();
        while let Some(key) = access.next_key::<String>()? {
            let value: serde_json::Value = access.next_value()?;
            if key == DISABLED_KEY {
                option.disabled = value
                    .as_bool()
                    .ok_or_else(|| de::Error::custom("disabled 必须是布尔值"))?;
                continue;
            }
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => continue,
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(de::Error::custom(format!("选项属性 {key} 必须是标量")));
                }
                other => other.to_string(),
            };
            option.attrs.insert(key, text);
        }
        Ok(option)
    }
}
