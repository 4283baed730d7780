use std::fmt;

use midiconf_core::Backend;

/// A value of any config key type.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Int(i32),
    Float(f32),
    String(String),
}

impl SettingValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
        }
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Int(value as i32)
    }
}

impl From<f32> for SettingValue {
    fn from(value: f32) -> Self {
        SettingValue::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::String(v) => f.write_str(v),
        }
    }
}

/// Outcome of a successful set.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingChange<V> {
    /// The value actually stored, after normalization.
    pub value: V,

    /// Backend whose running device has to be recreated to pick up the change.
    pub restart: Option<Backend>,
}

impl<V> SettingChange<V> {
    /// Whether a device of the `active` backend has to be restarted.
    pub fn needs_restart(&self, active: Backend) -> bool {
        self.restart == Some(active)
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> SettingChange<U> {
        SettingChange {
            value: f(self.value),
            restart: self.restart,
        }
    }
}
