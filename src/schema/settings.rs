use crate::error::ValidationError;
use serde_json::Value as JsonValue;

/// Raw node settings as stored in the circuit document.
///
/// Editors may keep extra keys (positions, labels) alongside the ones a
/// block kind declares; unknown keys are ignored.
pub type Settings = serde_json::Map<String, JsonValue>;

/// Declarative schema for a single node setting, checked by the validator
/// and used by hosts to render settings forms.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SettingSpec {
    pub key: &'static str,
    pub kind: SettingKind,
    pub required: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
pub enum SettingKind {
    Text,
    Integer { min: i64, max: i64 },
    Choice(&'static [&'static str]),
}

impl SettingSpec {
    pub fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: SettingKind::Text,
            required: false,
        }
    }

    pub fn required_text(key: &'static str) -> Self {
        Self {
            key,
            kind: SettingKind::Text,
            required: true,
        }
    }

    pub fn choice(key: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: SettingKind::Choice(options),
            required: false,
        }
    }

    pub fn integer_range(key: &'static str, min: i64, max: i64) -> Self {
        Self {
            key,
            kind: SettingKind::Integer { min, max },
            required: false,
        }
    }

    /// A non-negative count with no upper bound.
    pub fn count(key: &'static str) -> Self {
        Self::integer_range(key, 0, i64::MAX)
    }

    /// Checks the raw value stored under this spec's key. Absent and null
    /// values pass unless the setting is required; integers additionally
    /// treat a blank string as unset, matching editor behavior for cleared
    /// numeric fields.
    pub fn check(&self, node_id: &str, settings: &Settings) -> Result<(), ValidationError> {
        let value = match settings.get(self.key) {
            None | Some(JsonValue::Null) => {
                if self.required {
                    return Err(self.invalid(node_id, "is required".to_string()));
                }
                return Ok(());
            }
            Some(value) => value,
        };

        match &self.kind {
            SettingKind::Text => match value {
                JsonValue::String(_) => Ok(()),
                _ => Err(self.invalid(node_id, "must be a string".to_string())),
            },
            SettingKind::Choice(options) => match value.as_str() {
                Some(s) if options.contains(&s) => Ok(()),
                Some(s) => Err(self.invalid(
                    node_id,
                    format!("'{}' is not one of [{}]", s, options.join(", ")),
                )),
                None => Err(self.invalid(node_id, "must be a string".to_string())),
            },
            SettingKind::Integer { min, max } => {
                let parsed = match value {
                    JsonValue::Number(n) => n.as_i64(),
                    JsonValue::String(s) if s.trim().is_empty() => return Ok(()),
                    JsonValue::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                match parsed {
                    Some(n) if n >= *min && n <= *max => Ok(()),
                    Some(n) if *max == i64::MAX => {
                        Err(self.invalid(node_id, format!("{} must be at least {}", n, min)))
                    }
                    Some(n) => Err(self.invalid(
                        node_id,
                        format!("{} is outside the range [{}, {}]", n, min, max),
                    )),
                    None => Err(self.invalid(node_id, "must be an integer".to_string())),
                }
            }
        }
    }

    fn invalid(&self, node_id: &str, message: String) -> ValidationError {
        ValidationError::InvalidSetting {
            node_id: node_id.to_string(),
            setting: self.key.to_string(),
            message,
        }
    }
}

/// Reads a string setting. Non-string values read as absent; type errors
/// are the validator's job.
pub fn text_setting<'a>(settings: &'a Settings, key: &str) -> Option<&'a str> {
    settings.get(key).and_then(|v| v.as_str())
}

/// Reads an integer setting. Accepts JSON numbers and numeric strings;
/// null, blank, and unparseable values read as absent.
pub fn integer_setting(settings: &Settings, key: &str) -> Option<i64> {
    match settings.get(key)? {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
