use crate::schema::settings::SettingSpec;
use crate::value::ValueType;
use serde::Serialize;

/// Immutable, registry-held descriptor of a block kind.
///
/// This is the palette entry a host renders from: port layout at default
/// settings plus the declarative setting schema. Kinds with dynamically
/// sized ports (the Combiner) report their default port count here; the
/// live port set is always derived from a node's actual settings.
#[derive(Debug, Clone, Serialize)]
pub struct BlockKind {
    pub id: String,
    pub input_ports: Vec<PortSpec>,
    pub output_ports: Vec<PortSpec>,
    pub settings: Vec<SettingSpec>,
}

/// A named input or output slot on a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortSpec {
    pub name: String,
    pub value_type: ValueType,
}

impl PortSpec {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Text,
        }
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::Number,
        }
    }
}
