use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddressType {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "agent")]
    Agent,
    #[serde(rename = "conference")]
    Conference,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "extension")]
    Extension,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "sip")]
    Sip,
    #[serde(rename = "tel")]
    Tel,
}

/// destination or source of a call, a message, or an agent's contact
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "type", default)]
    pub type_: AddressType,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Address {
    pub fn new(type_: AddressType, target: &str) -> Self {
        Self {
            type_,
            target: target.to_string(),
            ..Default::default()
        }
    }
}
