use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Read-only projection of one provider/service row.
///
/// Field names on the wire are the backing column identifiers, so a row
/// mapping deserializes straight into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(rename = "rndrng_prvdr_first_name", default)]
    pub first_name: Option<String>,

    #[serde(rename = "rndrng_prvdr_last_org_name", default)]
    pub last_or_org_name: Option<String>,

    #[serde(rename = "rndrng_prvdr_crdntls", default)]
    pub credentials: Option<String>,

    #[serde(rename = "rndrng_prvdr_st1", default)]
    pub street_address: Option<String>,

    #[serde(rename = "rndrng_prvdr_city", default)]
    pub city: Option<String>,

    #[serde(rename = "rndrng_prvdr_state_abrvtn", default)]
    pub state: Option<String>,

    #[serde(
        rename = "rndrng_prvdr_zip5",
        default,
        deserialize_with = "text_or_number"
    )]
    pub postal_code: Option<String>,

    #[serde(rename = "rndrng_prvdr_type", default)]
    pub provider_type: Option<String>,

    #[serde(rename = "hcpcs_desc", default)]
    pub service_description: Option<String>,

    #[serde(rename = "rndrng_npi", default, deserialize_with = "text_or_number")]
    pub npi: Option<String>,
}

/// Accept identifier columns stored either as text or as integers
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) => Ok(Some(s)),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
