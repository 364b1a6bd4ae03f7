use rackforge_common::DocumentFormat;
use rackforge_inventory::InventoryOptions;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub inventory: InventoryOptions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Rule set used when `select` is run without `--rules`
    #[serde(default)]
    pub rules: Option<PathBuf>,

    /// Output format for selected settings (json or yaml)
    #[serde(
        default,
        deserialize_with = "deserialize_format",
        serialize_with = "serialize_format"
    )]
    pub format: Option<DocumentFormat>,
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<Option<DocumentFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| s.parse().map_err(serde::de::Error::custom))
        .transpose()
}

fn serialize_format<S>(format: &Option<DocumentFormat>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match format {
        Some(format) => serializer.serialize_some(&format.to_string()),
        None => serializer.serialize_none(),
    }
}
