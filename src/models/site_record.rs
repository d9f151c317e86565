use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Migration state of a single site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SiteStatus {
    Complete,
    InProgress,
    /// Status field absent, not a string, or literally "pending"
    #[default]
    Pending,
    /// Any other status string. Counted as pending.
    Unrecognized(String),
}

impl SiteStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "complete" => SiteStatus::Complete,
            "in-progress" => SiteStatus::InProgress,
            "pending" => SiteStatus::Pending,
            other => SiteStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SiteStatus::Complete)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, SiteStatus::InProgress)
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, SiteStatus::Unrecognized(_))
    }
}

/// One entry of the `mappings` array.
///
/// Every field is optional in the source data; missing or ill-typed values
/// fall back to zero/empty instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteMigrationRecord {
    #[serde(default, deserialize_with = "status_from_value")]
    pub status: SiteStatus,

    #[serde(default, rename = "storageGB", deserialize_with = "storage_from_value")]
    pub storage_gb: f64,

    #[serde(default, rename = "metadata", deserialize_with = "libraries_from_metadata")]
    pub libraries: Vec<LibraryInfo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryInfo {
    pub item_count: u64,
}

impl LibraryInfo {
    fn from_value(value: &Value) -> Self {
        LibraryInfo {
            item_count: value.get("itemCount").and_then(Value::as_u64).unwrap_or(0),
        }
    }
}

impl SiteMigrationRecord {
    pub fn item_count(&self) -> u64 {
        self.libraries
            .iter()
            .fold(0u64, |acc, lib| acc.saturating_add(lib.item_count))
    }
}

fn status_from_value<'de, D>(deserializer: D) -> Result<SiteStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(SiteStatus::from_tag)
        .unwrap_or_default())
}

fn storage_from_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value.as_f64() {
        Some(gb) if gb >= 0.0 => Ok(gb),
        Some(gb) => {
            warn!("Ignoring negative storageGB value {}", gb);
            Ok(0.0)
        }
        None => Ok(0.0),
    }
}

fn libraries_from_metadata<'de, D>(deserializer: D) -> Result<Vec<LibraryInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .get("libraries")
        .and_then(Value::as_array)
        .map(|libs| libs.iter().map(LibraryInfo::from_value).collect())
        .unwrap_or_default())
}
