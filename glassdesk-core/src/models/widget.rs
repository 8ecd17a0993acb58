//! Desktop widget descriptors.
use super::Position;
use crate::errors::DeskError;
use crate::snap::SnapZone;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration private to a widget kind. The shell never looks inside.
pub type WidgetData = serde_json::Map<String, serde_json::Value>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub(crate) fn generate() -> Self {
        Self(format!("widget-{}", uuid::Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Time,
    Notes,
    Status,
}

impl FromStr for WidgetKind {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(WidgetKind::Time),
            "notes" => Ok(WidgetKind::Notes),
            "status" => Ok(WidgetKind::Status),
            _ => Err(DeskError::UnknownWidgetKind(s.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescriptor {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub position: Position,
    /// Last zone the widget locked onto. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_zone: Option<SnapZone>,
    #[serde(default)]
    pub data: WidgetData,
}
