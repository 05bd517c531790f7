//! Device rows (`devices` table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Retired,
    #[serde(other)]
    Unknown,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 4] = [
        DeviceStatus::Available,
        DeviceStatus::InUse,
        DeviceStatus::Maintenance,
        DeviceStatus::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Available => "available",
            DeviceStatus::InUse => "in_use",
            DeviceStatus::Maintenance => "maintenance",
            DeviceStatus::Retired => "retired",
            DeviceStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Available => "Available",
            DeviceStatus::InUse => "In Use",
            DeviceStatus::Maintenance => "Maintenance",
            DeviceStatus::Retired => "Retired",
            DeviceStatus::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .unwrap_or(DeviceStatus::Unknown)
    }
}

/// An inventory device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub device_name: String,
    pub device_type: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Device {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Table for Device {
    const NAME: &'static str = "devices";
    type Draft = NewDevice;
}

/// Insert payload for a device. Optional controls are sent as typed,
/// including empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewDevice {
    pub device_name: String,
    pub device_type: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub model: String,
    pub status: DeviceStatus,
    pub location: String,
    pub notes: String,
}

/// Projection used for dashboard stats (`select=status`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DeviceSummary {
    #[serde(default)]
    pub status: DeviceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_columns() {
        let json = serde_json::json!({
            "id": "5d1c0f9e-1111-4c5e-9d1e-1f2a3b4c5d6e",
            "device_name": "Laptop 14",
            "device_type": "laptop",
            "serial_number": null,
            "manufacturer": "Lenovo",
            "model": null,
            "status": "in_use",
            "location": null,
            "notes": null,
            "created_at": "2025-01-02T03:04:05Z"
        });
        let device: Device = serde_json::from_value(json).unwrap();
        assert_eq!(device.status, DeviceStatus::InUse);
        assert_eq!(device.manufacturer.as_deref(), Some("Lenovo"));
        assert!(device.serial_number.is_none());
    }

    #[test]
    fn test_default_draft_status() {
        let draft = NewDevice::default();
        assert_eq!(draft.status, DeviceStatus::Available);
        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload["status"], "available");
        assert_eq!(payload["notes"], "");
    }
}
