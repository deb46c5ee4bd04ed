//! Emergency alerts
//!
//! A small fixed vocabulary of emergency vehicle dispatches; only the
//! unresolved count participates in the dashboard view.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::types::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Ambulance,
    FireTruck,
    Police,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Responding,
    Resolved,
}

/// An emergency vehicle dispatch in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    /// Stable unique identifier, e.g. "EM-001"
    pub id: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub location: Place,
    pub destination: Place,
    pub status: AlertStatus,
    pub timestamp: SystemTime,
    /// Estimated arrival in minutes, when known
    pub eta_minutes: Option<u32>,
}

impl EmergencyAlert {
    pub fn is_unresolved(&self) -> bool {
        self.status != AlertStatus::Resolved
    }
}

/// Count alerts that are still active or responding
pub fn count_unresolved(alerts: &[EmergencyAlert]) -> usize {
    alerts.iter().filter(|a| a.is_unresolved()).count()
}
