//! Staff Model (员工)

use serde::{Deserialize, Serialize};

/// Department / role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    FrontDesk,
    Housekeeping,
    Maintenance,
    Restaurant,
    Kitchen,
    Management,
}

/// Availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    #[default]
    Available,
    Busy,
    Break,
    OffDuty,
}

/// Work shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Night,
}

/// Staff member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    #[serde(default)]
    pub status: StaffStatus,
    pub shift: ShiftKind,
    /// Tasks completed this period
    #[serde(default)]
    pub tasks_completed: u32,
    /// Running average task time in minutes
    #[serde(default)]
    pub average_task_minutes: f64,
}

/// Update staff status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffStatusUpdate {
    pub status: StaffStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_serde() {
        let json = r#"{
            "id": "s1",
            "name": "Lucia",
            "email": "lucia@example.com",
            "phone": "600000000",
            "role": "front-desk",
            "shift": "night"
        }"#;
        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.role, StaffRole::FrontDesk);
        assert_eq!(staff.status, StaffStatus::Available);
        assert_eq!(staff.shift, ShiftKind::Night);
        assert_eq!(staff.tasks_completed, 0);

        let out = serde_json::to_string(&StaffStatus::OffDuty).unwrap();
        assert_eq!(out, "\"off-duty\"");
    }
}
