//! Staff status board (员工状态)

use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{StaffMember, StaffRole, StaffStatus};
use thiserror::Error;

use crate::money::{to_decimal, to_f64};

/// Longest task a single completion may report (one full shift)
pub const MAX_TASK_MINUTES: f64 = 12.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StaffError {
    #[error("Staff member not found: {0}")]
    StaffNotFound(String),

    #[error("Invalid task duration: {0} minutes")]
    InvalidTaskDuration(f64),
}

pub type StaffResult<T> = Result<T, StaffError>;

impl From<StaffError> for AppError {
    fn from(err: StaffError) -> Self {
        let message = err.to_string();
        match err {
            StaffError::StaffNotFound(id) => {
                AppError::with_message(ErrorCode::StaffNotFound, message)
                    .with_detail("staff_id", id)
            }
            StaffError::InvalidTaskDuration(minutes) => {
                AppError::with_message(ErrorCode::InvalidTaskDuration, message)
                    .with_detail("minutes", minutes)
            }
        }
    }
}

/// Any status may follow any other; only the value changes
pub fn update_staff_status(member: &StaffMember, status: StaffStatus) -> StaffMember {
    StaffMember {
        status,
        ..member.clone()
    }
}

/// Count one finished task and fold its duration into the running average
pub fn record_task_completion(member: &StaffMember, minutes: f64) -> StaffResult<StaffMember> {
    if !minutes.is_finite() || minutes <= 0.0 || minutes > MAX_TASK_MINUTES {
        return Err(StaffError::InvalidTaskDuration(minutes));
    }
    let done = Decimal::from(member.tasks_completed);
    let total = to_decimal(member.average_task_minutes) * done + to_decimal(minutes);
    let count = member.tasks_completed + 1;

    let mut updated = member.clone();
    updated.tasks_completed = count;
    updated.average_task_minutes = to_f64(total / Decimal::from(count));
    Ok(updated)
}

/// Staff count per status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffSummary {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub on_break: usize,
    pub off_duty: usize,
}

impl StaffSummary {
    /// Staff currently working a shift (not off duty)
    pub fn on_shift(&self) -> usize {
        self.total - self.off_duty
    }
}

pub fn staff_summary(staff: &[StaffMember]) -> StaffSummary {
    let mut summary = StaffSummary::default();
    for member in staff {
        summary.total += 1;
        match member.status {
            StaffStatus::Available => summary.available += 1,
            StaffStatus::Busy => summary.busy += 1,
            StaffStatus::Break => summary.on_break += 1,
            StaffStatus::OffDuty => summary.off_duty += 1,
        }
    }
    summary
}

/// Staff of one department
pub fn staff_by_role(staff: &[StaffMember], role: StaffRole) -> Vec<&StaffMember> {
    staff.iter().filter(|m| m.role == role).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ShiftKind;

    fn member(id: &str, role: StaffRole, status: StaffStatus) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: format!("Staff {id}"),
            email: format!("{id}@example.com"),
            phone: String::new(),
            role,
            status,
            shift: ShiftKind::Morning,
            tasks_completed: 0,
            average_task_minutes: 0.0,
        }
    }

    #[test]
    fn test_update_status() {
        let m = member("s1", StaffRole::Housekeeping, StaffStatus::Available);
        let busy = update_staff_status(&m, StaffStatus::Busy);
        assert_eq!(busy.status, StaffStatus::Busy);
        assert_eq!(m.status, StaffStatus::Available);
    }

    #[test]
    fn test_running_average() {
        let m = member("s1", StaffRole::Housekeeping, StaffStatus::Busy);
        let m = record_task_completion(&m, 30.0).unwrap();
        assert_eq!(m.tasks_completed, 1);
        assert_eq!(m.average_task_minutes, 30.0);
        let m = record_task_completion(&m, 20.0).unwrap();
        let m = record_task_completion(&m, 10.0).unwrap();
        assert_eq!(m.tasks_completed, 3);
        assert_eq!(m.average_task_minutes, 20.0);
    }

    #[test]
    fn test_rejects_bad_duration() {
        let m = member("s1", StaffRole::Kitchen, StaffStatus::Busy);
        for minutes in [0.0, -5.0, f64::NAN, MAX_TASK_MINUTES + 1.0] {
            assert!(record_task_completion(&m, minutes).is_err(), "{minutes}");
        }
        let app: AppError = StaffError::InvalidTaskDuration(-5.0).into();
        assert_eq!(app.code, ErrorCode::InvalidTaskDuration);
    }

    #[test]
    fn test_summary_and_roles() {
        let staff = vec![
            member("s1", StaffRole::FrontDesk, StaffStatus::Available),
            member("s2", StaffRole::Housekeeping, StaffStatus::Busy),
            member("s3", StaffRole::Housekeeping, StaffStatus::Break),
            member("s4", StaffRole::Kitchen, StaffStatus::OffDuty),
        ];
        let summary = staff_summary(&staff);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.on_break, 1);
        assert_eq!(summary.on_shift(), 3);
        assert_eq!(staff_by_role(&staff, StaffRole::Housekeeping).len(), 2);
    }
}
