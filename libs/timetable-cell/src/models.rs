use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One working day of a doctor in an office. Days run 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub id: i64,
    pub doctor_id: i64,
    pub office_id: i64,
    pub work_day: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkdayRequest {
    pub office_id: i64,
    pub work_day: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationQuery {
    pub doctor_id: Option<String>,
}

pub const FIRST_WORK_DAY: i32 = 1;
pub const LAST_WORK_DAY: i32 = 7;

pub fn is_valid_work_day(day: i32) -> bool {
    (FIRST_WORK_DAY..=LAST_WORK_DAY).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_day_bounds() {
        assert!(is_valid_work_day(1));
        assert!(is_valid_work_day(7));
        assert!(!is_valid_work_day(0));
        assert!(!is_valid_work_day(8));
    }
}
