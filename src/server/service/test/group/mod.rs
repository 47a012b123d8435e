use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::group::{CreateGroupParams, UpdateGroupParams},
    service::group::GroupService,
};

mod attendance_summary;
mod create;

fn group_params(code: &str) -> CreateGroupParams {
    CreateGroupParams {
        group_code: code.to_string(),
        name: String::new(),
        specialty: String::new(),
        course: 1,
        year_of_entry: 2024,
    }
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}
