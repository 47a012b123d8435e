use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;
use sea_orm::{ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::attendance::AttendanceRepository,
    model::attendance::{JournalFilter, StudentStatus},
};

mod create_many;
mod get_entries;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
