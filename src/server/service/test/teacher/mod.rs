use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::teacher::{CreateTeacherParams, UpdateTeacherParams},
    service::teacher::TeacherService,
};

mod create;
mod update;

fn teacher_params(surname: &str, name: &str) -> CreateTeacherParams {
    CreateTeacherParams {
        surname: surname.to_string(),
        name: name.to_string(),
        patronymic: String::new(),
        login: None,
        password: None,
    }
}
