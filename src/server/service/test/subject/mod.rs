use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::subject::{CreateSubjectParams, UpdateSubjectParams},
    service::subject::SubjectService,
};

mod crud;
