use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, NameChange},
};
use entity::user_role::Role;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_auth_user;

fn user_params(surname: &str, name: &str) -> CreateUserParams {
    CreateUserParams {
        surname: surname.to_string(),
        name: name.to_string(),
        patronymic: String::new(),
        credentials: None,
        role: None,
    }
}
