use entity::user_role::Role;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, RegisterParams},
    service::auth::AuthService,
    util::password::{hash_password, hash_token},
};


fn register_params(login: &str, password: &str, role: Role) -> RegisterParams {
    RegisterParams {
        login: login.to_string(),
        password: password.to_string(),
        role,
        surname: "Orlova".to_string(),
        name: "Irina".to_string(),
        patronymic: String::new(),
    }
}
