//! Authenticated user model and auth operation parameters.

use entity::user_role::Role;

use crate::model::auth::{
    AuthUserDto, CurrentUserDto, LoginDto, LoginResponseDto, RegisterDto, RoleDto,
};

/// A user who holds credentials, with their roles.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: i32,
    pub login: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub roles: Vec<Role>,
}

impl AuthUser {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `user` - The user row
    /// - `credentials` - The user's credentials row
    /// - `roles` - Role rows granted to the user
    pub fn from_entity(
        user: entity::user::Model,
        credentials: entity::credentials::Model,
        roles: Vec<entity::user_role::Model>,
    ) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().map(|r| r.role).collect();
        roles.sort_by_key(|role| role_rank(*role));
        roles.dedup();

        Self {
            user_id: user.user_id,
            login: credentials.login,
            surname: user.surname,
            name: user.name,
            patronymic: user.patronymic,
            roles,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Admins and teachers.
    pub fn is_staff(&self) -> bool {
        self.is_admin() || self.roles.contains(&Role::Teacher)
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.user_id,
            login: self.login,
            roles: self.roles.into_iter().map(role_to_dto).collect(),
        }
    }

    pub fn into_current_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.user_id,
            login: self.login,
            roles: self.roles.into_iter().map(role_to_dto).collect(),
            surname: self.surname,
            name: self.name,
            patronymic: self.patronymic,
        }
    }
}

fn role_rank(role: Role) -> u8 {
    match role {
        Role::Admin => 0,
        Role::Teacher => 1,
    }
}

pub fn role_to_dto(role: Role) -> RoleDto {
    match role {
        Role::Admin => RoleDto::Admin,
        Role::Teacher => RoleDto::Teacher,
    }
}

pub fn role_from_dto(role: RoleDto) -> Role {
    match role {
        RoleDto::Admin => Role::Admin,
        RoleDto::Teacher => Role::Teacher,
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub login: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            login: dto.login.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Issued token together with the user it belongs to.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub user: AuthUser,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            access_token: self.access_token,
            user: self.user.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub login: String,
    pub password: String,
    pub role: Role,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            login: dto.login.trim().to_string(),
            password: dto.password,
            role: role_from_dto(dto.role),
            surname: dto.surname.trim().to_string(),
            name: dto.name.trim().to_string(),
            patronymic: dto.patronymic.trim().to_string(),
        }
    }
}

/// Parameters for inserting a user row with optional credentials and role.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    /// Login and password hash.
    pub credentials: Option<(String, String)>,
    pub role: Option<Role>,
}

/// Name parts written to a user row; `None` leaves the part unchanged.
#[derive(Debug, Clone, Default)]
pub struct NameChange {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
}
