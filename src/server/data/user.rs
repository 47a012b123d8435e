//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for user rows, their credentials and
//! roles. Teacher and student repositories reuse `insert_user` so a person and their
//! role row are created in the same transaction.

use std::collections::HashMap;

use entity::user_role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    model::user::{AuthUser, CreateUserParams, NameChange},
    util::name::full_name,
};

/// Repository providing database operations for users and their credentials.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with optional credentials and role in one transaction.
    ///
    /// # Arguments
    /// - `params` - Name parts, optional login/password hash and optional role
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user row
    /// - `Err(DbErr)` - Database error, nothing is written
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, params).await?;

        txn.commit().await?;

        Ok(user)
    }

    /// Finds the credentials row for a login.
    pub async fn find_credentials_by_login(
        &self,
        login: &str,
    ) -> Result<Option<entity::credentials::Model>, DbErr> {
        entity::prelude::Credentials::find()
            .filter(entity::credentials::Column::Login.eq(login))
            .one(self.db)
            .await
    }

    /// Loads a user with credentials and roles.
    ///
    /// # Returns
    /// - `Ok(Some(AuthUser))` - User exists and has credentials
    /// - `Ok(None)` - No such user, or the user cannot sign in
    /// - `Err(DbErr)` - Database error
    pub async fn find_auth_user(&self, user_id: i32) -> Result<Option<AuthUser>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let Some(credentials) = entity::prelude::Credentials::find()
            .filter(entity::credentials::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(Some(AuthUser::from_entity(user, credentials, roles)))
    }

    pub async fn login_exists(&self, login: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Credentials::find()
            .filter(entity::credentials::Column::Login.eq(login))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another user already has exactly this full name.
    ///
    /// # Arguments
    /// - `surname`, `name`, `patronymic` - Name parts to match exactly
    /// - `exclude_user_id` - User ignored by the check, used when renaming
    pub async fn full_name_exists(
        &self,
        surname: &str,
        name: &str,
        patronymic: &str,
        exclude_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Surname.eq(surname))
            .filter(entity::user::Column::Name.eq(name))
            .filter(entity::user::Column::Patronymic.eq(patronymic));

        if let Some(user_id) = exclude_user_id {
            query = query.filter(entity::user::Column::UserId.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if at least one user holds the admin role.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the given name parts of a user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user row
    /// - `Ok(None)` - User not found
    /// - `Err(DbErr)` - Database error
    pub async fn update_names(
        &self,
        user_id: i32,
        change: NameChange,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        apply_name_change(self.db, user_id, change).await
    }

    /// Deletes a user; teacher, student, credential and session rows cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - User not found
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Full names (`"surname name patronymic"`) of the given users keyed by id.
    pub async fn full_names(&self, user_ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|u| (u.user_id, full_name(&u.surname, &u.name, &u.patronymic)))
            .collect())
    }
}

/// Inserts a user row plus optional credentials and role on the given connection.
///
/// Callers pass a transaction when the user is created together with other rows.
pub(crate) async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    params: CreateUserParams,
) -> Result<entity::user::Model, DbErr> {
    let user = entity::user::ActiveModel {
        surname: ActiveValue::Set(params.surname),
        name: ActiveValue::Set(params.name),
        patronymic: ActiveValue::Set(params.patronymic),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    if let Some((login, password_hash)) = params.credentials {
        entity::credentials::ActiveModel {
            user_id: ActiveValue::Set(user.user_id),
            login: ActiveValue::Set(login),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    if let Some(role) = params.role {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user.user_id),
            role: ActiveValue::Set(role),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(user)
}

/// Writes the given name parts of a user on the given connection.
///
/// Returns `None` when the user does not exist.
pub(crate) async fn apply_name_change<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    change: NameChange,
) -> Result<Option<entity::user::Model>, DbErr> {
    let Some(user) = entity::prelude::User::find_by_id(user_id).one(conn).await? else {
        return Ok(None);
    };

    let mut active: entity::user::ActiveModel = user.into();
    if let Some(surname) = change.surname {
        active.surname = ActiveValue::Set(surname);
    }
    if let Some(name) = change.name {
        active.name = ActiveValue::Set(name);
    }
    if let Some(patronymic) = change.patronymic {
        active.patronymic = ActiveValue::Set(patronymic);
    }

    Ok(Some(active.update(conn).await?))
}
