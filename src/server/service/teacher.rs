use entity::user_role::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{teacher::TeacherRepository, user::UserRepository},
    error::AppError,
    model::{
        teacher::{CreateTeacherParams, Teacher, UpdateTeacherParams},
        user::{CreateUserParams, NameChange},
    },
    util::{name::required, password::hash_password},
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a teacher, optionally with credentials and the teacher role.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - Created teacher
    /// - `Err(AppError::BadRequest)` - Blank surname or name, or only one of login/password given
    /// - `Err(AppError::Conflict)` - A user with this full name exists, or the login is taken
    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, AppError> {
        let surname = required("surname", &params.surname)?;
        let name = required("name", &params.name)?;
        let patronymic = params.patronymic.trim().to_string();

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .full_name_exists(&surname, &name, &patronymic, None)
            .await?
        {
            return Err(AppError::Conflict(
                "User with the same surname, name and patronymic already exists".to_string(),
            ));
        }

        let credentials = match (params.login, params.password) {
            (Some(login), Some(password)) => {
                if user_repo.login_exists(&login).await? {
                    return Err(AppError::Conflict(format!(
                        "Login '{}' is already taken",
                        login
                    )));
                }
                Some((login, hash_password(&password)?))
            }
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "Login and password must be provided together".to_string(),
                ))
            }
        };
        let role = credentials.as_ref().map(|_| Role::Teacher);

        let teacher = TeacherRepository::new(self.db)
            .create(CreateUserParams {
                surname,
                name,
                patronymic,
                credentials,
                role,
            })
            .await?;

        Ok(teacher)
    }

    pub async fn get_all(&self, group_id: Option<i32>) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all(group_id).await?)
    }

    pub async fn get_by_id(&self, teacher_id: i32) -> Result<Option<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).find_by_id(teacher_id).await?)
    }

    /// Updates the given name parts of a teacher.
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - Updated teacher
    /// - `Ok(None)` - Teacher not found
    /// - `Err(AppError::BadRequest)` - Blank surname or name
    /// - `Err(AppError::Conflict)` - Another user already has the resulting full name
    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Option<Teacher>, AppError> {
        let teacher_repo = TeacherRepository::new(self.db);

        let Some(current) = teacher_repo.find_by_id(params.teacher_id).await? else {
            return Ok(None);
        };

        let change = NameChange {
            surname: params
                .surname
                .map(|s| required("surname", &s))
                .transpose()?,
            name: params.name.map(|n| required("name", &n)).transpose()?,
            patronymic: params.patronymic.map(|p| p.trim().to_string()),
        };

        let user_repo = UserRepository::new(self.db);
        if user_repo
            .full_name_exists(
                change.surname.as_deref().unwrap_or(&current.surname),
                change.name.as_deref().unwrap_or(&current.name),
                change.patronymic.as_deref().unwrap_or(&current.patronymic),
                Some(params.teacher_id),
            )
            .await?
        {
            return Err(AppError::Conflict(
                "User with the same surname, name and patronymic already exists".to_string(),
            ));
        }

        let user = user_repo.update_names(params.teacher_id, change).await?;

        Ok(user.map(Teacher::from_entity))
    }

    /// Deletes a teacher with their user account; assignments and lessons cascade.
    pub async fn delete(&self, teacher_id: i32) -> Result<bool, AppError> {
        if !TeacherRepository::new(self.db).exists(teacher_id).await? {
            return Ok(false);
        }

        Ok(UserRepository::new(self.db).delete(teacher_id).await?)
    }
}
