use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, student::StudentRepository, user::UserRepository},
    error::AppError,
    model::{
        student::{CreateStudentParams, Student, UpdateStudentParams},
        user::{CreateUserParams, NameChange},
    },
    util::name::required,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student in a group.
    ///
    /// # Returns
    /// - `Ok(Student)` - Created student
    /// - `Err(AppError::BadRequest)` - Blank surname or name
    /// - `Err(AppError::NotFound)` - Group not found
    /// - `Err(AppError::Conflict)` - A user with this full name exists
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let surname = required("surname", &params.surname)?;
        let name = required("name", &params.name)?;
        let patronymic = params.patronymic.trim().to_string();

        if !GroupRepository::new(self.db).exists(params.group_id).await? {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        if UserRepository::new(self.db)
            .full_name_exists(&surname, &name, &patronymic, None)
            .await?
        {
            return Err(AppError::Conflict(
                "User with the same surname, name and patronymic already exists".to_string(),
            ));
        }

        let student_repo = StudentRepository::new(self.db);
        let student = student_repo
            .create(
                CreateUserParams {
                    surname,
                    name,
                    patronymic,
                    credentials: None,
                    role: None,
                },
                params.group_id,
            )
            .await?;

        student_repo
            .find_by_id(student.student_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Student not found after creation".to_string()))
    }

    pub async fn get_all(&self, group_id: Option<i32>) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all(group_id).await?)
    }

    pub async fn get_by_id(&self, student_id: i32) -> Result<Option<Student>, AppError> {
        Ok(StudentRepository::new(self.db).find_by_id(student_id).await?)
    }

    /// Updates name parts and/or the group of a student.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Updated student
    /// - `Ok(None)` - Student not found
    /// - `Err(AppError::NotFound)` - New group not found
    /// - `Err(AppError::Conflict)` - Another user already has the resulting full name
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let student_repo = StudentRepository::new(self.db);

        let Some(current) = student_repo.find_by_id(params.student_id).await? else {
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

        if let Some(group_id) = params.group_id {
            if !GroupRepository::new(self.db).exists(group_id).await? {
                return Err(AppError::NotFound("Group not found".to_string()));
            }
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo
            .full_name_exists(
                change.surname.as_deref().unwrap_or(&current.surname),
                change.name.as_deref().unwrap_or(&current.name),
                change.patronymic.as_deref().unwrap_or(&current.patronymic),
                Some(params.student_id),
            )
            .await?
        {
            return Err(AppError::Conflict(
                "User with the same surname, name and patronymic already exists".to_string(),
            ));
        }

        if student_repo
            .update(params.student_id, change, params.group_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        Ok(student_repo.find_by_id(params.student_id).await?)
    }

    /// Deletes a student with their user account; attendance records cascade.
    pub async fn delete(&self, student_id: i32) -> Result<bool, AppError> {
        if StudentRepository::new(self.db)
            .find_model(student_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        Ok(UserRepository::new(self.db).delete(student_id).await?)
    }
}
