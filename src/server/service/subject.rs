use sea_orm::DatabaseConnection;

use crate::server::{
    data::subject::SubjectRepository,
    error::AppError,
    model::subject::{CreateSubjectParams, Subject, UpdateSubjectParams},
    util::name::required,
};

pub struct SubjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSubjectParams) -> Result<Subject, AppError> {
        let name = required("name", &params.name)?;

        let subject = SubjectRepository::new(self.db).create(name).await?;

        Ok(Subject::from_entity(subject))
    }

    pub async fn get_all(&self) -> Result<Vec<Subject>, AppError> {
        let subjects = SubjectRepository::new(self.db).get_all().await?;

        Ok(subjects.into_iter().map(Subject::from_entity).collect())
    }

    pub async fn get_by_id(&self, subject_id: i32) -> Result<Option<Subject>, AppError> {
        let subject = SubjectRepository::new(self.db).find_by_id(subject_id).await?;

        Ok(subject.map(Subject::from_entity))
    }

    pub async fn update(&self, params: UpdateSubjectParams) -> Result<Option<Subject>, AppError> {
        let name = params.name.map(|n| required("name", &n)).transpose()?;

        let subject = SubjectRepository::new(self.db)
            .update(params.subject_id, name)
            .await?;

        Ok(subject.map(Subject::from_entity))
    }

    /// Deletes a subject; assignments teaching it cascade.
    pub async fn delete(&self, subject_id: i32) -> Result<bool, AppError> {
        Ok(SubjectRepository::new(self.db).delete(subject_id).await?)
    }
}
