//! Student entity <-> model mapper

use roster_core::{DomainError, Gender, RecordId, Student};

use crate::models::StudentModel;

/// Convert StudentModel to Student entity
impl TryFrom<StudentModel> for Student {
    type Error = DomainError;

    fn try_from(model: StudentModel) -> Result<Self, Self::Error> {
        let gender = model
            .gender
            .parse::<Gender>()
            .map_err(DomainError::DatabaseError)?;

        Ok(Student {
            id: RecordId::from_uuid(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            age: model.age,
            gender,
            phone: model.phone,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_active: model.is_active,
        })
    }
}

/// Borrowed column values of a student, in table order
pub struct StudentRow<'a> {
    pub id: uuid::Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub age: i32,
    pub gender: &'static str,
    pub phone: &'a str,
    pub email: &'a str,
}

impl<'a> StudentRow<'a> {
    pub fn new(student: &'a Student) -> Self {
        Self {
            id: student.id.into_inner(),
            first_name: &student.first_name,
            last_name: &student.last_name,
            age: student.age,
            gender: student.gender.as_str(),
            phone: &student.phone,
            email: &student.email,
        }
    }
}
