//! Student service
//!
//! Handles student records: CRUD, soft delete, and search.

use roster_core::{Gender, NewStudent, RecordId, StudentPatch, StudentQuery};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateStudentRequest, SearchStudentsQuery, StudentResponse, UpdateStudentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Student service
pub struct StudentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StudentService<'a> {
    /// Create a new StudentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all active students in insertion order
    #[instrument(skip(self))]
    pub async fn list_students(&self) -> ServiceResult<Vec<StudentResponse>> {
        let students = self.ctx.student_repo().list_active().await?;
        Ok(students.iter().map(StudentResponse::from).collect())
    }

    /// Get an active student by ID
    #[instrument(skip(self))]
    pub async fn get_student(&self, student_id: RecordId) -> ServiceResult<StudentResponse> {
        let student = self
            .ctx
            .student_repo()
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", student_id.to_string()))?;

        Ok(StudentResponse::from(&student))
    }

    /// Create a student; the store derives the email
    #[instrument(skip(self, request))]
    pub async fn create_student(
        &self,
        request: CreateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request.validate()?;

        let student = self
            .ctx
            .student_repo()
            .create(NewStudent::from(request))
            .await?;

        info!(student_id = %student.id, email = %student.email, "Student created");
        Ok(StudentResponse::from(&student))
    }

    /// Apply a partial update to an active student
    #[instrument(skip(self, request))]
    pub async fn update_student(
        &self,
        student_id: RecordId,
        request: UpdateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request.validate()?;

        let student = self
            .ctx
            .student_repo()
            .update(student_id, StudentPatch::from(request))
            .await?;

        info!(student_id = %student.id, "Student updated");
        Ok(StudentResponse::from(&student))
    }

    /// Soft delete an active student, returning the deactivated record
    #[instrument(skip(self))]
    pub async fn delete_student(&self, student_id: RecordId) -> ServiceResult<StudentResponse> {
        let student = self.ctx.student_repo().soft_delete(student_id).await?;

        info!(student_id = %student.id, "Student deactivated");
        Ok(StudentResponse::from(&student))
    }

    /// Filter, sort, and page active students. An empty page is an error.
    #[instrument(skip(self))]
    pub async fn search_students(
        &self,
        query: SearchStudentsQuery,
    ) -> ServiceResult<Vec<StudentResponse>> {
        query.validate()?;

        let query = StudentQuery::from(query);
        let students = self.ctx.student_repo().list_active().await?;
        let page = query.execute(students)?;

        Ok(page.iter().map(StudentResponse::from).collect())
    }

    /// Insert the demo students through the normal create path
    #[instrument(skip(self))]
    pub async fn seed_demo_data(&self) -> ServiceResult<usize> {
        let demo = [
            ("Alice", "Johnson", 20, Gender::Female, "+1234567890"),
            ("Bob", "Smith", 22, Gender::Male, "+19876543210"),
        ];

        for (first_name, last_name, age, gender, phone) in demo {
            self.create_student(CreateStudentRequest {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                age,
                gender,
                phone: phone.to_string(),
            })
            .await?;
        }

        info!(count = demo.len(), "Demo students seeded");
        Ok(demo.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use roster_db::{InMemoryStudentRepository, InMemoryTaskRepository, InMemoryVehicleRepository};

    fn context() -> ServiceContext {
        ServiceContext::new(
            Arc::new(InMemoryStudentRepository::default()),
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryVehicleRepository::new()),
        )
    }

    fn request(first_name: &str, last_name: &str, age: i32) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            gender: Gender::Female,
            phone: "(123) 456-7890".to_string(),
        }
    }

    fn parse_id(response: &StudentResponse) -> RecordId {
        RecordId::parse(&response.id).unwrap()
    }

    #[tokio::test]
    async fn test_create_normalizes_phone_and_derives_email() {
        let ctx = context();
        let service = StudentService::new(&ctx);

        let first = service.create_student(request("Jane", "Doe", 25)).await.unwrap();
        let second = service.create_student(request("Jane", "Doe", 25)).await.unwrap();

        assert!(first.age > 18);
        assert_eq!(first.phone, "+1234567890");
        assert_eq!(first.email, "jane.doe@student-university.co.uk");
        assert_eq!(second.email, "jane.doe2@student-university.co.uk");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let ctx = context();
        let service = StudentService::new(&ctx);

        let err = service
            .create_student(request("Jane", "Doe", 18))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(service.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_student() {
        let ctx = context();
        let service = StudentService::new(&ctx);

        let err = service.get_student(RecordId::new()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_age_and_recomputes_email() {
        let ctx = context();
        let service = StudentService::new(&ctx);
        let created = service.create_student(request("Jane", "Doe", 25)).await.unwrap();

        let updated = service
            .update_student(
                parse_id(&created),
                UpdateStudentRequest {
                    first_name: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.age, 25);
        assert_eq!(updated.first_name, "X");
        assert_eq!(updated.email, "x.doe@student-university.co.uk");
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let ctx = context();
        let service = StudentService::new(&ctx);
        let created = service.create_student(request("Jane", "Doe", 25)).await.unwrap();
        let id = parse_id(&created);

        let deleted = service.delete_student(id).await.unwrap();
        assert!(!deleted.is_active);

        let err = service.delete_student(id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(service.get_student(id).await.is_err());
        assert!(service.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_pagination_and_not_found() {
        let ctx = context();
        let service = StudentService::new(&ctx);
        for i in 0..12 {
            service
                .create_student(request("Sam", &format!("Lee{i}"), 20 + i))
                .await
                .unwrap();
        }

        let page = service
            .search_students(SearchStudentsQuery {
                first_name: Some("sam".to_string()),
                skip: 10,
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let err = service
            .search_students(SearchStudentsQuery {
                min_age: Some(200),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No matching students found");
    }

    #[tokio::test]
    async fn test_search_skips_deactivated_students() {
        let ctx = context();
        let service = StudentService::new(&ctx);
        let jane = service.create_student(request("Jane", "Doe", 25)).await.unwrap();
        let john = service.create_student(request("John", "Doe", 30)).await.unwrap();

        let by_last_name = || SearchStudentsQuery {
            last_name: Some("doe".to_string()),
            ..Default::default()
        };

        service.delete_student(parse_id(&jane)).await.unwrap();
        let page = service.search_students(by_last_name()).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, john.id);

        service.delete_student(parse_id(&john)).await.unwrap();
        let err = service.search_students(by_last_name()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_search_unknown_sort_keeps_insertion_order() {
        let ctx = context();
        let service = StudentService::new(&ctx);
        for name in ["Zed", "Amy", "Mia"] {
            service.create_student(request(name, "Doe", 30)).await.unwrap();
        }

        let page = service
            .search_students(SearchStudentsQuery {
                sort_by: "zzz".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|s| s.first_name.as_str()).collect();
        assert_eq!(names, ["Zed", "Amy", "Mia"]);

        let page = service
            .search_students(SearchStudentsQuery::default())
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|s| s.first_name.as_str()).collect();
        assert_eq!(names, ["Amy", "Mia", "Zed"]);
    }

    #[tokio::test]
    async fn test_search_rejects_out_of_range_limit() {
        let ctx = context();
        let service = StudentService::new(&ctx);

        let err = service
            .search_students(SearchStudentsQuery {
                limit: 0,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[tokio::test]
    async fn test_seed_demo_data() {
        let ctx = context();
        let service = StudentService::new(&ctx);

        assert_eq!(service.seed_demo_data().await.unwrap(), 2);

        let students = service.list_students().await.unwrap();
        let emails: Vec<_> = students.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(
            emails,
            [
                "alice.johnson@student-university.co.uk",
                "bob.smith@student-university.co.uk"
            ]
        );
    }
}
