//! In-memory implementation of StudentRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use roster_core::{
    generate_unique_email, DomainError, NewStudent, RecordId, RepoResult, Student, StudentPatch,
    StudentRepository, DEFAULT_EMAIL_DOMAIN,
};

use super::arena::RecordArena;

/// In-memory implementation of StudentRepository
///
/// Records are never physically removed; soft-deleted rows stay in the arena
/// and keep their email reserved.
pub struct InMemoryStudentRepository {
    records: RwLock<RecordArena<Student>>,
    email_domain: String,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_DOMAIN)
    }
}

impl InMemoryStudentRepository {
    /// Create an empty store issuing addresses under `email_domain`
    pub fn new(email_domain: impl Into<String>) -> Self {
        Self {
            records: RwLock::new(RecordArena::new()),
            email_domain: email_domain.into(),
        }
    }

    /// Number of records held, including inactive ones
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn unique_email(
        &self,
        records: &RecordArena<Student>,
        first_name: &str,
        last_name: &str,
        exclude_id: Option<RecordId>,
    ) -> String {
        generate_unique_email(
            first_name,
            last_name,
            exclude_id,
            &self.email_domain,
            records
                .iter()
                .map(|student| (student.id, student.email.as_str())),
        )
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>> {
        let records = self.records.read();
        Ok(records
            .get(id)
            .filter(|student| student.is_active)
            .cloned())
    }

    async fn list_active(&self) -> RepoResult<Vec<Student>> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|student| student.is_active)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewStudent) -> RepoResult<Student> {
        let mut records = self.records.write();

        let email = self.unique_email(&records, &draft.first_name, &draft.last_name, None);
        let student = Student::new(RecordId::new(), draft, email, Utc::now());

        if !records.push(student.clone()) {
            return Err(DomainError::InternalError(format!(
                "duplicate student id {}",
                student.id
            )));
        }

        debug!(student_id = %student.id, email = %student.email, "Student inserted");
        Ok(student)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: RecordId, patch: StudentPatch) -> RepoResult<Student> {
        let mut records = self.records.write();

        let mut student = records
            .get(id)
            .filter(|student| student.is_active)
            .cloned()
            .ok_or(DomainError::StudentNotFound(id))?;

        let touches_name = patch.touches_name();
        student.apply(patch);
        if touches_name {
            student.email =
                self.unique_email(&records, &student.first_name, &student.last_name, Some(id));
        }
        student.touch(Utc::now());

        let slot = records
            .get_mut(id)
            .ok_or(DomainError::StudentNotFound(id))?;
        *slot = student.clone();

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: RecordId) -> RepoResult<Student> {
        let mut records = self.records.write();

        let student = records
            .get_mut(id)
            .filter(|student| student.is_active)
            .ok_or(DomainError::StudentNotFound(id))?;
        student.deactivate(Utc::now());

        Ok(student.clone())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
