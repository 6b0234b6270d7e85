//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use roster_core::{
    generate_unique_email, NewStudent, RecordId, RepoResult, Student, StudentPatch,
    StudentRepository,
};

use crate::mappers::StudentRow;
use crate::models::{EmailRowModel, StudentModel};

use super::db_now;
use super::error::{map_db_error, student_not_found};

/// PostgreSQL implementation of StudentRepository
///
/// Email derivation and the write that stores it run in one transaction
/// holding a `SHARE ROW EXCLUSIVE` table lock, so concurrent writers cannot
/// pick the same address.
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
    email_domain: String,
}

impl PgStudentRepository {
    /// Create a new PgStudentRepository
    pub fn new(pool: PgPool, email_domain: impl Into<String>) -> Self {
        Self {
            pool,
            email_domain: email_domain.into(),
        }
    }

    async fn lock_table(conn: &mut PgConnection) -> RepoResult<()> {
        sqlx::query("LOCK TABLE students IN SHARE ROW EXCLUSIVE MODE")
            .execute(conn)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    async fn unique_email(
        &self,
        conn: &mut PgConnection,
        first_name: &str,
        last_name: &str,
        exclude_id: Option<RecordId>,
    ) -> RepoResult<String> {
        // Inactive rows keep their addresses reserved.
        let rows = sqlx::query_as::<_, EmailRowModel>("SELECT id, email FROM students")
            .fetch_all(conn)
            .await
            .map_err(map_db_error)?;

        Ok(generate_unique_email(
            first_name,
            last_name,
            exclude_id,
            &self.email_domain,
            rows.iter()
                .map(|row| (RecordId::from_uuid(row.id), row.email.as_str())),
        ))
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, first_name, last_name, age, gender, phone, email,
                   created_at, updated_at, is_active
            FROM students
            WHERE id = $1 AND is_active
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Student::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, first_name, last_name, age, gender, phone, email,
                   created_at, updated_at, is_active
            FROM students
            WHERE is_active
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Student::try_from).collect()
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewStudent) -> RepoResult<Student> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::lock_table(&mut tx).await?;

        let email = self
            .unique_email(&mut tx, &draft.first_name, &draft.last_name, None)
            .await?;
        let student = Student::new(RecordId::new(), draft, email, db_now());
        let row = StudentRow::new(&student);

        sqlx::query(
            r"
            INSERT INTO students (id, first_name, last_name, age, gender, phone, email,
                                  created_at, updated_at, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(row.id)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.age)
        .bind(row.gender)
        .bind(row.phone)
        .bind(row.email)
        .bind(student.created_at)
        .bind(student.updated_at)
        .bind(student.is_active)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(student_id = %student.id, email = %student.email, "Student inserted");
        Ok(student)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: RecordId, patch: StudentPatch) -> RepoResult<Student> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let touches_name = patch.touches_name();

        // Table lock first: taking it after the row lock could deadlock with a
        // concurrent insert.
        if touches_name {
            Self::lock_table(&mut tx).await?;
        }

        let model = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, first_name, last_name, age, gender, phone, email,
                   created_at, updated_at, is_active
            FROM students
            WHERE id = $1 AND is_active
            FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| student_not_found(id))?;

        let mut student = Student::try_from(model)?;
        student.apply(patch);
        if touches_name {
            student.email = self
                .unique_email(&mut tx, &student.first_name, &student.last_name, Some(id))
                .await?;
        }
        student.touch(db_now());

        let row = StudentRow::new(&student);
        sqlx::query(
            r"
            UPDATE students
            SET first_name = $2, last_name = $3, age = $4, gender = $5, phone = $6,
                email = $7, updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(row.id)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.age)
        .bind(row.gender)
        .bind(row.phone)
        .bind(row.email)
        .bind(student.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(student)
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: RecordId) -> RepoResult<Student> {
        let model = sqlx::query_as::<_, StudentModel>(
            r"
            UPDATE students
            SET is_active = FALSE, updated_at = GREATEST($2, created_at)
            WHERE id = $1 AND is_active
            RETURNING id, first_name, last_name, age, gender, phone, email,
                      created_at, updated_at, is_active
            ",
        )
        .bind(id.into_inner())
        .bind(db_now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| student_not_found(id))?;

        Student::try_from(model)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

