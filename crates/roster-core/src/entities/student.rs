//! Student entity - the representative record of the student-records service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Student gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "other")]
    Other,
}

impl Gender {
    /// Wire/storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

/// Validated and normalized input for a new student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    /// Already in canonical `+<digits>` form
    pub phone: String,
}

/// Partial update: only `Some` slots overwrite the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
}

impl StudentPatch {
    /// Whether the patch touches a field the email is derived from
    pub fn touches_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.phone.is_none()
    }
}

/// Student entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Student {
    /// Create an active student from validated input and a derived email
    pub fn new(id: RecordId, draft: NewStudent, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
            gender: draft.gender,
            phone: draft.phone,
            email,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// Merge the supplied fields of `patch` into this record, field by field.
    ///
    /// Does not touch `email` or `updated_at`; callers re-derive the email when
    /// [`StudentPatch::touches_name`] is true and then call [`Student::touch`].
    pub fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
            first_name,
            last_name,
            age,
            gender,
            phone,
        } = patch;

        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
    }

    /// Refresh `updated_at`, never moving it before `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Mark the record inactive
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.touch(now);
    }
}
