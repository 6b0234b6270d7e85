//! Deterministic student email derivation

use std::collections::HashSet;

use crate::value_objects::RecordId;

/// Domain used when no other one is configured
pub const DEFAULT_EMAIL_DOMAIN: &str = "student-university.co.uk";

/// The set of addresses already taken, minus the one being re-derived.
///
/// Built from every stored record, active or not, so a soft-deleted student
/// still holds on to its address.
#[derive(Debug, Clone)]
pub struct EmailDirectory<'a> {
    domain: &'a str,
    taken: HashSet<&'a str>,
}

impl<'a> EmailDirectory<'a> {
    /// Collect taken addresses, skipping the record identified by `exclude_id`
    pub fn new<I>(domain: &'a str, records: I, exclude_id: Option<RecordId>) -> Self
    where
        I: IntoIterator<Item = (RecordId, &'a str)>,
    {
        let taken = records
            .into_iter()
            .filter(|(id, _)| Some(*id) != exclude_id)
            .map(|(_, email)| email)
            .collect();

        Self { domain, taken }
    }

    /// Check whether an address is already in use
    pub fn is_taken(&self, email: &str) -> bool {
        self.taken.contains(email)
    }

    /// First free address for the given names: `first.last@domain`, then
    /// `first.last2@domain`, `first.last3@domain`, ...
    pub fn unique_for(&self, first_name: &str, last_name: &str) -> String {
        let local = format!(
            "{}.{}",
            first_name.trim().to_lowercase(),
            last_name.trim().to_lowercase()
        );

        let mut email = format!("{local}@{}", self.domain);
        let mut counter = 1u32;
        while self.is_taken(&email) {
            counter += 1;
            email = format!("{local}{counter}@{}", self.domain);
        }
        email
    }
}

/// Derive a unique email for a student.
///
/// Scans all `records` (including inactive ones) except `exclude_id`.
pub fn generate_unique_email<'a, I>(
    first_name: &str,
    last_name: &str,
    exclude_id: Option<RecordId>,
    domain: &'a str,
    records: I,
) -> String
where
    I: IntoIterator<Item = (RecordId, &'a str)>,
{
    EmailDirectory::new(domain, records, exclude_id).unique_for(first_name, last_name)
}
