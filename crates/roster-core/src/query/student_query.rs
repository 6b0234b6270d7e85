//! Student search: conjunctive filters, allow-listed sorting, offset pagination

use std::cmp::Ordering;

use crate::entities::{Gender, Student};
use crate::error::DomainError;

/// Sortable student fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Age,
}

impl SortField {
    /// Look a field up by its API name. Unknown names yield `None`, which
    /// disables sorting rather than failing the search.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "age" => Some(Self::Age),
            _ => None,
        }
    }

    /// API name of the field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Age => "age",
        }
    }

    /// Ascending comparison; text fields ignore case
    fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            Self::FirstName => cmp_ignore_case(&a.first_name, &b.first_name),
            Self::LastName => cmp_ignore_case(&a.last_name, &b.last_name),
            Self::Email => cmp_ignore_case(&a.email, &b.email),
            Self::Age => a.age.cmp(&b.age),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Descending only when the value is `"desc"` in any case; anything else,
    /// including a missing value, sorts ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Conjunctive student filters. Empty text filters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl StudentFilter {
    /// Check whether a student satisfies every supplied filter
    pub fn matches(&self, student: &Student) -> bool {
        let text = |filter: &Option<String>, value: &str| match filter.as_deref() {
            Some(needle) if !needle.is_empty() => contains_ignore_case(value, needle),
            _ => true,
        };

        text(&self.first_name, &student.first_name)
            && text(&self.last_name, &student.last_name)
            && text(&self.email, &student.email)
            && self.gender.map_or(true, |g| student.gender == g)
            && self.min_age.map_or(true, |min| student.age >= min)
            && self.max_age.map_or(true, |max| student.age <= max)
    }
}

/// A full search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    pub filter: StudentFilter,
    /// `None` keeps insertion order
    pub sort: Option<(SortField, SortOrder)>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self {
            filter: StudentFilter::default(),
            sort: Some((SortField::FirstName, SortOrder::Asc)),
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl StudentQuery {
    /// Page size used when none is given
    pub const DEFAULT_LIMIT: usize = 10;
    /// Largest accepted page size
    pub const MAX_LIMIT: usize = 100;

    /// Run filter, then a stable sort, then `skip`/`limit` over `records`.
    ///
    /// `records` must already be restricted to active students. An empty page
    /// is reported as [`DomainError::NoMatchingStudents`].
    pub fn execute<I>(&self, records: I) -> Result<Vec<Student>, DomainError>
    where
        I: IntoIterator<Item = Student>,
    {
        let mut matches: Vec<Student> = records
            .into_iter()
            .filter(|s| self.filter.matches(s))
            .collect();

        if let Some((field, order)) = self.sort {
            match order {
                SortOrder::Asc => matches.sort_by(|a, b| field.compare(a, b)),
                SortOrder::Desc => matches.sort_by(|a, b| field.compare(b, a)),
            }
        }

        let page: Vec<Student> = matches
            .into_iter()
            .skip(self.skip)
            .take(self.limit)
            .collect();

        if page.is_empty() {
            return Err(DomainError::NoMatchingStudents);
        }
        Ok(page)
    }
}
