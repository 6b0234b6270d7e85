//! Query engine - filter, sort, and paginate over active records

mod student_query;

pub use student_query::{SortField, SortOrder, StudentFilter, StudentQuery};
