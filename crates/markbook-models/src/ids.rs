//! Strongly-typed ID newtypes for academic records.
//!
//! IDs are opaque strings assigned by whichever system owns the record. The
//! newtypes only stop a `CourseId` from being passed where a `StudentId` is
//! expected; no format is imposed.
//!
//! # Example
//!
//! ```
//! use markbook_models::ids::{CourseId, StudentId};
//!
//! fn enrol(student: &StudentId, course: &CourseId) -> String {
//!     format!("{student} -> {course}")
//! }
//!
//! let student = StudentId::new("s1");
//! let course = CourseId::new("c1");
//! assert_eq!(enrol(&student, &course), "s1 -> c1");
//! // enrol(&course, &student); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the ID is empty or whitespace only.
            #[inline]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Student records.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Course records.
    CourseId
);

define_id!(
    /// Strongly-typed ID for Exam records.
    ExamId
);

define_id!(
    /// Strongly-typed ID for Marks records.
    MarksId
);

define_id!(
    /// Strongly-typed ID for Grade records.
    GradeId
);

define_id!(
    /// Strongly-typed ID for revaluation requests.
    RevaluationId
);
