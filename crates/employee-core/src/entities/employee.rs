//! Employee entity - a row of the `TestSchema.Employees` table

use std::fmt;

use validator::Validate;

/// Database-assigned employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(i32);

impl EmployeeId {
    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Employee entity as stored in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub location: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Location: {}",
            self.id, self.name, self.location
        )
    }
}

/// Insert payload for a new employee (the id is assigned by the database)
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Location must be 1-50 characters"))]
    pub location: String,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Location change for every employee with the given name
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LocationUpdate {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Location must be 1-50 characters"))]
    pub location: String,
}

impl LocationUpdate {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Name used to select employees for lookup or deletion
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NameQuery {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
}

impl NameQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
