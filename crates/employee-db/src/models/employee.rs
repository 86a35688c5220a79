//! Employee database model

use sqlx::FromRow;

/// Database model for the `TestSchema.Employees` table
///
/// PostgreSQL folds the unquoted column names `Id`, `Name`, `Location` to lower case.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeModel {
    pub id: i32,
    pub name: String,
    pub location: String,
}
