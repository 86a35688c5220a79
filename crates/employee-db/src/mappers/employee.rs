//! Employee entity <-> model mapper

use employee_core::{Employee, EmployeeId, LocationUpdate, NewEmployee};

use crate::models::EmployeeModel;

/// Convert EmployeeModel to Employee entity
impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee {
            id: EmployeeId::new(model.id),
            name: model.name,
            location: model.location,
        }
    }
}

/// Bind values for an INSERT
pub struct EmployeeInsert<'a> {
    pub name: &'a str,
    pub location: &'a str,
}

impl<'a> EmployeeInsert<'a> {
    pub fn new(employee: &'a NewEmployee) -> Self {
        Self {
            name: &employee.name,
            location: &employee.location,
        }
    }
}

/// Bind values for a location UPDATE keyed on name
pub struct EmployeeLocationUpdate<'a> {
    pub name: &'a str,
    pub location: &'a str,
}

impl<'a> EmployeeLocationUpdate<'a> {
    pub fn new(update: &'a LocationUpdate) -> Self {
        Self {
            name: &update.name,
            location: &update.location,
        }
    }
}
