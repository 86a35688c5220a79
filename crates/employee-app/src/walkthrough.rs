//! CRUD walkthrough
//!
//! Runs Create → Read → Update → Delete once against whatever repository the
//! service wraps, writing one status line per result. A failed Create, Read,
//! or Update aborts the walkthrough with an error; a failed Delete is printed
//! and the walkthrough still completes. A failed ping is labelled as such,
//! whichever step it preceded.

use std::fmt;
use std::io::Write;

use employee_common::{AppError, AppResult, WalkthroughConfig};
use employee_core::EmployeeId;
use employee_service::{EmployeeService, ServiceError};
use tracing::{error, warn};

/// One walkthrough step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Create,
    Read,
    Update,
    Delete,
}

impl Step {
    /// Label attached to this step's errors
    pub fn failure_context(self) -> &'static str {
        match self {
            Self::Create => "Error inserting new row",
            Self::Read => "Error reading rows",
            Self::Update => "Error updating row",
            Self::Delete => "Error deleting row",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// What a completed walkthrough did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughReport {
    pub inserted_id: EmployeeId,
    pub rows_read: usize,
    pub updated_ids: Vec<EmployeeId>,
    /// `None` when the delete failed and was reported instead
    pub deleted: Option<u64>,
}

/// Sequential CRUD walkthrough over an employee service
pub struct Walkthrough<'a> {
    service: &'a EmployeeService,
    sample: &'a WalkthroughConfig,
}

impl<'a> Walkthrough<'a> {
    pub fn new(service: &'a EmployeeService, sample: &'a WalkthroughConfig) -> Self {
        Self { service, sample }
    }

    /// Run every step in order, writing status lines to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> AppResult<WalkthroughReport> {
        let sample = self.sample;

        let inserted_id = self
            .service
            .create_employee(&sample.name, &sample.location)
            .await
            .map_err(|e| abort(Step::Create, e))?;
        writeln!(out, "Inserted ID: {inserted_id} successfully.")?;

        let employees = self
            .service
            .read_employees()
            .await
            .map_err(|e| abort(Step::Read, e))?;
        for employee in &employees {
            writeln!(out, "{employee}")?;
        }
        writeln!(out, "Read {} rows successfully.", employees.len())?;

        let updated_ids = self
            .service
            .update_employee(&sample.name, &sample.new_location)
            .await
            .map_err(|e| abort(Step::Update, e))?;
        if updated_ids.is_empty() {
            writeln!(out, "Updated 0 rows successfully.")?;
        }
        for id in &updated_ids {
            writeln!(out, "Updated row with ID: {id} successfully.")?;
        }

        let deleted = match self.service.delete_employee(&sample.name).await {
            Ok(rows) => {
                writeln!(out, "Deleted {rows} rows successfully.")?;
                Some(rows)
            }
            Err(e) => {
                let err = labelled(Step::Delete, e);
                warn!(step = %Step::Delete, error = %err, "Walkthrough step failed, continuing");
                writeln!(out, "{err}")?;
                None
            }
        };

        Ok(WalkthroughReport {
            inserted_id,
            rows_read: employees.len(),
            updated_ids,
            deleted,
        })
    }
}

const PING_FAILURE_CONTEXT: &str = "Error pinging database";

fn labelled(step: Step, e: ServiceError) -> AppError {
    let context = if e.is_ping_failure() {
        PING_FAILURE_CONTEXT
    } else {
        step.failure_context()
    };
    AppError::from(e).in_step(context)
}

fn abort(step: Step, e: ServiceError) -> AppError {
    let err = labelled(step, e);
    error!(%step, error = %err, "Walkthrough step failed, aborting");
    err
}
