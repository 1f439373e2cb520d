//! Error types for constraint activation and configuration

use thiserror::Error;

/// Errors that can occur while installing or updating constraints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A required constraint conflicts with the constraints already active
    #[error("unable to satisfy {constraint}: conflicts with existing required constraints")]
    Unsatisfiable { constraint: String },

    /// The solver already holds this exact constraint
    #[error("duplicate constraint: {constraint}")]
    Duplicate { constraint: String },

    /// The engine owning the constraint's items no longer exists
    #[error("layout engine dropped before {constraint} could be installed")]
    EngineDropped { constraint: String },

    #[error("internal solver error: {0}")]
    Internal(String),
}

impl LayoutError {
    /// Convert a kasuari error into a LayoutError with context
    pub(crate) fn from_add(e: kasuari::AddConstraintError, constraint: &str) -> Self {
        match e {
            kasuari::AddConstraintError::UnsatisfiableConstraint => Self::Unsatisfiable {
                constraint: constraint.to_string(),
            },
            kasuari::AddConstraintError::DuplicateConstraint => Self::Duplicate {
                constraint: constraint.to_string(),
            },
            kasuari::AddConstraintError::InternalSolverError(msg) => {
                Self::Internal(format!("adding {}: {}", constraint, msg))
            }
        }
    }

    /// Whether the error came from a conflicting set of required constraints
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Unsatisfiable { .. })
    }
}
