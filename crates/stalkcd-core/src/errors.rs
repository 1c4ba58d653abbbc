use stalkcd_core_types::RunId;
use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Divergence between compared artifacts is never an error: the comparator
/// and classifier report it through their return values. The kinds below
/// cover the harness surface (golden profile checks) and the outer shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidGoldenProfile,
    AggregateMismatch,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidGoldenProfile => "ERR_INVALID_GOLDEN_PROFILE",
            ExErrorKind::AggregateMismatch => "ERR_AGGREGATE_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the
/// conversion pair being processed, if any.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    source_id: Option<String>,
    target_id: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            source_id: None,
            target_id: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add source artifact context
    pub fn with_source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    /// Add target artifact context
    pub fn with_target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the source artifact context, if any
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Get the target artifact context, if any
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(source_id) = &self.source_id {
            write!(f, " (source: {})", source_id)?;
        }
        if let Some(target_id) = &self.target_id {
            write!(f, " (target: {})", target_id)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run: {})", run_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// One golden-profile field whose observed value disagrees with the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

/// Observed aggregate statistics disagree with the golden profile
///
/// The message enumerates every mismatched field with both values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_mismatches(.mismatches))]
pub struct AggregateMismatchError {
    pub mismatches: Vec<FieldMismatch>,
}

impl AggregateMismatchError {
    /// Names of the mismatched fields, in check order
    pub fn fields(&self) -> Vec<&str> {
        self.mismatches.iter().map(|m| m.field.as_str()).collect()
    }
}

fn render_mismatches(mismatches: &[FieldMismatch]) -> String {
    let mut out = String::from("Aggregate statistics do not match the golden profile.\n");
    for m in mismatches {
        out.push_str(&format!(
            "Property '{}'\n    Expected: '{}'\n    actual: '{}'\n",
            m.field, m.expected, m.actual
        ));
    }
    out
}

/// Error taxonomy for stalkcd operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StalkError {
    /// A run's statistics disagree with the expected profile
    #[error(transparent)]
    AggregateMismatch(#[from] AggregateMismatchError),

    /// Golden profile text could not be interpreted
    #[error("Invalid golden profile: {reason}")]
    InvalidGoldenProfile { reason: String },
}

/// Conversion from StalkError to ExError
impl From<StalkError> for ExError {
    fn from(err: StalkError) -> Self {
        match err {
            StalkError::AggregateMismatch(mismatch) => {
                ExError::new(ExErrorKind::AggregateMismatch)
                    .with_op("check_against_golden")
                    .with_message(format!(
                        "{} field(s) differ: {}",
                        mismatch.mismatches.len(),
                        mismatch.fields().join(", ")
                    ))
            }

            StalkError::InvalidGoldenProfile { reason } => {
                ExError::new(ExErrorKind::InvalidGoldenProfile)
                    .with_op("parse_golden_profile")
                    .with_message(reason)
            }
        }
    }
}
