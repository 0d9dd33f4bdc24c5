use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Invalid argument '{parameter}' = {value}: side lengths must be greater than zero")]
    InvalidArgument { parameter: &'static str, value: f64 },

    #[error("Sides {a}, {b}, {c} do not satisfy the triangle inequality")]
    DegenerateTriangle { a: f64, b: f64, c: f64 },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GeometryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::DegenerateTriangle { .. } => ErrorCategory::Input,
            Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } | Self::DegenerateTriangle { .. } => ErrorSeverity::High,
            Self::InvalidConfigValue { .. } => ErrorSeverity::Medium,
            Self::Io(_) | Self::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error when it reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidArgument { parameter, .. } => {
                format!("Pass a positive length for side '{}'", parameter)
            }
            Self::DegenerateTriangle { .. } => {
                "Each side must be shorter than the sum of the other two; drop --strict to get NaN instead"
                    .to_string()
            }
            Self::InvalidConfigValue { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            Self::Io(_) => "Make sure standard output is writable".to_string(),
            Self::Serialization(_) => "Retry without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { parameter, value } => format!(
                "Triangle side '{}' must be greater than zero (got {})",
                parameter, value
            ),
            Self::DegenerateTriangle { a, b, c } => {
                format!("Sides {}, {} and {} cannot form a triangle", a, b, c)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
