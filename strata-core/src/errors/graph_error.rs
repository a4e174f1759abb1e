/// Association graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("association strength {strength} outside [0, 1]")]
    StrengthOutOfRange { strength: f64 },

    #[error("graph inconsistency: {details}")]
    GraphInconsistency { details: String },
}
