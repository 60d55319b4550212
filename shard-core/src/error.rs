use thiserror::Error;

/// Errors raised when raw stored values do not map onto the stat model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("level {0} is out of range ({min}..={max})", min = crate::constants::MIN_LEVEL, max = crate::constants::MAX_LEVEL)]
    LevelOutOfRange(i64),
    #[error("unknown vocation id: {0}")]
    UnknownVocation(i32),
    #[error("unknown sex id: {0}")]
    UnknownSex(i32),
    #[error("unknown group id: {0}")]
    UnknownGroup(i32),
}
