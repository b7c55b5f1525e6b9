use std::fmt;

/// Every failure the core can report. Storage variants carry the
/// underlying OS or decoder message; item variants carry the offending
/// 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    ItemNotFound(usize),
    ItemAlreadyCompleted(usize),
    StorageRead(String),
    StorageWrite(String),
    StorageDecode(String),
}

impl CoreError {
    pub fn storage_read<M: Into<String>>(message: M) -> Self {
        Self::StorageRead(message.into())
    }

    pub fn storage_write<M: Into<String>>(message: M) -> Self {
        Self::StorageWrite(message.into())
    }

    pub fn storage_decode<M: Into<String>>(message: M) -> Self {
        Self::StorageDecode(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "item_not_found",
            Self::ItemAlreadyCompleted(_) => "item_already_completed",
            Self::StorageRead(_) => "storage_read",
            Self::StorageWrite(_) => "storage_write",
            Self::StorageDecode(_) => "storage_decode",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::ItemNotFound(ordinal) => format!("item #{ordinal} does not exist"),
            Self::ItemAlreadyCompleted(ordinal) => {
                format!("item #{ordinal} has already been completed")
            }
            Self::StorageRead(message) => message.clone(),
            Self::StorageWrite(message) => message.clone(),
            Self::StorageDecode(message) => message.clone(),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for CoreError {}
