use std::collections::HashSet;

use async_trait::async_trait;

use cleargate_reference::{HsCodeIndex, ReferenceError};

/// In-memory HS code index backed by a `HashSet` of known codes.
#[derive(Debug, Default)]
pub struct MemoryHsCodeIndex {
    codes: HashSet<String>,
}

impl MemoryHsCodeIndex {
    /// Build an index from an iterator of known codes.
    pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl HsCodeIndex for MemoryHsCodeIndex {
    async fn exists(&self, code: &str) -> Result<bool, ReferenceError> {
        Ok(self.codes.contains(code))
    }
}
