/// Largest page the listing view asks for
pub const DEFAULT_LIMIT: usize = 100;

/// Paging parameters for a bulk read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Number of records to skip
    pub skip: usize,
    /// Maximum number of records to return
    pub limit: usize,
}

impl ListParams {
    pub fn with_limit(limit: usize) -> Self {
        Self { skip: 0, limit }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
