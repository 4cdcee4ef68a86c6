use derive_more::derive::Display;
use serde::Deserialize;

pub const DEFAULT_LIMIT: u32 = 5000;
pub const DEFAULT_OFFSET: u64 = 0;

// negative or non-numeric values are rejected by the extractor, never reach here
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("limit={} offset={}", limit, offset)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: u32,
    // bigint on the database side
    #[serde(default = "default_offset")]
    pub offset: u64,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_offset() -> u64 {
    DEFAULT_OFFSET
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Caps `limit` at `max_limit`. Returns the capped value and whether it changed.
    pub fn clamped(self, max_limit: u32) -> (Self, bool) {
        if self.limit > max_limit {
            (
                Self {
                    limit: max_limit,
                    offset: self.offset,
                },
                true,
            )
        } else {
            (self, false)
        }
    }
}
