use std::ops::Range;

use crate::error::ValidationError;

/// Exclusive upper bound of every selection draw.
pub const DRAW_SPAN: u32 = 100;

/// Quartile boundaries of the draw range, one slice per operation kind.
const HASH_END: u32 = 25;
const MATMUL_END: u32 = 50;
const COMPRESS_END: u32 = 75;

/// Remote operation exercised by one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    Hash,
    MatrixMultiply,
    Compress,
    Sort,
}

impl OperationKind {
    pub const ALL: [Self; 4] = [
        OperationKind::Hash,
        OperationKind::MatrixMultiply,
        OperationKind::Compress,
        OperationKind::Sort,
    ];

    /// Maps a draw in `[0, DRAW_SPAN)` onto its quartile. Draws at or past
    /// the span fall into the last quartile.
    #[must_use]
    pub const fn from_draw(draw: u32) -> Self {
        match draw {
            0..HASH_END => OperationKind::Hash,
            HASH_END..MATMUL_END => OperationKind::MatrixMultiply,
            MATMUL_END..COMPRESS_END => OperationKind::Compress,
            _ => OperationKind::Sort,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::Hash => "hash",
            OperationKind::MatrixMultiply => "matmul",
            OperationKind::Compress => "compress",
            OperationKind::Sort => "sort",
        }
    }
}

/// Which operation kinds a run exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    #[default]
    Mixed,
    HashOnly,
    MatMulOnly,
    CompressOnly,
    SortOnly,
}

impl OperationMode {
    pub const ALL: [Self; 5] = [
        OperationMode::Mixed,
        OperationMode::HashOnly,
        OperationMode::MatMulOnly,
        OperationMode::CompressOnly,
        OperationMode::SortOnly,
    ];

    /// Sub-range the scheduler draws from; single-kind modes cover exactly
    /// one quartile so every draw selects the same kind.
    #[must_use]
    pub const fn draw_range(self) -> Range<u32> {
        match self {
            OperationMode::Mixed => 0..DRAW_SPAN,
            OperationMode::HashOnly => 0..HASH_END,
            OperationMode::MatMulOnly => HASH_END..MATMUL_END,
            OperationMode::CompressOnly => MATMUL_END..COMPRESS_END,
            OperationMode::SortOnly => COMPRESS_END..DRAW_SPAN,
        }
    }

    /// Operation name written into persisted summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            OperationMode::Mixed => "Mixed Operations",
            OperationMode::HashOnly => "String Hashing",
            OperationMode::MatMulOnly => "Matrix Multiplication",
            OperationMode::CompressOnly => "Zlib Compression",
            OperationMode::SortOnly => "Array Sort",
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            OperationMode::Mixed => 0,
            OperationMode::HashOnly => 1,
            OperationMode::MatMulOnly => 2,
            OperationMode::CompressOnly => 3,
            OperationMode::SortOnly => 4,
        }
    }

    /// Resolves a numeric mode index (`0..=4`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidMode` when the index is out of range.
    pub fn from_index(index: u64) -> Result<Self, ValidationError> {
        match index {
            0 => Ok(OperationMode::Mixed),
            1 => Ok(OperationMode::HashOnly),
            2 => Ok(OperationMode::MatMulOnly),
            3 => Ok(OperationMode::CompressOnly),
            4 => Ok(OperationMode::SortOnly),
            _ => Err(ValidationError::InvalidMode {
                value: index.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for OperationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(index) = normalized.parse::<u64>() {
            return OperationMode::from_index(index);
        }
        match normalized.as_str() {
            "mixed" => Ok(OperationMode::Mixed),
            "hash" => Ok(OperationMode::HashOnly),
            "matmul" => Ok(OperationMode::MatMulOnly),
            "compress" => Ok(OperationMode::CompressOnly),
            "sort" => Ok(OperationMode::SortOnly),
            _ => Err(ValidationError::InvalidMode {
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadWeight {
    Light,
    Heavy,
}
