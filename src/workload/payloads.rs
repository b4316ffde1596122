use super::kinds::{OperationKind, PayloadWeight};

const LIGHT_HASH_PHRASE: &str = "As the blue one says, Gotta go fast";
const LIGHT_COMPRESS_PHRASE: &str = "I am crushed and reborn!";
const HEAVY_TEXT_LINE: &str =
    "Pack my box with five dozen liquor jugs, then ship the crate across the wire.\n";
const HEAVY_TEXT_REPEAT: usize = 24;

const LIGHT_MATRIX_SIZE: usize = 2;
const LIGHT_MATRIX_LEFT: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
const LIGHT_MATRIX_RIGHT: [f64; 4] = [5.0, 6.0, 7.0, 8.0];

const HEAVY_MATRIX_SIZE: usize = 6;
const HEAVY_MATRIX_LEFT: [f64; 36] = [
    3.2, 87.6, 42.1, 19.9, 64.3, 55.8, 92.4, 11.7, 76.9, 28.4, 35.6, 81.2, 47.3, 68.7, 24.5, 59.1,
    95.0, 14.8, 33.9, 72.4, 49.5, 61.7, 7.3, 85.6, 38.2, 57.9, 93.8, 22.5, 66.1, 31.4, 78.7, 9.6,
    72.0, 55.0, 72.0, 1.0,
];
const HEAVY_MATRIX_RIGHT: [f64; 36] = [
    45.5, 18.3, 97.9, 26.7, 63.2, 88.6, 53.4, 32.8, 70.1, 11.5, 82.9, 39.4, 58.7, 94.2, 21.6, 75.8,
    28.9, 67.3, 49.1, 84.7, 15.2, 60.9, 34.5, 91.4, 43.6, 79.8, 25.4, 56.2, 99.3, 12.7, 73.5, 41.9,
    3.0, 7.0, 9.0, 12.0,
];

const LIGHT_SORT_DATA: [i32; 11] = [1, 5, 9, 27, 3, 5, 8, 1, 9, 7, 11];
const HEAVY_SORT_LEN: usize = 300;
const HEAVY_SORT_BOUND: u32 = 1000;
const HEAVY_SORT_STATE: u32 = 0x2545_F491;

/// Request body for one remote operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Hash {
        data: Vec<u8>,
    },
    MatrixMultiply {
        left: Vec<f64>,
        right: Vec<f64>,
        size: usize,
    },
    Compress {
        data: Vec<u8>,
    },
    Sort {
        data: Vec<i32>,
    },
}

impl Payload {
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Payload::Hash { .. } => OperationKind::Hash,
            Payload::MatrixMultiply { .. } => OperationKind::MatrixMultiply,
            Payload::Compress { .. } => OperationKind::Compress,
            Payload::Sort { .. } => OperationKind::Sort,
        }
    }

    /// Number of elements carried (bytes, integers, or matrix cells per operand).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Payload::Hash { data } | Payload::Compress { data } => data.len(),
            Payload::MatrixMultiply { left, .. } => left.len(),
            Payload::Sort { data } => data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the fixed payload for an operation kind and weight.
#[must_use]
pub fn payload_for(kind: OperationKind, weight: PayloadWeight) -> Payload {
    match (kind, weight) {
        (OperationKind::Hash, PayloadWeight::Light) => Payload::Hash {
            data: LIGHT_HASH_PHRASE.as_bytes().to_vec(),
        },
        (OperationKind::Hash, PayloadWeight::Heavy) => Payload::Hash {
            data: heavy_text(),
        },
        (OperationKind::MatrixMultiply, PayloadWeight::Light) => Payload::MatrixMultiply {
            left: LIGHT_MATRIX_LEFT.to_vec(),
            right: LIGHT_MATRIX_RIGHT.to_vec(),
            size: LIGHT_MATRIX_SIZE,
        },
        (OperationKind::MatrixMultiply, PayloadWeight::Heavy) => Payload::MatrixMultiply {
            left: HEAVY_MATRIX_LEFT.to_vec(),
            right: HEAVY_MATRIX_RIGHT.to_vec(),
            size: HEAVY_MATRIX_SIZE,
        },
        (OperationKind::Compress, PayloadWeight::Light) => Payload::Compress {
            data: LIGHT_COMPRESS_PHRASE.as_bytes().to_vec(),
        },
        (OperationKind::Compress, PayloadWeight::Heavy) => Payload::Compress {
            data: heavy_text(),
        },
        (OperationKind::Sort, PayloadWeight::Light) => Payload::Sort {
            data: LIGHT_SORT_DATA.to_vec(),
        },
        (OperationKind::Sort, PayloadWeight::Heavy) => Payload::Sort {
            data: heavy_sort_data(),
        },
    }
}

fn heavy_text() -> Vec<u8> {
    HEAVY_TEXT_LINE.repeat(HEAVY_TEXT_REPEAT).into_bytes()
}

// Fixed LCG so the heavy array is identical on every run and platform.
fn heavy_sort_data() -> Vec<i32> {
    let mut state = HEAVY_SORT_STATE;
    (0..HEAVY_SORT_LEN)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let value = state
                .wrapping_shr(16)
                .checked_rem(HEAVY_SORT_BOUND)
                .unwrap_or_default();
            i32::try_from(value).unwrap_or_default()
        })
        .collect()
}
