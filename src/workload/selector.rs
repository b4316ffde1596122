use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::args::HeavyMix;

use super::kinds::{DRAW_SPAN, OperationKind, OperationMode, PayloadWeight};
use super::payloads::{Payload, payload_for};

/// Odd multiplier spreading consecutive request counters across the seed space.
const SEQUENCE_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: OperationKind,
    pub weight: PayloadWeight,
}

/// Selects an operation kind from `draw` and a payload weight from `heavy_draw`.
///
/// Both draws are expected in `[0, DRAW_SPAN)`. A heavy draw below the heavy
/// mix percentage selects the heavy payload.
#[must_use]
pub fn select_operation(draw: u32, heavy_draw: u32, heavy_mix: HeavyMix) -> Selection {
    let weight = if heavy_draw < u32::from(heavy_mix.get()) {
        PayloadWeight::Heavy
    } else {
        PayloadWeight::Light
    };
    Selection {
        kind: OperationKind::from_draw(draw),
        weight,
    }
}

/// Generator owned by exactly one dispatched request.
///
/// Derived from the run seed and the request's sequence number, so the same
/// seed replays the same per-request choices without sharing generator state
/// between concurrent tasks.
#[must_use]
pub fn request_rng(seed: i64, sequence: u64) -> StdRng {
    let seed_bits = u64::from_ne_bytes(seed.to_ne_bytes());
    let offset = sequence.wrapping_add(1).wrapping_mul(SEQUENCE_STRIDE);
    StdRng::seed_from_u64(seed_bits ^ offset)
}

/// Position of one request in the run plus its operation draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub sequence: u64,
    pub draw: u32,
}

/// Per-request half of selection, cheap to copy into dispatch tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub seed: i64,
    pub heavy_mix: HeavyMix,
}

impl SelectionPolicy {
    /// Draws the payload weight from the ticket's own generator and builds the request.
    #[must_use]
    pub fn resolve(self, ticket: RequestTicket) -> OperationRequest {
        let mut rng = request_rng(self.seed, ticket.sequence);
        let heavy_draw = rng.gen_range(0..DRAW_SPAN);
        let selection = select_operation(ticket.draw, heavy_draw, self.heavy_mix);
        OperationRequest {
            sequence: ticket.sequence,
            weight: selection.weight,
            payload: payload_for(selection.kind, selection.weight),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub sequence: u64,
    pub weight: PayloadWeight,
    pub payload: Payload,
}

impl OperationRequest {
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.payload.kind()
    }
}

/// Sequential source of request tickets for one run.
///
/// Owned by the scheduling loop; the operation draw is bounded to the mode's
/// sub-range before it reaches [`select_operation`].
pub struct OperationSelector {
    mode: OperationMode,
    policy: SelectionPolicy,
    draws: StdRng,
    next_sequence: u64,
}

impl OperationSelector {
    #[must_use]
    pub fn new(mode: OperationMode, seed: i64, heavy_mix: HeavyMix) -> Self {
        let draws = StdRng::seed_from_u64(u64::from_ne_bytes(seed.to_ne_bytes()));
        Self {
            mode,
            policy: SelectionPolicy { seed, heavy_mix },
            draws,
            next_sequence: 0,
        }
    }

    pub fn next_ticket(&mut self) -> RequestTicket {
        let draw = self.draws.gen_range(self.mode.draw_range());
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        RequestTicket { sequence, draw }
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub const fn mode(&self) -> OperationMode {
        self.mode
    }
}
