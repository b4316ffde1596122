//! Operation kinds, run modes, payload fixtures, and the seeded operation selector.
mod kinds;
mod payloads;
mod selector;


pub use kinds::{DRAW_SPAN, OperationKind, OperationMode, PayloadWeight};
pub use payloads::{Payload, payload_for};
pub use selector::{
    OperationRequest, OperationSelector, RequestTicket, Selection, SelectionPolicy, request_rng,
    select_operation,
};
