//! Jupiter message types with their protobuf JSON mapping.
//!
//! Each API has a module with the response models at the top level and the
//! request/response envelopes under `services`.

pub mod price;
pub mod swap;
pub mod token;

/// Body-less response variant.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Empty {}
