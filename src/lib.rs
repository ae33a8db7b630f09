//! Jupiter REST client that decodes responses into protobuf message types.
//!
//! Upstream payloads are normalized first (see [`normalize`]) so that the
//! enum labels and `null`s Jupiter emits fit the protobuf JSON mapping.

mod args;
mod client;
mod config;
mod decode;
mod demo;
mod error;
mod normalize;
pub mod proto;
mod utils;

pub use args::{Cli, ClientArgs};
pub use client::JupiterClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use decode::{decode_normalized, DecodeError};
pub use demo::run_demo;
pub use error::ClientError;
pub use normalize::normalize;
pub use utils::logging::init_logging;
