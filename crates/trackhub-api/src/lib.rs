//! # trackhub-api
//!
//! Typed client for the remote research tracker REST service.
//!
//! The service is consumed as an opaque HTTP/JSON boundary: this crate
//! owns request shaping (bearer header, JSON bodies, multipart uploads)
//! and the one cross-cutting error policy — any `401` response forces a
//! logout of the shared session before the error is surfaced.

pub mod client;
pub mod dto;
pub mod endpoints;

pub use client::ApiClient;
pub use dto::request::{LoginRequest, MilestonePayload, ProjectPayload, SignupRequest};
pub use dto::response::AuthResponse;
