//! Request and response DTOs for the tracker service.

pub mod request;
pub mod response;
