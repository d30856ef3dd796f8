//! Route access policy.
//!
//! Pure decision logic: given the current session (or its absence) and a
//! destination's declared requirement, decide whether navigation proceeds
//! or redirects. No I/O, no mutation.

pub mod decision;
pub mod matcher;
pub mod requirement;
pub mod routes;

pub use decision::{Decision, decide};
pub use matcher::{is_admin_role, role_matches};
pub use requirement::{AccessRequirement, Destination};
pub use routes::{landing_for, requirement_for};
