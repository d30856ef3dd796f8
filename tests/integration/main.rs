//! Integration tests for the session core, access policy, and API
//! client error handling.

mod api_client_test;
mod helpers;
mod policy_test;
mod session_flow_test;
