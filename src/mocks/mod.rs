//! Mock implementations for testing
//!
//! Hand-written stand-ins for the transport and auth seams so services and the
//! fetch pipeline can be unit tested without HTTP calls.

mod mock_auth;

pub use mock_auth::MockAuthManager;
pub use mock_transport::{MockHttpTransport, MockRequest};
