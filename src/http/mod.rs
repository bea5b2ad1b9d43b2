//! HTTP protocol layer module
//!
//! Plain response builders shared by the router, decoupled from the
//! envelope contract of the API endpoints.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_options_response,
};
