//! Integration tests for boxup-api
//!
//! Uses wiremock to simulate the Box API and verifies end-to-end behavior
//! of folder resolution primitives, item lookup, and uploads.

mod common;

mod test_folders;
mod test_upload;
