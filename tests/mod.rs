//! Integration tests for wavedial
//!
//! Tests are organized by component:
//! - radio_browser_test: directory client tests (mirror fallback, params, parsing)
//! - app_test: filter/query/pager orchestration and lookup cache tests
//!
//! Each test file is a separate integration test crate; tests are run
//! individually by cargo, not via mod.rs.
