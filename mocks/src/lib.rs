//! Test utilities that sit alongside the API model stubs
//!
//! This crate provides:
//! - Mock responses that check their arguments at the call site
//! - Equality matchers for partial comparisons
//! - Minimal files that pass file-type signature checks

pub mod comparisons;
pub mod fixtures;
pub mod mocking;

pub use comparisons::{AnyStringMatching, AnySupersetOf, RestrictedAny};
pub use fixtures::{valid_jpeg, valid_jpg, valid_pdf};
pub use mocking::{
    assert_args_and_raise, assert_args_and_return, assert_args_and_return_iter_over, assert_args_and_return_or_raise,
};
