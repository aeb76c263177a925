//! Fuzz target: decoding and validating a create/update request body.
//!
//! Arbitrary bytes must never panic, and an accepted body must satisfy
//! every field constraint.

#![no_main]

use libfuzzer_sys::fuzz_target;
use users_core::{MAX_FIELD_LEN, MIN_AGE};
use users_gateway::routes::decode_input;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = decode_input(data) {
        assert!(!input.name.trim().is_empty() && input.name.len() <= MAX_FIELD_LEN);
        assert!(!input.email.trim().is_empty() && input.email.len() <= MAX_FIELD_LEN);
        assert!(input.age >= MIN_AGE);
    }
});
