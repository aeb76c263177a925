//! Fuzz target: the validation routine on arbitrary strings and ages.
//!
//! Splits the input into name and email at the first NUL byte and takes the
//! age from the trailing four bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use users_core::validate_user_input;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (text, age_bytes) = data.split_at(data.len() - 4);
    let age = i32::from_le_bytes([age_bytes[0], age_bytes[1], age_bytes[2], age_bytes[3]]);
    let text = String::from_utf8_lossy(text);
    let (name, email) = text.split_once('\0').unwrap_or((&*text, ""));

    let errors = validate_user_input(name, email, age);
    assert!(errors.len() <= 3, "at most one error per field");
    assert_eq!(errors.iter().any(|e| e.field == "age"), age < 18);
});
