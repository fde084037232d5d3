//! Form constraints enforced before a submit is dispatched.

use shared::domain::{phone_matches_pattern, EnquiryForm};

/// Mirrors the input-level constraints: full name required, phone
/// required and limited to 8-15 digits/`+`/space. Everything else is
/// optional. An enquiry that fails here never reaches the controller.
pub fn validate(form: &EnquiryForm) -> Result<(), Vec<&'static str>> {
    let mut problems = Vec::new();
    if form.full_name.trim().is_empty() {
        problems.push("Full name is required");
    }
    if !phone_matches_pattern(&form.phone) {
        problems.push("Phone must be 8-15 characters of digits, '+', or space");
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
