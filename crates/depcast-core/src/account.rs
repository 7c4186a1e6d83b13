//! Syntactic account-name validation.
//!
//! Account names are colon-separated component paths rooted at one of the
//! five beancount account types, e.g. `Assets:Wealth:Fixed-Assets`.
//! Configuration falls back to built-in defaults when a configured account
//! fails this check, so validation reports a reason rather than panicking.

/// Valid account root types.
const VALID_ROOTS: &[&str] = &["Assets", "Liabilities", "Equity", "Income", "Expenses"];

/// Validate an account name.
/// Returns `None` if valid, or `Some(reason)` if invalid.
#[must_use]
pub fn validate(account: &str) -> Option<String> {
    if account.is_empty() {
        return Some("account name is empty".to_string());
    }

    let parts: Vec<&str> = account.split(':').collect();

    // Check root account type
    let root = parts[0];
    if !VALID_ROOTS.contains(&root) {
        return Some(format!(
            "account must start with one of: {}",
            VALID_ROOTS.join(", ")
        ));
    }

    // Check each component
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Some(format!("component {} is empty", i + 1));
        }

        // First character must be uppercase letter or digit
        let Some(first_char) = part.chars().next() else {
            continue; // unreachable: empty components rejected above
        };
        if !first_char.is_ascii_uppercase() && !first_char.is_ascii_digit() {
            return Some(format!(
                "component '{part}' must start with uppercase letter or digit"
            ));
        }

        // Remaining characters: letters, numbers, dashes
        for c in part.chars().skip(1) {
            if !c.is_ascii_alphanumeric() && c != '-' {
                return Some(format!(
                    "component '{part}' contains invalid character '{c}'"
                ));
            }
        }
    }

    None
}

/// Check whether an account name is syntactically valid.
#[must_use]
pub fn is_valid(account: &str) -> bool {
    validate(account).is_none()
}
