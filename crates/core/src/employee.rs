//! Employee identity helpers.

/// Mail domain every derived company address lives under.
pub const EMAIL_DOMAIN: &str = "company.in";

/// Derive the company email address from an employee's names.
///
/// Names are used exactly as given: `("Asha", "Rao")` becomes
/// `Asha.Rao@company.in`. Callers pass names that are already trimmed, the
/// same values they store.
///
/// ```
/// use timesheet_core::employee::derive_email;
///
/// assert_eq!(derive_email("a", "b"), "a.b@company.in");
/// ```
pub fn derive_email(first_name: &str, second_name: &str) -> String {
    format!("{first_name}.{second_name}@{EMAIL_DOMAIN}")
}
