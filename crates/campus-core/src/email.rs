/// Canonical form used for every email comparison and for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
