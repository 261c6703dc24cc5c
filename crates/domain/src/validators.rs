use crate::DomainError;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Normalizes a domain name to lower case with a trailing dot.
///
/// `""` and `"."` both map to the root, `"."`.
pub fn normalize_name(name: &str) -> Result<Arc<str>, DomainError> {
    let trimmed = name.trim();
    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if bare.is_empty() {
        return Ok(Arc::from("."));
    }
    if bare.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} characters",
            name, MAX_NAME_LEN
        )));
    }

    let mut normalized = String::with_capacity(bare.len() + 1);
    for label in bare.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' in '{}' exceeds {} characters",
                label, name, MAX_LABEL_LEN
            )));
        }
        normalized.push_str(&label.to_ascii_lowercase());
        normalized.push('.');
    }

    Ok(Arc::from(normalized))
}

/// True when `name` equals `zone` or sits below it. Both must be normalized.
pub fn is_within_zone(name: &str, zone: &str) -> bool {
    if zone == "." {
        return true;
    }
    if name == zone {
        return true;
    }
    name.len() > zone.len()
        && name.ends_with(zone)
        && name.as_bytes()[name.len() - zone.len() - 1] == b'.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_trailing_dot_and_lowercases() {
        assert_eq!(normalize_name("WWW.Example.COM").unwrap().as_ref(), "www.example.com.");
        assert_eq!(normalize_name("example.com.").unwrap().as_ref(), "example.com.");
        assert_eq!(normalize_name(" example.com ").unwrap().as_ref(), "example.com.");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_name("").unwrap().as_ref(), ".");
        assert_eq!(normalize_name(".").unwrap().as_ref(), ".");
    }

    #[test]
    fn test_normalize_rejects_bad_names() {
        assert!(normalize_name("a..b").is_err());
        assert!(normalize_name(&"x".repeat(64)).is_err());
        assert!(normalize_name(&"a.".repeat(130)).is_err());
    }

    #[test]
    fn test_is_within_zone() {
        assert!(is_within_zone("www.example.com.", "example.com."));
        assert!(is_within_zone("example.com.", "example.com."));
        assert!(is_within_zone("example.com.", "."));
        assert!(!is_within_zone("badexample.com.", "example.com."));
        assert!(!is_within_zone("example.org.", "com."));
        assert!(!is_within_zone("com.", "example.com."));
    }
}
