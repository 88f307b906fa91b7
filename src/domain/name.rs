//! Show name normalization
//!
//! Turns a human-readable title into a directory-safe identifier:
//! `"My Awesome Show!!"` becomes `my-awesome-show`.

/// Normalizes a show title into a directory name.
///
/// Lower-cases, maps spaces to hyphens, drops anything that is not
/// alphanumeric or a hyphen, collapses hyphen runs and trims hyphens from
/// both ends. The result may be empty.
pub fn normalize_show_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        let c = if c == ' ' { '-' } else { c };
        if !(c.is_alphanumeric() || c == '-') {
            continue;
        }
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_title() {
        assert_eq!(normalize_show_name("My Awesome Show!!"), "my-awesome-show");
    }

    #[test]
    fn collapses_and_trims_hyphens() {
        assert_eq!(normalize_show_name("  Holiday -- Special  "), "holiday-special");
        assert_eq!(normalize_show_name("a - b"), "a-b");
        assert_eq!(normalize_show_name("-edge-"), "edge");
    }

    #[test]
    fn strips_punctuation_between_words() {
        // Removing '&' leaves two adjacent hyphens which must collapse
        assert_eq!(normalize_show_name("Rock & Roll"), "rock-roll");
        assert_eq!(normalize_show_name("v1.2_final"), "v12final");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(normalize_show_name("Noël Lights"), "noël-lights");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(normalize_show_name("!!!"), "");
        assert_eq!(normalize_show_name("   "), "");
    }

    proptest! {
        #[test]
        fn normalized_is_directory_safe(name in ".{0,40}") {
            let normalized = normalize_show_name(&name);
            prop_assert!(!normalized.starts_with('-'));
            prop_assert!(!normalized.ends_with('-'));
            prop_assert!(!normalized.contains("--"));
            prop_assert!(normalized.chars().all(|c| c.is_alphanumeric() || c == '-'));
            prop_assert!(!normalized.contains('/'));
        }

        #[test]
        fn normalization_is_idempotent(name in "[a-zA-Z0-9 !&-]{0,30}") {
            let once = normalize_show_name(&name);
            prop_assert_eq!(normalize_show_name(&once), once.clone());
        }
    }
}
