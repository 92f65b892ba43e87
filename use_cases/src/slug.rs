use rand::Rng;

pub const SUFFIX_LENGTH: usize = 5;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase the name and collapse every run of characters outside
/// `[a-z0-9]` into a single hyphen, with no leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LENGTH)
        .map(|_| {
            let index = rng.gen_range(0..SUFFIX_ALPHABET.len());
            SUFFIX_ALPHABET[index] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{random_suffix, slugify, SUFFIX_LENGTH};
    use rstest::rstest;

    #[rstest]
    #[case("Sunset Beach", "sunset-beach")]
    #[case("Central Park", "central-park")]
    #[case("  Lake   Naivasha  ", "lake-naivasha")]
    #[case("St. Mary's Cathedral", "st-mary-s-cathedral")]
    #[case("CBD, Nairobi (Kenya)", "cbd-nairobi-kenya")]
    #[case("Côte d'Ivoire", "c-te-d-ivoire")]
    #[case("---", "")]
    fn test_slugify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[test]
    fn test_that_slugs_never_start_or_end_with_a_hyphen() {
        for name in ["  Sunset Beach  ", "(Hidden) Cove!", "--Old--Town--"] {
            let slug = slugify(name);
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
        }
    }

    #[test]
    fn test_that_the_suffix_is_drawn_from_the_lowercase_alphanumeric_alphabet() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
