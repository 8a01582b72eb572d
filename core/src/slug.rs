//! Framework slug parsing.
//!
//! A framework slug is a family name optionally followed by an iteration
//! number: `g-cloud-10`, `digital-outcomes-and-specialists-3`,
//! `digital-outcomes-and-specialists`. Stubs derive the framework family and
//! display name from it.

/// Families whose display name is not plain title case
const KNOWN_FAMILIES: &[(&str, &str)] = &[
    ("g-cloud", "G-Cloud"),
    ("digital-outcomes-and-specialists", "Digital Outcomes and Specialists"),
];

pub const G_CLOUD: &str = "g-cloud";
pub const DIGITAL_OUTCOMES_AND_SPECIALISTS: &str = "digital-outcomes-and-specialists";

/// A parsed framework slug
///
/// # Examples
///
/// ```rust
/// use stub_core::FrameworkSlug;
///
/// let slug = FrameworkSlug::parse("g-cloud-10");
/// assert_eq!(slug.family(), "g-cloud");
/// assert_eq!(slug.iteration(), Some(10));
/// assert_eq!(slug.name(), "G-Cloud 10");
///
/// let dos = FrameworkSlug::parse("digital-outcomes-and-specialists");
/// assert_eq!(dos.family(), "digital-outcomes-and-specialists");
/// assert_eq!(dos.name(), "Digital Outcomes and Specialists");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkSlug<'a> {
    slug: &'a str,
    family: &'a str,
    iteration: Option<&'a str>,
}

impl<'a> FrameworkSlug<'a> {
    /// Split a slug into family and trailing iteration number
    pub fn parse(slug: &'a str) -> Self {
        match slug.rsplit_once('-') {
            Some((family, number))
                if !family.is_empty()
                    && !number.is_empty()
                    && number.bytes().all(|b| b.is_ascii_digit()) =>
            {
                Self {
                    slug,
                    family,
                    iteration: Some(number),
                }
            }
            _ => Self {
                slug,
                family: slug,
                iteration: None,
            },
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.slug
    }

    pub fn family(&self) -> &'a str {
        self.family
    }

    pub fn iteration(&self) -> Option<u32> {
        self.iteration.and_then(|n| n.parse().ok())
    }

    pub fn is_family(&self, family: &str) -> bool {
        self.family == family
    }

    /// Display name of the family alone
    pub fn family_name(&self) -> String {
        KNOWN_FAMILIES
            .iter()
            .find(|(slug, _)| *slug == self.family)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| title_case(self.family))
    }

    /// Display name of the framework, e.g. `G-Cloud 10`
    pub fn name(&self) -> String {
        match self.iteration {
            Some(number) => format!("{} {number}", self.family_name()),
            None => self.family_name(),
        }
    }
}

/// Title-case a hyphenated slug word by word: `my-fake-framework` becomes
/// `My Fake Framework`
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_known_families() {
        let g4 = FrameworkSlug::parse("g-cloud-4");
        assert_eq!(g4.family(), G_CLOUD);
        assert_eq!(g4.name(), "G-Cloud 4");

        let dos2 = FrameworkSlug::parse("digital-outcomes-and-specialists-2");
        assert_eq!(dos2.family(), DIGITAL_OUTCOMES_AND_SPECIALISTS);
        assert_eq!(dos2.iteration(), Some(2));
        assert_eq!(dos2.name(), "Digital Outcomes and Specialists 2");
    }

    #[test]
    fn test_unknown_family_is_title_cased() {
        let slug = FrameworkSlug::parse("my-amazing-framework");
        assert_eq!(slug.family(), "my-amazing-framework");
        assert_eq!(slug.iteration(), None);
        assert_eq!(slug.name(), "My Amazing Framework");

        let numbered = FrameworkSlug::parse("my-fake-framework-3");
        assert_eq!(numbered.family(), "my-fake-framework");
        assert_eq!(numbered.name(), "My Fake Framework 3");
    }

    #[test]
    fn test_family_without_number() {
        let slug = FrameworkSlug::parse("g-cloud");
        assert_eq!(slug.family(), "g-cloud");
        assert_eq!(slug.iteration(), None);
        assert_eq!(slug.name(), "G-Cloud");
    }

    #[test]
    fn test_edge_case_slugs() {
        assert_eq!(FrameworkSlug::parse("").family(), "");
        assert_eq!(FrameworkSlug::parse("").name(), "");
        // a bare number has no family prefix to split off
        assert_eq!(FrameworkSlug::parse("-10").family(), "-10");
        assert_eq!(FrameworkSlug::parse("framework-").family(), "framework-");
        assert_eq!(FrameworkSlug::parse("framework-v2").family(), "framework-v2");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cLOUD"), "Cloud");
        assert_eq!(capitalize(""), "");
        assert_eq!(title_case("cloud--hosting"), "Cloud Hosting");
    }

    proptest! {
        #[test]
        fn prop_numbered_slug_splits_family(family in "[a-z]{1,8}(-[a-z]{1,8}){0,3}", number in 1u32..100) {
            let slug = format!("{family}-{number}");
            let parsed = FrameworkSlug::parse(&slug);
            prop_assert_eq!(parsed.family(), family.as_str());
            prop_assert_eq!(parsed.iteration(), Some(number));
            let suffix = format!(" {number}");
            prop_assert!(parsed.name().ends_with(&suffix));
        }

        #[test]
        fn prop_unnumbered_slug_is_its_own_family(family in "[a-z]{1,8}(-[a-z]{1,8}){0,3}") {
            let parsed = FrameworkSlug::parse(&family);
            prop_assert_eq!(parsed.family(), family.as_str());
            prop_assert_eq!(parsed.iteration(), None);
        }
    }
}
