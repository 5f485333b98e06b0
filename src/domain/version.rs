use crate::error::{Result, VersionctlError};
use std::fmt;
use std::str::FromStr;

pub use semver::Version;

/// Requested kind of version change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Major,
    Minor,
    Patch,
    None,
}

impl FromStr for Increment {
    type Err = VersionctlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "MAJOR" => Ok(Increment::Major),
            "MINOR" => Ok(Increment::Minor),
            "PATCH" => Ok(Increment::Patch),
            "NONE" => Ok(Increment::None),
            _ => Err(VersionctlError::InvalidIncrement(s.to_string())),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Increment::Major => write!(f, "MAJOR"),
            Increment::Minor => write!(f, "MINOR"),
            Increment::Patch => write!(f, "PATCH"),
            Increment::None => write!(f, "NONE"),
        }
    }
}

/// Either a bump of the current version or an explicit replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Increment(Increment),
    Manual(String),
}

/// Numeric component of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

/// Parse a strict semantic version (`major.minor.patch[-pre][+build]`).
///
/// No `v` prefix or surrounding whitespace is accepted. On failure the
/// returned error carries `text` verbatim.
///
/// # Example
/// ```
/// use versionctl::domain::version::parse;
///
/// let v = parse("2.1.3").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (2, 1, 3));
/// assert!(parse("INVALID").is_err());
/// ```
pub fn parse(text: &str) -> Result<Version> {
    Version::parse(text).map_err(|_| VersionctlError::invalid_version(text))
}

/// Format a version in its canonical textual form.
pub fn format(version: &Version) -> String {
    version.to_string()
}

/// Bump a version according to the increment.
///
/// Increments the appropriate component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
/// - **None**: the input is returned unchanged
///
/// Any numeric bump yields a clean release: pre-release and build metadata
/// are dropped. Components already at `u64::MAX` saturate.
pub fn bump(version: &Version, increment: Increment) -> Version {
    match increment {
        Increment::Major => Version::new(version.major.saturating_add(1), 0, 0),
        Increment::Minor => Version::new(version.major, version.minor.saturating_add(1), 0),
        Increment::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.saturating_add(1),
        ),
        Increment::None => version.clone(),
    }
}

/// Return a single numeric component of the version.
pub fn component(version: &Version, which: Component) -> u64 {
    match which {
        Component::Major => version.major,
        Component::Minor => version.minor,
        Component::Patch => version.patch,
    }
}

/// Resolve the next version from the current one.
///
/// A manual directive is validated and returned as-is; `current` is not
/// looked at in that case. An increment parses `current` and bumps it.
pub fn resolve_next(current: &str, directive: &Directive) -> Result<Version> {
    match directive {
        Directive::Manual(manual) => parse(manual),
        Directive::Increment(increment) => Ok(bump(&parse(current)?, *increment)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &["0.0.0", "0.0.1", "0.1.0", "1.0.0", "1.1.0", "2.1.3", "10.20.30"];

    #[test]
    fn test_parse_components() {
        let v = parse("2.1.3").unwrap();
        assert_eq!(v.major, 2);
        assert_eq!(v.minor, 1);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let v = parse("1.2.3-rc.1+build.5").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert_eq!(v.pre.as_str(), "rc.1");
        assert_eq!(v.build.as_str(), "build.5");
    }

    #[test]
    fn test_parse_invalid_carries_text() {
        match parse("INVALID") {
            Err(VersionctlError::InvalidVersion(text)) => assert_eq!(text, "INVALID"),
            other => panic!("expected InvalidVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_loose_forms() {
        for text in ["", "1.2", "1.2.3.4", "v1.2.3", " 1.2.3", "01.2.3", "1.2.x"] {
            assert!(parse(text).is_err(), "'{}' should be rejected", text);
        }
    }

    #[test]
    fn test_bump_none_is_identity() {
        for text in SAMPLES {
            let v = parse(text).unwrap();
            assert_eq!(bump(&v, Increment::None), v);
        }
    }

    #[test]
    fn test_bump_none_keeps_metadata() {
        let v = parse("1.0.0-alpha+001").unwrap();
        assert_eq!(format(&bump(&v, Increment::None)), "1.0.0-alpha+001");
    }

    #[test]
    fn test_bump_major_resets_lower_components() {
        for text in SAMPLES {
            let v = parse(text).unwrap();
            let bumped = bump(&v, Increment::Major);
            assert_eq!(bumped.major, v.major + 1);
            assert_eq!(bumped.minor, 0);
            assert_eq!(bumped.patch, 0);
        }
    }

    #[test]
    fn test_bump_minor_keeps_major() {
        for text in SAMPLES {
            let v = parse(text).unwrap();
            let bumped = bump(&v, Increment::Minor);
            assert_eq!(bumped.major, v.major);
            assert_eq!(bumped.minor, v.minor + 1);
            assert_eq!(bumped.patch, 0);
        }
    }

    #[test]
    fn test_bump_patch_keeps_major_and_minor() {
        for text in SAMPLES {
            let v = parse(text).unwrap();
            let bumped = bump(&v, Increment::Patch);
            assert_eq!(bumped.major, v.major);
            assert_eq!(bumped.minor, v.minor);
            assert_eq!(bumped.patch, v.patch + 1);
        }
    }

    #[test]
    fn test_numeric_bump_drops_metadata() {
        let v = parse("1.2.3-rc.1+b5").unwrap();
        assert_eq!(format(&bump(&v, Increment::Patch)), "1.2.4");
        assert_eq!(format(&bump(&v, Increment::Minor)), "1.3.0");
        assert_eq!(format(&bump(&v, Increment::Major)), "2.0.0");
    }

    #[test]
    fn test_bump_saturates_at_max_component() {
        let v = parse("1.2.18446744073709551615").unwrap();
        assert_eq!(bump(&v, Increment::Patch), Version::new(1, 2, u64::MAX));

        let v = parse("18446744073709551615.4.5").unwrap();
        assert_eq!(bump(&v, Increment::Major), Version::new(u64::MAX, 0, 0));
    }

    #[test]
    fn test_component() {
        let v = parse("2.1.3").unwrap();
        assert_eq!(component(&v, Component::Major), 2);
        assert_eq!(component(&v, Component::Minor), 1);
        assert_eq!(component(&v, Component::Patch), 3);
    }

    #[test]
    fn test_resolve_next_increments() {
        let cases = [
            ("1.1.0", Increment::Major, "2.0.0"),
            ("0.0.1", Increment::Major, "1.0.0"),
            ("0.0.1", Increment::Minor, "0.1.0"),
            ("1.1.0", Increment::Minor, "1.2.0"),
            ("1.0.0", Increment::Patch, "1.0.1"),
            ("0.0.1", Increment::Patch, "0.0.2"),
            ("1.0.0", Increment::None, "1.0.0"),
        ];

        for (current, increment, expected) in cases {
            let next = resolve_next(current, &Directive::Increment(increment)).unwrap();
            assert_eq!(format(&next), expected, "{} {}", increment, current);
        }
    }

    #[test]
    fn test_resolve_next_manual_ignores_current() {
        let next = resolve_next("garbage", &Directive::Manual("1.2.3".to_string())).unwrap();
        assert_eq!(next, Version::new(1, 2, 3));
    }

    #[test]
    fn test_resolve_next_invalid_manual() {
        let err = resolve_next("1.0.0", &Directive::Manual("INVALID".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version: 'INVALID'");
    }

    #[test]
    fn test_resolve_next_invalid_current() {
        let err = resolve_next("1.0", &Directive::Increment(Increment::Patch)).unwrap_err();
        assert!(matches!(err, VersionctlError::InvalidVersion(ref t) if t == "1.0"));
    }

    #[test]
    fn test_parse_format_idempotent() {
        for text in SAMPLES.iter().chain(["1.0.0-beta.2", "3.4.5+exp.sha.5114f85"].iter()) {
            let once = parse(text).unwrap();
            assert_eq!(parse(&format(&once)).unwrap(), once);
        }
    }

    #[test]
    fn test_increment_from_str() {
        assert_eq!("MAJOR".parse::<Increment>().unwrap(), Increment::Major);
        assert_eq!("minor".parse::<Increment>().unwrap(), Increment::Minor);
        assert_eq!("Patch".parse::<Increment>().unwrap(), Increment::Patch);
        assert_eq!("NONE".parse::<Increment>().unwrap(), Increment::None);
        assert!("MICRO".parse::<Increment>().is_err());
    }
}
