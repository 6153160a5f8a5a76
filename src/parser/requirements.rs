//! requirements.txt line matching
//!
//! Only the start of a line matters: a package name made of ASCII
//! alphanumerics, `-` and `_`, optionally followed by an exact `==` pin.
//!
//! Format examples:
//! - Pin: `requests==2.32.0`
//! - Bare name: `flask`

use regex::Regex;

/// Matcher for package names at the start of requirements lines
pub struct RequirementsParser {
    /// Regex for a pin being typed: `name==`
    pin_re: Regex,
    /// Regex for the leading package name: `name`
    name_re: Regex,
}

impl RequirementsParser {
    pub fn new() -> Self {
        Self {
            pin_re: Regex::new(r"^([0-9a-zA-Z\-_]+)==").expect("valid pin regex"),
            name_re: Regex::new(r"^([0-9a-zA-Z\-_]+)").expect("valid name regex"),
        }
    }

    /// Extracts the package name from text that starts with `name==`
    ///
    /// `line_prefix` is the text from the line start up to the cursor, so
    /// this returns a name only once the cursor is past the `==`.
    pub fn pinned_package<'a>(&self, line_prefix: &'a str) -> Option<&'a str> {
        self.pin_re
            .captures(line_prefix)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extracts the package name at the start of a line, pinned or not
    pub fn leading_package<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.name_re.find(line).map(|m| m.as_str())
    }
}

impl Default for RequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("requests==", Some("requests"))]
    #[case("requests==2.3", Some("requests"))]
    #[case("Flask_Login==", Some("Flask_Login"))]
    #[case("python-dateutil==", Some("python-dateutil"))]
    #[case("requests", None)]
    #[case("requests=", None)]
    #[case("requests>=", None)]
    #[case("  requests==", None)]
    #[case("requests[socks]==", None)]
    #[case("# requests==", None)]
    #[case("", None)]
    fn pinned_package_returns_expected(#[case] line_prefix: &str, #[case] expected: Option<&str>) {
        let parser = RequirementsParser::new();
        assert_eq!(parser.pinned_package(line_prefix), expected);
    }

    #[rstest]
    #[case("flask==2.0.1", Some("flask"))]
    #[case("flask", Some("flask"))]
    #[case("flask>=2.0", Some("flask"))]
    #[case("zope.interface==6.0", Some("zope"))]
    #[case("requests[socks]==2.32.0", Some("requests"))]
    #[case("-r base.txt", Some("-r"))]
    #[case("# comment", None)]
    #[case("   flask", None)]
    #[case("", None)]
    fn leading_package_returns_expected(#[case] line: &str, #[case] expected: Option<&str>) {
        let parser = RequirementsParser::new();
        assert_eq!(parser.leading_package(line), expected);
    }
}
