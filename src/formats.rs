//! Checkers for the `format` keyword.
//!
//! Each format is a narrow predicate over one primitive kind, usually strings. The
//! `format` keyword looks them up by name; names nobody registered always pass.
use crate::primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
use chrono::{DateTime, NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::{
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};
use url::{ParseError, Url};

lazy_static::lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}\z").expect("Is a valid regex");
    static ref TIME_RE: Regex = Regex::new(r"^\d{2}:\d{2}:\d{2}\z").expect("Is a valid regex");
    static ref COLOR_RE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})\z").expect("Is a valid regex");
    static ref RELATIVE_BASE: Url = Url::parse("http://relative.invalid/").expect("Is a valid URL");
}

const CSS_COLORS: [&str; 17] = [
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "silver", "teal", "white", "yellow",
];

/// A checker for one value of the `format` keyword.
///
/// # Example
///
/// ```rust
/// use jsonschema_draft3::{FormatValidator, PrimitiveType, PrimitiveTypesBitMap};
/// use serde_json::Value;
///
/// struct Even;
///
/// impl FormatValidator for Even {
///     fn validate(&self, instance: &Value) -> Vec<String> {
///         match instance.as_u64() {
///             Some(value) if value % 2 == 0 => vec![],
///             _ => vec!["number is not even".to_string()],
///         }
///     }
///     fn instance_types(&self) -> PrimitiveTypesBitMap {
///         PrimitiveType::Integer.into()
///     }
/// }
/// ```
pub trait FormatValidator: Send + Sync {
    /// Messages describing why `instance` does not conform. Empty when it does.
    fn validate(&self, instance: &Value) -> Vec<String>;
    /// Kinds of instances this checker applies to. Others are never passed to it.
    fn instance_types(&self) -> PrimitiveTypesBitMap {
        PrimitiveType::String.into()
    }
}

/// A string format defined by a predicate, as registered through
/// [`ValidationOptions::with_format`](crate::ValidationOptions::with_format).
pub(crate) struct StringFormat<F> {
    name: String,
    check: F,
}

impl<F> StringFormat<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub(crate) fn new(name: impl Into<String>, check: F) -> StringFormat<F> {
        StringFormat {
            name: name.into(),
            check,
        }
    }
}

impl<F> FormatValidator for StringFormat<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, instance: &Value) -> Vec<String> {
        match instance.as_str() {
            Some(string) if !(self.check)(string) => {
                vec![format!(r#"string does not conform to format "{}""#, self.name)]
            }
            _ => vec![],
        }
    }
}

macro_rules! string_format {
    ($format:ident, $message:expr, $check:expr) => {
        struct $format;
        impl FormatValidator for $format {
            fn validate(&self, instance: &Value) -> Vec<String> {
                match instance.as_str() {
                    Some(string) if !$check(string) => vec![$message.to_string()],
                    _ => vec![],
                }
            }
        }
    };
}

string_format!(
    DateTimeFormat,
    "string is not a valid date-time",
    |string| DateTime::parse_from_rfc3339(string).is_ok()
);
string_format!(DateFormat, "string is not a valid date", |string| {
    DATE_RE.is_match(string) && NaiveDate::parse_from_str(string, "%Y-%m-%d").is_ok()
});
string_format!(TimeFormat, "string is not a valid time", |string| {
    TIME_RE.is_match(string) && NaiveTime::parse_from_str(string, "%H:%M:%S").is_ok()
});
string_format!(RegexFormat, "string is not a valid regex", |string| {
    Regex::new(string).is_ok()
});
string_format!(ColorFormat, "string is not a valid CSS 2.1 color", is_valid_color);
string_format!(UriFormat, "string is not a valid URI", is_valid_uri);
string_format!(EmailFormat, "string is not a valid email address", is_valid_email);
string_format!(IpV4Format, "string is not a valid IPv4 address", |string| {
    Ipv4Addr::from_str(string).is_ok()
});
string_format!(IpV6Format, "string is not a valid IPv6 address", |string| {
    Ipv6Addr::from_str(string).is_ok()
});
string_format!(HostNameFormat, "string is not a valid hostname", is_valid_hostname);

/// Milliseconds since the epoch. Applies to numbers.
struct UtcMillisecFormat;

impl FormatValidator for UtcMillisecFormat {
    fn validate(&self, instance: &Value) -> Vec<String> {
        match instance.as_f64() {
            Some(value) if value < 0.0 => vec!["number of milliseconds is negative".to_string()],
            _ => vec![],
        }
    }
    fn instance_types(&self) -> PrimitiveTypesBitMap {
        PrimitiveType::Number.into()
    }
}

fn is_valid_color(string: &str) -> bool {
    COLOR_RE.is_match(string)
        || CSS_COLORS
            .iter()
            .any(|color| color.eq_ignore_ascii_case(string))
}

/// Absolute URIs and relative references are both accepted.
fn is_valid_uri(string: &str) -> bool {
    match Url::parse(string) {
        Ok(_) => true,
        Err(ParseError::RelativeUrlWithoutBase) => {
            !string.chars().any(char::is_whitespace) && RELATIVE_BASE.join(string).is_ok()
        }
        Err(_) => false,
    }
}

fn is_valid_email(string: &str) -> bool {
    match string.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_valid_hostname(string: &str) -> bool {
    !(string.is_empty()
        || string.chars().count() > 255
        || string
            .chars()
            .any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
        || string.split('.').any(|label| {
            label.is_empty()
                || label.chars().count() > 63
                || label.starts_with('-')
                || label.ends_with('-')
        }))
        && idna::domain_to_unicode(string).1.is_ok()
}

/// The draft-03 format with this name.
pub(crate) fn builtin(name: &str) -> Option<&'static dyn FormatValidator> {
    match name {
        "date-time" => Some(&DateTimeFormat),
        "date" => Some(&DateFormat),
        "time" => Some(&TimeFormat),
        "utc-millisec" => Some(&UtcMillisecFormat),
        "regex" => Some(&RegexFormat),
        "color" => Some(&ColorFormat),
        "uri" => Some(&UriFormat),
        "email" => Some(&EmailFormat),
        "ip-address" => Some(&IpV4Format),
        "ipv6" => Some(&IpV6Format),
        "host-name" => Some(&HostNameFormat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("date-time", json!("2012-01-31T10:00:00Z"))]
    #[test_case("date-time", json!("2012-01-31T10:00:00+02:00"))]
    #[test_case("date", json!("2012-01-31"))]
    #[test_case("time", json!("23:59:59"))]
    #[test_case("utc-millisec", json!(1_325_376_000_000_u64))]
    #[test_case("utc-millisec", json!(1.5))]
    #[test_case("regex", json!("^a+$"))]
    #[test_case("color", json!("#fff"))]
    #[test_case("color", json!("#A0B1C2"))]
    #[test_case("color", json!("Maroon"))]
    #[test_case("uri", json!("http://json-schema.org/draft-03/schema#"))]
    #[test_case("uri", json!("a/b/c#/d"))]
    #[test_case("email", json!("foo@bar.com"))]
    #[test_case("ip-address", json!("127.0.0.1"))]
    #[test_case("ipv6", json!("::1"))]
    #[test_case("host-name", json!("www.example.com"))]
    fn valid(name: &str, instance: Value) {
        let format = builtin(name).expect("Is a built-in format");
        assert!(format.validate(&instance).is_empty());
    }

    #[test_case("date-time", json!("2012-01-31 10:00:00"), "string is not a valid date-time")]
    #[test_case("date", json!("2012-1-31"), "string is not a valid date")]
    #[test_case("date", json!("2012-02-30"), "string is not a valid date")]
    #[test_case("time", json!("24:00:00"), "string is not a valid time")]
    #[test_case("utc-millisec", json!(-1), "number of milliseconds is negative")]
    #[test_case("regex", json!("(unclosed"), "string is not a valid regex")]
    #[test_case("color", json!("#ffff"), "string is not a valid CSS 2.1 color")]
    #[test_case("color", json!("pink"), "string is not a valid CSS 2.1 color")]
    #[test_case("uri", json!("http://exa mple.com"), "string is not a valid URI")]
    #[test_case("email", json!("foo.bar.com"), "string is not a valid email address")]
    #[test_case("email", json!("@bar.com"), "string is not a valid email address")]
    #[test_case("ip-address", json!("127.0.0.256"), "string is not a valid IPv4 address")]
    #[test_case("ipv6", json!("127.0.0.1"), "string is not a valid IPv6 address")]
    #[test_case("host-name", json!("-example.com"), "string is not a valid hostname")]
    #[test_case("host-name", json!("a..b"), "string is not a valid hostname")]
    fn invalid(name: &str, instance: Value, expected: &str) {
        let format = builtin(name).expect("Is a built-in format");
        assert_eq!(format.validate(&instance), vec![expected.to_string()]);
    }

    #[test]
    fn unknown_format() {
        assert!(builtin("phone").is_none());
    }

    #[test]
    fn instance_kinds() {
        assert!(builtin("utc-millisec")
            .expect("Is a built-in format")
            .instance_types()
            .contains_instance(&json!(1)));
        assert!(!builtin("email")
            .expect("Is a built-in format")
            .instance_types()
            .contains_instance(&json!(1)));
    }

    #[test]
    fn custom_string_format() {
        let format = StringFormat::new("lowercase", |s: &str| s.chars().all(char::is_lowercase));
        assert!(format.validate(&json!("abc")).is_empty());
        assert_eq!(
            format.validate(&json!("aBc")),
            vec![r#"string does not conform to format "lowercase""#.to_string()]
        );
    }
}
