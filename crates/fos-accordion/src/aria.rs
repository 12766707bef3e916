//! ARIA Support
//!
//! Roles, attribute names and value conventions the accordion reads from
//! and writes to its markup.

/// `aria-controls` on a header control, naming its panel id
pub const ARIA_CONTROLS: &str = "aria-controls";
/// `aria-expanded` on a header control
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// `aria-hidden` on a panel
pub const ARIA_HIDDEN: &str = "aria-hidden";
/// `aria-disabled` on a header control
pub const ARIA_DISABLED: &str = "aria-disabled";
/// `aria-level` marks a heading-like element
pub const ARIA_LEVEL: &str = "aria-level";
pub const ROLE: &str = "role";
pub const TABINDEX: &str = "tabindex";
/// Headers join the sequential tab order
pub const HEADER_TABINDEX: &str = "0";
pub const DISABLED: &str = "disabled";
pub const ID: &str = "id";
pub const TYPE: &str = "type";

/// Per-header "start expanded" marker, removed once mounted
pub const DATA_EXPAND: &str = "data-expand";
/// Container marker enabling multiple open panels
pub const DATA_MULTISELECTABLE: &str = "data-multiselectable";

/// The subset of ARIA roles the accordion cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Button,
    Heading,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "heading" => Self::Heading,
            _ => return None,
        })
    }
}

/// `h1`..`h6`, case-insensitive
pub fn is_heading_tag(tag: &str) -> bool {
    let tag = tag.as_bytes();
    tag.len() == 2 && tag[0].eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(&tag[1])
}

/// Read an ARIA boolean. Only the literal `"true"` counts.
pub fn parse_bool(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Serialize an ARIA boolean
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Native form controls that fire a second focus event when activated
pub fn is_toggle_input(tag: &str, input_type: Option<&str>) -> bool {
    tag.eq_ignore_ascii_case("input")
        && matches!(input_type.map(str::to_ascii_lowercase).as_deref(), Some("radio" | "checkbox"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AriaRole::parse("button"), Some(AriaRole::Button));
        assert_eq!(AriaRole::parse("Heading"), Some(AriaRole::Heading));
        assert_eq!(AriaRole::parse("tablist"), None);
    }

    #[test]
    fn test_heading_tags() {
        assert!(is_heading_tag("h1"));
        assert!(is_heading_tag("H6"));
        assert!(!is_heading_tag("h7"));
        assert!(!is_heading_tag("header"));
        assert!(!is_heading_tag("div"));
    }

    #[test]
    fn test_aria_bool() {
        assert!(parse_bool(Some("true")));
        assert!(!parse_bool(Some("TRUE")));
        assert!(!parse_bool(None));
        assert_eq!(bool_str(false), "false");
    }

    #[test]
    fn test_toggle_input() {
        assert!(is_toggle_input("input", Some("radio")));
        assert!(is_toggle_input("INPUT", Some("Checkbox")));
        assert!(!is_toggle_input("input", Some("text")));
        assert!(!is_toggle_input("button", Some("checkbox")));
    }
}
