use std::sync::LazyLock;

use regex::Regex;

static GUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
    )
    .unwrap()
});

static PAREN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// First GUID-shaped token in `text`.
pub fn extract_guid(text: &str) -> Option<&str> {
    GUID_RE.find(text).map(|m| m.as_str())
}

/// Contents of the first parenthesized segment in `text`. An empty `()` counts as absent.
pub fn extract_paren_name(text: &str) -> Option<&str> {
    PAREN_NAME_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
}

/// Parse output of `powercfg /list` into `(name, guid)` pairs in output order.
/// Lines lacking `marker`, a GUID, or a name are skipped.
///
/// ```text
/// Existing Power Schemes (* Active)
/// -----------------------------------
/// Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced) *
/// ```
pub fn parse_list<'a>(text: &'a str, marker: &str) -> Vec<(&'a str, &'a str)> {
    text.lines()
        .filter(|line| line.contains(marker))
        .filter_map(|line| {
            let guid = extract_guid(line)?;
            let name = extract_paren_name(line)?;
            Some((name, guid))
        })
        .collect()
}

/// Parse output of `powercfg /getactivescheme`
pub fn parse_active(text: &str) -> Option<&str> {
    extract_paren_name(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "Power Scheme GUID";

    #[test]
    fn parses_stock_listing() {
        let out = "\r\nExisting Power Schemes (* Active)\r\n-----------------------------------\r\n\
Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced) *\r\n\
Power Scheme GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c  (High performance)\r\n\
Power Scheme GUID: a1841308-3541-4fab-bc81-f71556f20b4a  (Power saver)\r\n";
        let rows = parse_list(out, MARKER);
        assert_eq!(
            rows,
            vec![
                ("Balanced", "381b4222-f694-41f0-9685-ff5bb260df2e"),
                ("High performance", "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c"),
                ("Power saver", "a1841308-3541-4fab-bc81-f71556f20b4a"),
            ]
        );
    }

    #[test]
    fn header_with_parens_is_not_a_plan() {
        // "(* Active)" has a name-shaped segment but no marker or GUID
        assert!(parse_list("Existing Power Schemes (* Active)", MARKER).is_empty());
    }

    #[test]
    fn drops_lines_missing_either_half() {
        let out = "Power Scheme GUID: not-a-guid  (Balanced)\n\
Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e\n\
Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  ()\n";
        assert!(parse_list(out, MARKER).is_empty());
    }

    #[test]
    fn marker_is_configurable() {
        let out = "GUID du mode de gestion de l'alimentation : 381b4222-f694-41f0-9685-ff5bb260df2e  (Utilisation normale)";
        assert!(parse_list(out, MARKER).is_empty());
        assert_eq!(
            parse_list(out, "GUID du mode"),
            vec![("Utilisation normale", "381b4222-f694-41f0-9685-ff5bb260df2e")]
        );
    }

    #[test]
    fn extractors_are_independent() {
        assert_eq!(extract_guid("(Balanced)"), None);
        assert_eq!(extract_paren_name("(Balanced)"), Some("Balanced"));
        assert_eq!(
            extract_guid("id 8C5E7FDA-E8BF-4A96-9A85-A6E23A8C635C"),
            Some("8C5E7FDA-E8BF-4A96-9A85-A6E23A8C635C")
        );
        assert_eq!(extract_paren_name("no name here"), None);
    }

    #[test]
    fn active_scheme_name() {
        let out = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)\r\n";
        assert_eq!(parse_active(out), Some("Balanced"));
        assert_eq!(parse_active("Access denied."), None);
        assert_eq!(parse_active(""), None);
    }
}
