/// Extract blocklist entries from plain-text content.
///
/// One entry per line. Blank lines and `#` comments (whole-line or trailing)
/// are skipped. Hosts-file lines such as `0.0.0.0 ads.example.com` yield
/// their last field.
pub fn parse_blocklist(content: &str) -> Vec<String> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<String> {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let entry = line.split_whitespace().last()?;
    if is_hosts_address(entry) {
        return None;
    }
    Some(entry.to_string())
}

/// A lone address column (`0.0.0.0` with no name) is not a rule.
fn is_hosts_address(field: &str) -> bool {
    field.parse::<std::net::IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_plain_domains() {
        let domains = parse_blocklist("example.com\n*.ads.com\n");
        assert_eq!(domains, vec!["example.com", "*.ads.com"]);
    }

    #[test]
    fn should_skip_comments_and_blank_lines() {
        let domains = parse_blocklist("# header\n\n   \nads.test # inline\n");
        assert_eq!(domains, vec!["ads.test"]);
    }

    #[test]
    fn should_take_last_field_of_hosts_lines() {
        let domains = parse_blocklist("0.0.0.0 ads.example.com\n127.0.0.1\ttracking.example.com\n");
        assert_eq!(domains, vec!["ads.example.com", "tracking.example.com"]);
    }

    #[test]
    fn should_ignore_bare_addresses() {
        assert!(parse_blocklist("0.0.0.0\n::1\n").is_empty());
    }

    #[test]
    fn should_handle_crlf_line_endings() {
        let domains = parse_blocklist("a.test\r\nb.test\r\n");
        assert_eq!(domains, vec!["a.test", "b.test"]);
    }
}
