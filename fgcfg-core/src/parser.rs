use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::record::{KeyOrder, Record};

/// Errors that can occur while loading a configuration file for parsing.
///
/// Malformed or unexpected lines are never errors; the parser silently
/// ignores anything it does not recognize.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Rule for a composite field whose value packs two sub-values separated by
/// a space, such as the address variant's `subnet` field holding both an IP
/// address and a subnet mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRule {
    /// Field whose value is divided.
    pub source_key: String,
    /// Column receiving the part before the first space.
    pub first: String,
    /// Column receiving the part after the first space.
    pub second: String,
}

/// Parameterization of one converter variant: which block of the
/// configuration to extract, and whether one of its fields is composite.
///
/// The address and VIP variants diverge only here; all scanning behavior is
/// shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockProfile {
    /// Block-entry marker, matched case-insensitively against trimmed lines.
    pub block_keyword: String,
    /// Optional composite-field split rule. `None` leaves every value intact.
    pub split: Option<SplitRule>,
}

impl BlockProfile {
    /// Profile for `config firewall address` objects. With `split_ip_subnet`
    /// the `subnet` field is additionally divided into `ip_addr` and
    /// `subnet_mask` columns.
    pub fn addresses(split_ip_subnet: bool) -> Self {
        Self {
            block_keyword: "config firewall address".to_string(),
            split: split_ip_subnet.then(|| SplitRule {
                source_key: "subnet".to_string(),
                first: "ip_addr".to_string(),
                second: "subnet_mask".to_string(),
            }),
        }
    }

    /// Profile for `config firewall vip` objects. VIP settings have no
    /// composite field.
    pub fn vips() -> Self {
        Self {
            block_keyword: "config firewall vip".to_string(),
            split: None,
        }
    }
}

/// Complete result of one parsing pass: committed records in encounter order
/// and the global first-seen key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub keys: KeyOrder,
}

/// Stateful line scanner extracting records from one block type.
///
/// The only state carried across lines is an "inside target block" flag and
/// the accumulator for the record currently being built. Records are
/// committed when their `next` terminator is reached; an accumulator that is
/// still open when the block ends (or input runs out) is dropped.
#[derive(Debug, Clone)]
pub struct BlockParser {
    profile: BlockProfile,
}

impl BlockParser {
    pub fn new(profile: BlockProfile) -> Self {
        Self { profile }
    }

    /// Scan the whole input in a single pass.
    ///
    /// Keywords (`config ...`, `edit`, `set`, `next`, `end`) match
    /// case-insensitively; field values keep their original case. Lines that
    /// match nothing, and entire unrelated blocks, are skipped.
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let mut in_block = false;
        let mut current = Record::default();
        let mut outcome = ParseOutcome::default();

        for raw in input.lines() {
            let line = raw.trim();

            if line.eq_ignore_ascii_case(&self.profile.block_keyword) {
                in_block = true;
                continue;
            }

            if !in_block {
                continue;
            }

            if line.eq_ignore_ascii_case("end") {
                // Unterminated accumulator: dropped, never committed.
                current = Record::default();
                in_block = false;
                continue;
            }

            if line.eq_ignore_ascii_case("next") {
                outcome.records.push(current.clone());
                current = Record::default();
                continue;
            }

            if let Some(rest) = keyword_rest(line, "edit") {
                if let Some(name) = quoted_name(rest.trim()) {
                    outcome.keys.register("name");
                    current.insert("name", name);
                }
                continue;
            }

            if let Some(rest) = keyword_rest(line, "set") {
                if let Some((key, value)) = split_setting(rest.trim_start()) {
                    self.store_setting(&mut current, &mut outcome.keys, key, &value);
                }
            }
        }

        outcome
    }

    /// Read a configuration file fully, then parse it.
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome, ParseError> {
        let input = fs::read_to_string(path)?;
        Ok(self.parse(&input))
    }

    fn store_setting(&self, record: &mut Record, keys: &mut KeyOrder, key: &str, value: &str) {
        keys.register(key);

        if let Some(rule) = &self.profile.split {
            if key == rule.source_key {
                keys.register(&rule.first);
                keys.register(&rule.second);
                if let Some((first, second)) = value.split_once(' ') {
                    record.insert(rule.first.as_str(), first);
                    record.insert(rule.second.as_str(), second);
                }
            }
        }

        record.insert(key, value);
    }
}

/// Match a leading keyword case-insensitively and return the remainder.
/// The keyword must be followed by whitespace.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.get(keyword.len()..)?;
    if !line[..keyword.len()].eq_ignore_ascii_case(keyword) {
        return None;
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest)
}

/// Extract the text between the surrounding double quotes of an `edit`
/// identifier. Unquoted identifiers (numeric policy ids, for instance) do
/// not name a record.
fn quoted_name(rest: &str) -> Option<&str> {
    rest.strip_prefix('"')?.strip_suffix('"')
}

/// Divide a `set` remainder into key and value. A key with no value after it
/// matches nothing. Embedded double quotes are stripped from the value.
fn split_setting(rest: &str) -> Option<(&str, String)> {
    let (key, value) = rest.split_once(char::is_whitespace)?;
    Some((key, value.trim().replace('"', "")))
}

#[cfg(test)]
mod tests {
    use super::{keyword_rest, quoted_name, split_setting};

    #[test]
    fn keyword_rest_is_case_insensitive_and_needs_separator() {
        assert_eq!(keyword_rest("SET subnet 10.0.0.0", "set"), Some(" subnet 10.0.0.0"));
        assert_eq!(keyword_rest("set", "set"), None);
        assert_eq!(keyword_rest("settings on", "set"), None);
    }

    #[test]
    fn quoted_name_requires_both_quotes() {
        assert_eq!(quoted_name("\"SRV1\""), Some("SRV1"));
        assert_eq!(quoted_name("\"\""), Some(""));
        assert_eq!(quoted_name("SRV1"), None);
        assert_eq!(quoted_name("\""), None);
    }

    #[test]
    fn split_setting_strips_quotes_from_value_only() {
        assert_eq!(
            split_setting("comment \"main site\""),
            Some(("comment", "main site".to_string()))
        );
        assert_eq!(split_setting("allow-routing"), None);
    }
}
