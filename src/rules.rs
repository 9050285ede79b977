use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, thiserror::Error)]
#[error("Failed to parse pair rule from '{0}'")]
pub struct ParseRuleError(String);

lazy_static! {
    static ref RULE_REGEX: Regex =
        Regex::new(r"^(\S+)\s*->\s*(\S+)$").expect("valid pattern");
}

/// Builds a key-to-value mapping from `<key> -> <value>` lines, skipping
/// blank lines. A key repeated on a later line replaces the earlier value.
pub fn parse_rules<'iter, Iter>(
    lines: Iter,
) -> Result<HashMap<String, String>, ParseRuleError>
where
    Iter: Iterator<Item = &'iter str>,
{
    let mut rules = HashMap::new();
    for line in lines.map(str::trim) {
        if line.is_empty() {
            continue;
        }

        let capture = RULE_REGEX
            .captures(line)
            .ok_or_else(|| ParseRuleError(line.to_owned()))?;
        match (capture.get(1), capture.get(2)) {
            (Some(key), Some(value)) => {
                rules.insert(
                    key.as_str().to_owned(),
                    value.as_str().to_owned(),
                );
            }
            _ => return Err(ParseRuleError(line.to_owned())),
        }
    }
    Ok(rules)
}
