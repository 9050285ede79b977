use std::{fmt::Display, str::FromStr};

#[derive(Debug, thiserror::Error)]
#[error("Failed to parse fold from '{0}'")]
pub struct ParseFoldError(String);
fn parse_error(text: &str) -> ParseFoldError {
    ParseFoldError(text.to_owned())
}

const FOLD_ALONG: &str = "fold along ";

/// One fold instruction. A `y=` line folds along a horizontal crease, an
/// `x=` line along a vertical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fold {
    Horizontal(usize),
    Vertical(usize),
}

impl Fold {
    pub fn axis(&self) -> char {
        match self {
            Fold::Horizontal(_) => 'y',
            Fold::Vertical(_) => 'x',
        }
    }

    pub fn value(&self) -> usize {
        match self {
            Fold::Horizontal(value) | Fold::Vertical(value) => *value,
        }
    }
}

impl FromStr for Fold {
    type Err = ParseFoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s
            .trim()
            .strip_prefix(FOLD_ALONG)
            .ok_or_else(|| parse_error(s))?;
        let index = text.rfind('=').ok_or_else(|| parse_error(s))?;
        if index != 1 {
            return Err(parse_error(s));
        }
        let value = text[(index + 1)..]
            .parse::<usize>()
            .map_err(|_| parse_error(s))?;
        match &text[..index] {
            "y" => Ok(Fold::Horizontal(value)),
            "x" => Ok(Fold::Vertical(value)),
            _ => Err(parse_error(s)),
        }
    }
}

impl Display for Fold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fold::Horizontal(value) => write!(f, "y={}", value),
            Fold::Vertical(value) => write!(f, "x={}", value),
        }
    }
}

/// Parses every fold instruction in an instruction block, skipping blank
/// lines, preserving instruction order.
pub fn parse_folds<'iter, Iter>(lines: Iter) -> Result<Vec<Fold>, ParseFoldError>
where
    Iter: Iterator<Item = &'iter str>,
{
    let mut folds = Vec::new();
    for line in lines.map(str::trim) {
        if line.is_empty() {
            continue;
        }
        folds.push(line.parse()?);
    }
    Ok(folds)
}
