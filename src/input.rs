use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

/// Identifies one puzzle's input file: a day number plus an example flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puzzle {
    day: u32,
    example: bool,
}

impl Puzzle {
    pub fn day(day: u32) -> Puzzle {
        Puzzle {
            day,
            example: false,
        }
    }

    /// Switches this identifier to the `_example` variant of the input.
    pub fn example(self) -> Puzzle {
        Puzzle {
            example: true,
            ..self
        }
    }

    fn file_name(&self) -> String {
        if self.example {
            format!("day_{}_example.txt", self.day)
        } else {
            format!("day_{}.txt", self.day)
        }
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.example {
            write!(f, "day {} (example)", self.day)
        } else {
            write!(f, "day {}", self.day)
        }
    }
}

/// Resolves puzzle identifiers against an input directory and loads the
/// files behind them. Every load is one open-read-close cycle; the loader
/// keeps no state between calls.
///
/// A missing input file is reported on stderr and surfaces as `Ok(None)`;
/// every other failure is an `Err` for the caller to handle.
#[derive(Clone, Debug)]
pub struct Inputs {
    root: PathBuf,
}

impl Inputs {
    /// A loader over the conventional `inputs/` directory.
    pub fn new() -> Inputs {
        Inputs::with_root("inputs")
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Inputs {
        Inputs { root: root.into() }
    }

    /// The file path a puzzle identifier maps to.
    pub fn resolve(&self, puzzle: Puzzle) -> PathBuf {
        self.root.join(puzzle.file_name())
    }

    /// Reads the input line by line, trims each line and feeds it through
    /// `transform`. Output order matches file order, one value per line.
    pub fn lines<T, F>(
        &self,
        puzzle: Puzzle,
        mut transform: F,
    ) -> Result<Option<Vec<T>>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        let file_path = self.resolve(puzzle);
        let file = match open(&file_path)? {
            Some(file) => file,
            None => return Ok(None),
        };
        let mut values = Vec::new();
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.with_context(|| {
                format!("failed to read line from '{}'", file_path.display())
            })?;
            let line = line.trim();
            values.push(transform(line).with_context(|| {
                format!("failed to transform line '{}'", line)
            })?);
        }
        Ok(Some(values))
    }

    /// Splits the input on blank lines and applies `transforms[i]` to the
    /// i-th section. Sections without a matching transformer are an error,
    /// unused trailing transformers are not.
    pub fn sections<T>(
        &self,
        puzzle: Puzzle,
        transforms: &[&dyn Fn(&str) -> Result<T>],
    ) -> Result<Option<Vec<T>>> {
        let sections = match self.raw_sections(puzzle)? {
            Some(sections) => sections,
            None => return Ok(None),
        };
        if sections.len() > transforms.len() {
            return Err(anyhow!(
                "input for {} has {} sections but only {} transformers were supplied",
                puzzle,
                sections.len(),
                transforms.len()
            ));
        }
        let mut values = Vec::new();
        for (index, section) in sections.iter().enumerate() {
            values.push(transforms[index](section).with_context(|| {
                format!("failed to transform section {}", index)
            })?);
        }
        Ok(Some(values))
    }

    /// Splits the input on blank lines and returns the untransformed
    /// section texts.
    pub fn raw_sections(&self, puzzle: Puzzle) -> Result<Option<Vec<String>>> {
        let file_path = self.resolve(puzzle);
        let mut file = match open(&file_path)? {
            Some(file) => file,
            None => return Ok(None),
        };
        let mut content = String::new();
        file.read_to_string(&mut content).with_context(|| {
            format!("failed to read '{}'", file_path.display())
        })?;
        let content = content.trim_end_matches('\n');
        Ok(Some(content.split("\n\n").map(str::to_owned).collect()))
    }

    /// Reads an input whose first section is a comma-separated number list
    /// and whose remaining sections are opaque blocks, like a bingo file
    /// with its draw order followed by boards.
    pub fn delimited_records(
        &self,
        puzzle: Puzzle,
    ) -> Result<Option<(Vec<i64>, Vec<String>)>> {
        let sections = match self.raw_sections(puzzle)? {
            Some(sections) => sections,
            None => return Ok(None),
        };
        if sections.is_empty() {
            return Err(anyhow!("input for {} has no sections", puzzle));
        }
        let numbers = parse_numbers(&sections[0])?;
        let blocks = sections[1..].to_vec();
        Ok(Some((numbers, blocks)))
    }
}

impl Default for Inputs {
    fn default() -> Inputs {
        Inputs::new()
    }
}

fn open(file_path: &Path) -> Result<Option<File>> {
    match File::open(file_path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            eprintln!("input file '{}' not found", file_path.display());
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to open file '{}'", file_path.display())
        }),
    }
}

fn parse_numbers(line: &str) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();
    for item in line.trim().split(',') {
        numbers.push(item.parse().with_context(|| {
            format!("failed to parse '{}' as a number", item)
        })?);
    }
    Ok(numbers)
}
