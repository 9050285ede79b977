use std::path::PathBuf;

use anyhow::Result;
use colored::*;
use structopt::{self, StructOpt};

use puzzle_input::{Inputs, Puzzle};

#[derive(Debug, StructOpt)]
struct PuzzleInput {
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print an input file line by line.
    Lines(Options),
    /// Print an input file section by section.
    Sections(Options),
    /// Print the leading number list and the blocks after it.
    Records(Options),
}

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(required(true))]
    day: u32,

    #[structopt(long)]
    example: bool,

    #[structopt(long, parse(from_os_str))]
    root: Option<PathBuf>,
}

impl Options {
    fn inputs(&self) -> Inputs {
        match &self.root {
            Some(root) => Inputs::with_root(root),
            None => Inputs::new(),
        }
    }

    fn puzzle(&self) -> Puzzle {
        if self.example {
            Puzzle::day(self.day).example()
        } else {
            Puzzle::day(self.day)
        }
    }
}

fn main() {
    let opt = PuzzleInput::from_args();
    if let Err(err) = match opt.command {
        Command::Lines(options) => run_lines(&options),
        Command::Sections(options) => run_sections(&options),
        Command::Records(options) => run_records(&options),
    } {
        eprintln!("{}", err);
    }
}

fn run_lines(options: &Options) -> Result<()> {
    let inputs = options.inputs();
    let puzzle = options.puzzle();
    println!("{}", inputs.resolve(puzzle).display().to_string().bold());
    let lines = match inputs.lines(puzzle, |line| Ok(line.to_owned()))? {
        Some(lines) => lines,
        None => return Ok(()),
    };
    for (index, line) in lines.iter().enumerate() {
        println!("{:>4} {}", index + 1, line);
    }
    println!("{} lines", lines.len().to_string().bold());
    Ok(())
}

fn run_sections(options: &Options) -> Result<()> {
    let inputs = options.inputs();
    let puzzle = options.puzzle();
    println!("{}", inputs.resolve(puzzle).display().to_string().bold());
    let sections = match inputs.raw_sections(puzzle)? {
        Some(sections) => sections,
        None => return Ok(()),
    };
    for (index, section) in sections.iter().enumerate() {
        println!("{}", format!("section {}", index + 1).bold());
        println!("{}", section);
    }
    println!("{} sections", sections.len().to_string().bold());
    Ok(())
}

fn run_records(options: &Options) -> Result<()> {
    let inputs = options.inputs();
    let puzzle = options.puzzle();
    println!("{}", inputs.resolve(puzzle).display().to_string().bold());
    let (numbers, blocks) = match inputs.delimited_records(puzzle)? {
        Some(records) => records,
        None => return Ok(()),
    };
    println!(
        "{}: {}",
        "numbers".bold(),
        numbers
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    for (index, block) in blocks.iter().enumerate() {
        println!(
            "{} ({} lines)",
            format!("block {}", index + 1).bold(),
            block.lines().count()
        );
        println!("{}", block);
    }
    Ok(())
}
