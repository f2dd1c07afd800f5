use anyhow::Result;
use lib::cli;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("{0}:{1}: no digits in line")]
    NoDigits(&'static str, usize),
}

const WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

fn main() -> Result<()> {
    cli::Opts::parse()?;

    let input = lib::input!("d01.txt");

    let mut count = 0;
    let mut part1 = 0;
    let mut part2 = 0;

    for (n, line) in input.lines() {
        part1 += calibration(line, false).ok_or(Error::NoDigits(input.path(), n))?;
        part2 += calibration(line, true).ok_or(Error::NoDigits(input.path(), n))?;
        count += 1;
    }

    log::info!("{}: {} lines", input.path(), count);

    println!("{part1}");
    println!("{part2}");
    Ok(())
}

/// First and last digit on the line, combined into a two-digit value. With
/// `words`, a spelled-out digit counts at the position its word starts, so
/// overlapping words each contribute.
fn calibration(line: &str, words: bool) -> Option<u32> {
    let mut first = None;
    let mut last = None;

    for (i, c) in line.char_indices() {
        let digit = c.to_digit(10).or_else(|| {
            if !words {
                return None;
            }

            WORDS
                .iter()
                .find(|&&(word, _)| line[i..].starts_with(word))
                .map(|&(_, digit)| digit)
        });

        if let Some(digit) = digit {
            if first.is_none() {
                first = Some(digit);
            }

            last = Some(digit);
        }
    }

    Some(first? * 10 + last?)
}
