use anyhow::{Context, Result};
use ring_grid::{ConfigError, Ruleset, MAX_START_CELLS};
use std::io::{BufRead, Write};

/// Asks for the settings left off the command line, one line of input each.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the ring automaton generator!")?;
        Ok(())
    }

    pub fn grid_lines(&mut self) -> Result<bool> {
        let answer = self.ask(&["Show grid lines? y/n (default: n)"])?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn ruleset(&mut self) -> Result<Ruleset> {
        let answer = self.ask(&[
            "Select a ruleset (1-6):",
            "1 - 3 are sum and product rulesets",
            "4 - 6 are experimental rulesets using bit manipulation",
        ])?;
        answer.parse().context("invalid ruleset")
    }

    pub fn start_cells(&mut self) -> Result<usize> {
        let prompt = format!("How many start cells to fill (1-{MAX_START_CELLS}):");
        let answer = self.ask(&[
            prompt.as_str(),
            "For rulesets 4 - 6 a single start cell is recommended",
        ])?;
        let count = answer
            .parse::<usize>()
            .with_context(|| format!("start cell count '{answer}' is not a number"))?;
        if !(1..=MAX_START_CELLS).contains(&count) {
            return Err(ConfigError::InvalidStartCells(count).into());
        }
        Ok(count)
    }

    fn ask(&mut self, lines: &[&str]) -> Result<String> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("failed to read answer")?;
        writeln!(self.output)?;
        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_answers_in_order() {
        let mut prompter = prompter("y\n3\n2\n");
        assert!(prompter.grid_lines().unwrap());
        assert_eq!(prompter.ruleset().unwrap(), Ruleset::Multiplicative);
        assert_eq!(prompter.start_cells().unwrap(), 2);
        let transcript = String::from_utf8(prompter.output).unwrap();
        assert!(transcript.contains("Select a ruleset (1-6):"));
        assert!(transcript.contains("(1-4)"));
    }

    #[test]
    fn grid_lines_default_to_off() {
        assert!(!prompter("\n").grid_lines().unwrap());
        assert!(!prompter("").grid_lines().unwrap());
        assert!(prompter("Y\n").grid_lines().unwrap());
    }

    #[test]
    fn rejects_invalid_answers() {
        assert!(prompter("9\n").ruleset().is_err());
        assert!(prompter("abc\n").start_cells().is_err());

        let err = prompter("5\n").start_cells().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidStartCells(5))
        );
        assert!(prompter("0\n").start_cells().is_err());
    }
}
