//! Interactive collection of chamber dimensions.
//!
//! Prompts read from any `BufRead` and write to any `Write`, so the whole
//! dialogue runs against in-memory buffers in tests.

use std::io::{BufRead, Write};

use forge_core::input::{validate_ranges, ChamberInput, DoorConfig, InputWarning};
use forge_core::{ForgeError, ForgeResult};
use tracing::{debug, warn};

/// Result of a collection dialogue
#[derive(Debug, Clone, PartialEq)]
pub enum CollectOutcome {
    Collected(ChamberInput),
    /// The user declined to proceed past warnings
    Cancelled,
}

pub struct Collector<R, W> {
    reader: R,
    writer: W,
    verbose: bool,
}

fn terminal_error(operation: &str, e: std::io::Error) -> ForgeError {
    ForgeError::file_error(operation, "terminal", e.to_string())
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(reader: R, writer: W, verbose: bool) -> Self {
        Collector { reader, writer, verbose }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) -> ForgeResult<()> {
        writeln!(self.writer, "{}", text).map_err(|e| terminal_error("write", e))
    }

    /// Show a prompt and read one trimmed line. End of input reads as empty.
    fn ask(&mut self, prompt: &str) -> ForgeResult<String> {
        write!(self.writer, "{}", prompt).map_err(|e| terminal_error("write", e))?;
        self.writer.flush().map_err(|e| terminal_error("flush", e))?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| terminal_error("read", e))?;
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, prompt: &str, field: &str, default: f64) -> ForgeResult<f64> {
        let entry = self.ask(prompt)?;
        if entry.is_empty() {
            return Ok(default);
        }
        entry
            .parse::<f64>()
            .map_err(|_| ForgeError::invalid_numeric(field, entry.as_str()))
    }

    fn ask_door(&mut self) -> ForgeResult<DoorConfig> {
        self.say("")?;
        self.say("  Door Configuration:")?;
        for door in DoorConfig::ALL {
            self.say(&format!("    {}. {}", door.menu_choice(), door.display_name()))?;
        }

        let default = DoorConfig::default();
        let entry = self.ask(&format!("  Select [{}]: ", default.menu_choice()))?;
        if entry.is_empty() {
            return Ok(default);
        }
        let choice: u8 = entry
            .parse()
            .map_err(|_| ForgeError::invalid_numeric("door_config", entry.as_str()))?;
        DoorConfig::from_menu_choice(choice).ok_or_else(|| {
            ForgeError::invalid_input("door_config", entry.as_str(), "Select 1, 2 or 3")
        })
    }

    /// Run the full dialogue: dimensions, door, precondition, warnings.
    pub fn collect(&mut self) -> ForgeResult<CollectOutcome> {
        let defaults = ChamberInput::default();

        self.say(&"=".repeat(70))?;
        self.say("   INTERACTIVE FORGE DESIGNER")?;
        self.say("   Ribbon Burner Forge Engineering Suite")?;
        self.say(&"=".repeat(70))?;
        self.say("")?;
        self.say("Enter your desired INTERNAL chamber dimensions.")?;
        self.say("(Press Enter to accept default values shown in brackets)")?;
        self.say("")?;

        let width = self.ask_number(
            &format!("  Internal Width  (inches) [{}]:  ", defaults.width_in),
            "width_in",
            defaults.width_in,
        )?;
        let height = self.ask_number(
            &format!("  Internal Height (inches) [{}]:  ", defaults.height_in),
            "height_in",
            defaults.height_in,
        )?;
        let length = self.ask_number(
            &format!("  Internal Length (inches) [{}]: ", defaults.length_in),
            "length_in",
            defaults.length_in,
        )?;
        self.say("")?;
        let insulation = self.ask_number(
            &format!("  Insulation Thickness (inches) [{}]: ", defaults.insulation_in),
            "insulation_in",
            defaults.insulation_in,
        )?;
        let door = self.ask_door()?;

        let input = ChamberInput::new(width, height, length, insulation, door);
        input.check_precondition()?;
        debug!(?input, "collected chamber input");

        let warnings = validate_ranges(&input);
        if !self.confirm_warnings(&warnings)? {
            self.say("Design cancelled.")?;
            return Ok(CollectOutcome::Cancelled);
        }

        if self.verbose {
            self.echo(&input)?;
        }
        Ok(CollectOutcome::Collected(input))
    }

    /// Print advisory warnings and ask whether to proceed.
    ///
    /// Returns `true` with no prompt when there is nothing to warn about.
    /// Only an empty answer or `y` (either case) proceeds.
    pub fn confirm_warnings(&mut self, warnings: &[InputWarning]) -> ForgeResult<bool> {
        if warnings.is_empty() {
            return Ok(true);
        }

        self.say("")?;
        self.say("[!] WARNINGS:")?;
        for warning in warnings {
            warn!(%warning, "input outside recommended range");
            self.say(&format!("    - {}", warning))?;
        }
        self.say("")?;

        let answer = self.ask("Proceed anyway? (y/n) [y]: ")?.to_lowercase();
        Ok(matches!(answer.as_str(), "" | "y"))
    }

    fn echo(&mut self, input: &ChamberInput) -> ForgeResult<()> {
        self.say("")?;
        self.say(&format!(
            "  Using: {}\" W x {}\" H x {}\" L, {}\" insulation, {}",
            input.width_in,
            input.height_in,
            input.length_in,
            input.insulation_in,
            input.door_config.display_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, verbose: bool) -> (ForgeResult<CollectOutcome>, String) {
        let mut collector = Collector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), verbose);
        let outcome = collector.collect();
        let output = String::from_utf8(collector.into_writer()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_all_defaults() {
        let (outcome, output) = run("\n\n\n\n\n", false);
        assert_eq!(outcome.unwrap(), CollectOutcome::Collected(ChamberInput::default()));
        assert!(output.contains("Internal Width  (inches) [6]:"));
        assert!(output.contains("Internal Length (inches) [14]:"));
        assert!(output.contains("3. Side loading (one end open)"));
        assert!(!output.contains("WARNINGS"));
    }

    #[test]
    fn test_explicit_values() {
        let (outcome, _) = run("8\n6\n18\n2.5\n2\n", false);
        assert_eq!(
            outcome.unwrap(),
            CollectOutcome::Collected(ChamberInput::new(8.0, 6.0, 18.0, 2.5, DoorConfig::FrontAndRear))
        );
    }

    #[test]
    fn test_end_of_input_takes_defaults() {
        let (outcome, _) = run("", false);
        assert_eq!(outcome.unwrap(), CollectOutcome::Collected(ChamberInput::default()));
    }

    #[test]
    fn test_non_numeric_is_fatal() {
        let (outcome, _) = run("6\nabc\n", false);
        let err = outcome.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC_INPUT");
        assert!(err.to_string().contains("height_in"));
    }

    #[test]
    fn test_door_choice_out_of_menu() {
        let (outcome, _) = run("\n\n\n\n5\n", false);
        assert_eq!(outcome.unwrap_err().error_code(), "INVALID_INPUT");

        let (outcome, _) = run("\n\n\n\nfront\n", false);
        assert_eq!(outcome.unwrap_err().error_code(), "INVALID_NUMERIC_INPUT");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let (outcome, _) = run("0\n\n\n\n\n", false);
        assert_eq!(outcome.unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_warning_accepted_by_default() {
        let (outcome, output) = run("2\n\n\n\n\n\n", false);
        assert_eq!(
            outcome.unwrap(),
            CollectOutcome::Collected(ChamberInput::new(2.0, 6.0, 14.0, 2.0, DoorConfig::FrontOnly))
        );
        assert!(output.contains("[!] WARNINGS:"));
        assert!(output.contains("- Width 2\" outside typical range (3-12\")"));
        assert!(output.contains("Proceed anyway? (y/n) [y]: "));
    }

    #[test]
    fn test_warning_declined_cancels() {
        let (outcome, output) = run("2\n\n\n\n\nn\n", false);
        assert_eq!(outcome.unwrap(), CollectOutcome::Cancelled);
        assert!(output.contains("Design cancelled."));
    }

    #[test]
    fn test_only_y_proceeds_past_warnings() {
        let (outcome, _) = run("2\n\n\n\n\nY\n", false);
        assert!(matches!(outcome.unwrap(), CollectOutcome::Collected(_)));

        let (outcome, output) = run("2\n\n\n\n\nyes\n", false);
        assert_eq!(outcome.unwrap(), CollectOutcome::Cancelled);
        assert!(output.contains("Design cancelled."));
    }

    #[test]
    fn test_small_chamber_warning() {
        // 4 x 4 x 6 = 96 ci
        let (outcome, output) = run("4\n4\n6\n\n\ny\n", false);
        assert!(matches!(outcome.unwrap(), CollectOutcome::Collected(_)));
        assert!(output.contains("Very small chamber (96 ci)"));
    }

    #[test]
    fn test_verbose_echoes_input() {
        let (_, quiet) = run("\n\n\n\n\n", false);
        assert!(!quiet.contains("Using:"));

        let (_, verbose) = run("\n\n\n\n3\n", true);
        assert!(verbose.contains("Using: 6\" W x 6\" H x 14\" L, 2\" insulation, Side loading (one end open)"));
    }

    #[test]
    fn test_confirm_without_warnings_asks_nothing() {
        let mut collector = Collector::new(Cursor::new(Vec::new()), Vec::new(), false);
        assert!(collector.confirm_warnings(&[]).unwrap());
        assert!(collector.into_writer().is_empty());
    }
}
