//! # Forge Designer CLI
//!
//! Collects chamber dimensions (interactively, from flags, or from a TOML
//! design file), prints a design summary and writes the JSON record and the
//! PDF build guide.
//!
//! ```text
//! forge design                              # interactive prompts
//! forge design --width 8 --length 18 --json # flags, defaults for the rest
//! forge design --config forge.toml --formulas
//! forge check --config forge.toml           # summary only, no files
//! forge formulas -o FORMULAS.md
//! ```

mod collector;
mod logging;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use forge_core::config::{load_config, ChamberSection, DesignConfig};
use forge_core::export::{json_file_name, pdf_file_name, save_pdf, save_specs_json};
use forge_core::formulas::generate_formulas_markdown;
use forge_core::input::validate_ranges;
use forge_core::report::{render_build_guide, ReportOptions};
use forge_core::units::{format_inches, format_trimmed};
use forge_core::{compute_specs, ChamberInput, DoorConfig, ForgeError, ForgeSpecs};

use collector::{CollectOutcome, Collector};

#[derive(Parser, Debug)]
#[command(name = "forge", version)]
#[command(about = "Ribbon burner forge designer: build specs, cut lists and PDF build guides")]
struct Cli {
    /// Debug logging and echo of the collected input
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the chamber dimensions come from
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// TOML design file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Internal width (in)
    #[arg(long)]
    width: Option<f64>,

    /// Internal height (in)
    #[arg(long)]
    height: Option<f64>,

    /// Internal length (in)
    #[arg(long)]
    length: Option<f64>,

    /// Insulation thickness (in)
    #[arg(long)]
    insulation: Option<f64>,

    /// front-only, front-and-rear or side-loading (or 1-3)
    #[arg(long)]
    door: Option<DoorConfig>,

    /// Proceed without asking when values are outside recommended ranges
    #[arg(short, long)]
    yes: bool,
}

impl InputArgs {
    fn overrides(&self) -> ChamberSection {
        ChamberSection {
            width: self.width,
            height: self.height,
            length: self.length,
            insulation: self.insulation,
            door: self.door,
        }
    }

    /// A design file or any dimension flag skips the prompts
    fn is_programmatic(&self) -> bool {
        self.config.is_some() || !self.overrides().is_empty()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a design and write the build guide
    Design {
        #[command(flatten)]
        input: InputArgs,

        /// Also write forge_specs_<V>ci.json
        #[arg(long)]
        json: bool,

        /// Skip the PDF build guide
        #[arg(long)]
        no_pdf: bool,

        /// Directory for output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Append the formula reference to the build guide
        #[arg(long)]
        formulas: bool,
    },

    /// Compute a design and print the summary without writing files
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the formula reference as Markdown
    Formulas {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    debug!(?cli, "parsed command line");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, code) = failure_report(&err);
            eprintln!("{}", message);
            ExitCode::from(code)
        }
    }
}

/// Message and exit code for a failed run. Bad input or a bad design file
/// exits 2 with just the error; anything else exits 1 with the full chain.
fn failure_report(err: &anyhow::Error) -> (String, u8) {
    match err.downcast_ref::<ForgeError>() {
        Some(forge) if forge.is_user_error() => (format!("[ERROR] {}", forge), 2),
        _ => (format!("[ERROR] {:#}", err), 1),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Design {
            input,
            json,
            no_pdf,
            output_dir,
            formulas,
        } => {
            let Some((chamber, config)) = resolve_input(&input, cli.verbose)? else {
                return Ok(());
            };
            let plan = OutputPlan {
                directory: output_dir.unwrap_or(config.output.directory),
                json: json || config.output.json,
                pdf: !no_pdf && config.output.pdf,
                report: ReportOptions {
                    verbose: cli.verbose,
                    formulas_appendix: formulas || config.report.formulas_appendix,
                },
            };
            run_design(&chamber, &plan)?;
        }

        Commands::Check { input } => {
            let Some((chamber, _)) = resolve_input(&input, cli.verbose)? else {
                return Ok(());
            };
            let specs = compute_specs(&chamber);
            println!("{}", format_summary(&specs));
        }

        Commands::Formulas { output } => {
            let markdown = generate_formulas_markdown();
            match output {
                Some(path) => {
                    fs::write(&path, &markdown)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {} bytes to {}", markdown.len(), path.display());
                }
                None => print!("{}", markdown),
            }
        }
    }

    Ok(())
}

/// Produce the chamber input, or `None` if the user cancelled.
fn resolve_input(args: &InputArgs, verbose: bool) -> Result<Option<(ChamberInput, DesignConfig)>> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => DesignConfig::default(),
    };

    let stdin = io::stdin();
    let mut collector = Collector::new(stdin.lock(), io::stdout(), verbose);

    if !args.is_programmatic() {
        return Ok(match collector.collect()? {
            CollectOutcome::Collected(input) => Some((input, config)),
            CollectOutcome::Cancelled => None,
        });
    }

    let chamber = config.chamber.merged_with(&args.overrides()).to_input();
    chamber.check_precondition()?;
    debug!(?chamber, "resolved chamber input");

    let warnings = validate_ranges(&chamber);
    if args.yes {
        for warning in &warnings {
            eprintln!("[!] {}", warning);
        }
    } else if !collector.confirm_warnings(&warnings)? {
        println!("Design cancelled.");
        return Ok(None);
    }

    Ok(Some((chamber, config)))
}

struct OutputPlan {
    directory: PathBuf,
    json: bool,
    pdf: bool,
    report: ReportOptions,
}

fn run_design(chamber: &ChamberInput, plan: &OutputPlan) -> Result<()> {
    println!();
    println!("[*] Calculating forge specifications...");
    let specs = compute_specs(chamber);
    println!("{}", format_summary(&specs));

    if plan.json || plan.pdf {
        fs::create_dir_all(&plan.directory)
            .with_context(|| format!("creating output directory {}", plan.directory.display()))?;
    }

    if plan.json {
        let path = plan.directory.join(json_file_name(&specs));
        save_specs_json(&specs, &path)?;
        println!();
        println!("[*] Specs exported to: {}", path.display());
    }

    if plan.pdf {
        println!();
        println!("[*] Generating PDF build guide...");
        let bytes = render_build_guide(&specs, &plan.report)?;
        let path = plan.directory.join(pdf_file_name(&specs));
        save_pdf(&bytes, &path)?;
        println!();
        println!("[SUCCESS] Build guide generated: {}", path.display());
        println!("          Open the PDF for complete instructions, safety info, and diagrams.");
    }

    info!(volume_ci = specs.volume_label(), "design complete");
    Ok(())
}

fn format_summary(specs: &ForgeSpecs) -> String {
    let env = &specs.envelope;
    let rule = "=".repeat(60);
    let lines = [
        String::new(),
        rule.clone(),
        "   FORGE DESIGN SUMMARY".to_string(),
        rule.clone(),
        format!("   Chamber Volume:    {} cubic inches", specs.volume_label()),
        format!(
            "   External Size:     {} x {} x {}",
            format_inches(env.external_width_in),
            format_inches(env.external_height_in),
            format_inches(env.external_length_in)
        ),
        format!(
            "   Ribbon Burner:     {} holes, {}\" long",
            specs.burner.burner_holes,
            format_trimmed(specs.burner.burner_length_in, 2)
        ),
        format!(
            "   Blower Required:   {} CFM @ {}\" WC",
            specs.airflow.cfm_recommended, specs.airflow.static_pressure
        ),
        format!(
            "   Refractory:        {} bags Kast-O-Lite 30",
            format_trimmed(specs.refractory.refractory_bags, 1)
        ),
        format!(
            "   Ceramic Blanket:   {} sq ft",
            format_trimmed(specs.refractory.ceramic_blanket_sqft, 1)
        ),
        format!("   Estimated Cost:    ${:.2}", specs.cost.estimated_cost_usd),
        rule,
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_design_flags_parse() {
        let cli = Cli::try_parse_from([
            "forge", "-v", "design", "--width", "8", "--door", "front-and-rear", "--json",
            "--no-pdf", "-o", "out", "--yes",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Design { input, json, no_pdf, output_dir, formulas } => {
                assert_eq!(input.width, Some(8.0));
                assert_eq!(input.door, Some(DoorConfig::FrontAndRear));
                assert!(input.yes);
                assert!(input.is_programmatic());
                assert!(json && no_pdf && !formulas);
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_door_flag_rejected() {
        assert!(Cli::try_parse_from(["forge", "check", "--door", "top"]).is_err());
    }

    #[test]
    fn test_no_flags_is_interactive() {
        let cli = Cli::try_parse_from(["forge", "check"]).unwrap();
        match cli.command {
            Commands::Check { input } => assert!(!input.is_programmatic()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_summary_text() {
        let summary = format_summary(&compute_specs(&ChamberInput::default()));
        assert!(summary.contains("Chamber Volume:    504 cubic inches"));
        assert!(summary.contains("External Size:     10.5\" x 10.5\" x 15.0\""));
        assert!(summary.contains("Ribbon Burner:     27 holes, 8.3\" long"));
        assert!(summary.contains("Blower Required:   43 CFM @ 3.0\" WC"));
        assert!(summary.contains("Refractory:        1.1 bags Kast-O-Lite 30"));
        assert!(summary.contains("Ceramic Blanket:   4.8 sq ft"));
        assert!(summary.contains("Estimated Cost:    $371.00"));
    }

    #[test]
    fn test_user_errors_exit_with_code_2() {
        let err = anyhow::Error::from(ForgeError::invalid_numeric("width_in", "six"));
        let (message, code) = failure_report(&err);
        assert_eq!(code, 2);
        assert_eq!(
            message,
            "[ERROR] Invalid numeric input for 'width_in': 'six' is not a number"
        );

        let err = anyhow::Error::from(ForgeError::config("forge.toml", "unknown field `widht`"));
        assert_eq!(failure_report(&err).1, 2);
    }

    #[test]
    fn test_other_errors_exit_with_code_1_and_context() {
        let err = anyhow::Error::from(ForgeError::file_error("write", "out.pdf", "denied"))
            .context("saving build guide");
        let (message, code) = failure_report(&err);
        assert_eq!(code, 1);
        assert_eq!(
            message,
            "[ERROR] saving build guide: File error: write on 'out.pdf' - denied"
        );

        let err = anyhow::anyhow!("disk full");
        assert_eq!(failure_report(&err), ("[ERROR] disk full".to_string(), 1));
    }

    #[test]
    fn test_design_end_to_end_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let plan = OutputPlan {
            directory: dir.path().join("nested"),
            json: true,
            pdf: false,
            report: ReportOptions::default(),
        };
        run_design(&ChamberInput::default(), &plan).unwrap();
        let path = dir.path().join("nested").join("forge_specs_504ci.json");
        let specs = forge_core::export::load_specs_json(&path).unwrap();
        assert_eq!(specs.burner.burner_holes, 27);
    }
}
