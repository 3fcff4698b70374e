use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use doc_guard::checker::{Finding, default_checkers, run_checker_set};
use doc_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs, StatsArgs};
use doc_guard::config::{Rubric, load_rubric};
use doc_guard::document::load_docx;
use doc_guard::keywords::KeywordExtractor;
use doc_guard::output::{
    ColorMode, HtmlFormatter, JsonFormatter, ReportFormat, ReportFormatter, StatsFormatter,
    StatsJsonFormatter, StatsTextFormatter, TextFormatter,
};
use doc_guard::overview::{DocumentStats, Report, aggregate};
use doc_guard::{DocGuardError, EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

/// Artifact name used when an HTML report is requested without --output.
const DEFAULT_HTML_REPORT: &str = "document_review_report.html";

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> doc_guard::Result<i32> {
    // 1. Load the rubric
    let rubric = load_rubric(args.rubric.as_deref(), cli.no_config)?;

    // 2. Load and normalize the document
    let doc = load_docx(&args.file)?;

    // 3. Word counts and keyword extraction
    let keywords = KeywordExtractor::new(&rubric).extract(&doc);

    // 4. Run the checker set (parallel; result order is the fixed checker order)
    let checkers = default_checkers(&rubric);
    let per_checker = run_checker_set(&checkers, &doc);
    if cli.verbose >= 1 && !cli.quiet {
        for (checker, findings) in checkers.iter().zip(&per_checker) {
            eprintln!("{}: {} findings", checker.name(), findings.len());
        }
    }
    let findings: Vec<Finding> = per_checker.into_iter().flatten().collect();

    // 5. Aggregate into the report model
    let file_name = args.file.display().to_string();
    let report = aggregate(file_name, &doc, keywords, findings);

    // 6. Render
    let output = render_report(&report, args.format, cli, &rubric)?;

    // 7. Write output (all-or-nothing)
    let target = output_target(args);
    write_output(target.as_deref(), &output, cli.quiet)?;

    // 8. Exit code
    if report.overview.total_errors > 0 && !args.warn_only {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn render_report(
    report: &Report,
    format: ReportFormat,
    cli: &Cli,
    rubric: &Rubric,
) -> doc_guard::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        ReportFormat::Text => Box::new(
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .with_top_keywords(rubric.top_keywords),
        ),
        ReportFormat::Json => Box::new(JsonFormatter),
        ReportFormat::Html => Box::new(HtmlFormatter::new().with_top_keywords(rubric.top_keywords)),
    };
    formatter.format(report)
}

fn output_target(args: &CheckArgs) -> Option<PathBuf> {
    args.output.clone().or_else(|| {
        (args.format == ReportFormat::Html).then(|| PathBuf::from(DEFAULT_HTML_REPORT))
    })
}

fn write_output(path: Option<&Path>, output: &str, quiet: bool) -> doc_guard::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output).map_err(|source| DocGuardError::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;
            if !quiet {
                println!("Report written to {}", path.display());
            }
        }
        None => {
            // Keep stdout line-buffered output intact across process::exit.
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
    }
    Ok(())
}

fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> doc_guard::Result<i32> {
    let rubric = load_rubric(args.rubric.as_deref(), cli.no_config)?;
    let doc = load_docx(&args.file)?;
    let keywords = KeywordExtractor::new(&rubric).extract(&doc);
    let stats = DocumentStats::new(args.file.display().to_string(), &doc, keywords);

    let formatter: Box<dyn StatsFormatter> = match args.format {
        ReportFormat::Text => {
            Box::new(StatsTextFormatter::new().with_top_keywords(rubric.top_keywords))
        }
        ReportFormat::Json => Box::new(StatsJsonFormatter),
        ReportFormat::Html => {
            return Err(DocGuardError::Config(
                "stats does not support HTML output".to_string(),
            ));
        }
    };
    let output = formatter.format(&stats)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> doc_guard::Result<i32> {
    if args.output.exists() && !args.force {
        return Err(DocGuardError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }

    let rubric = Rubric::default();
    let text = toml::to_string(&rubric).map_err(|e| DocGuardError::Config(e.to_string()))?;
    fs::write(&args.output, text)?;
    println!("Wrote default rubric to {}", args.output.display());

    Ok(EXIT_SUCCESS)
}
