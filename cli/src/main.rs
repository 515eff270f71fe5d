//! reportdoc CLI - structured report formatting tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use reportdoc::render::{self, replay};
use reportdoc::{
    format_batch, Command, JsonFormat, RenderOptions, RenderStats, ReportInput, Reportdoc,
    TextSink,
};

#[derive(Parser)]
#[command(name = "reportdoc")]
#[command(version)]
#[command(about = "Format plain report text into paginated documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render report text files
    Render {
        /// Input text files ("-" reads stdin)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file, or directory when rendering several inputs
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show the detected sections of a report
    Sections {
        /// Input text file ("-" reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print sections as JSON
        #[arg(long)]
        json: bool,

        /// NFC-normalize Unicode before splitting
        #[arg(long)]
        normalize: bool,
    },

    /// Show layout statistics for a report
    Info {
        /// Input text file ("-" reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the placeholder report for a topic
    Placeholder {
        /// Report topic
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Mark the content as fallback text
    #[arg(long)]
    fallback: bool,

    /// Cover timestamp (RFC 3339, defaults to now)
    #[arg(long, value_name = "TIMESTAMP")]
    date: Option<String>,

    /// Cover date format (chrono syntax)
    #[arg(long, env = "REPORTDOC_DATE_FORMAT", default_value = "%-m/%-d/%Y")]
    date_format: String,

    /// Body font size in points
    #[arg(long, env = "REPORTDOC_FONT_SIZE", default_value = "12")]
    font_size: f32,

    /// Disable page-number footers
    #[arg(long)]
    no_page_numbers: bool,

    /// Text preview width in columns
    #[arg(long, default_value = "80")]
    width: usize,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_date_format(self.date_format.clone())
            .with_base_font_size(self.font_size)
            .with_page_numbers(!self.no_page_numbers)
    }

    fn generated_at(&self) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
        match &self.date {
            Some(date) => Ok(DateTime::parse_from_rfc3339(date)
                .map_err(|e| format!("Invalid timestamp '{}': {}", date, e))?
                .with_timezone(&Utc)),
            None => Ok(Utc::now()),
        }
    }

    fn input(&self, text: String) -> Result<ReportInput, Box<dyn std::error::Error>> {
        Ok(ReportInput::new(text)
            .with_fallback(self.fallback)
            .with_generated_at(self.generated_at()?))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum OutputFormat {
    /// Plain text preview
    Text,
    /// Pretty-printed command stream
    Json,
    /// Compact command stream
    Compact,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json | OutputFormat::Compact => "json",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            inputs,
            output,
            format,
            render,
        }) => cmd_render(&inputs, output.as_deref(), format, &render),
        Some(Commands::Sections {
            input,
            json,
            normalize,
        }) => cmd_sections(&input, json, normalize),
        Some(Commands::Info { input, render }) => cmd_info(&input, &render),
        Some(Commands::Placeholder { topic, output }) => cmd_placeholder(&topic, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: reportdoc render <FILE>...".yellow());
            println!("       reportdoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn encode(
    commands: &[Command],
    format: OutputFormat,
    width: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            let mut sink = TextSink::new(Vec::new()).with_width(width);
            replay(commands, &mut sink)?;
            Ok(String::from_utf8(sink.finish()?)?)
        }
        OutputFormat::Json => Ok(render::to_json(commands, JsonFormat::Pretty)?),
        OutputFormat::Compact => Ok(render::to_json(commands, JsonFormat::Compact)?),
    }
}

fn output_path(input: &Path, dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    dir.join(format!("{}.{}", stem, format.extension()))
}

fn cmd_render(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: OutputFormat,
    args: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options();

    let mut requests = Vec::with_capacity(inputs.len());
    for path in inputs {
        requests.push(args.input(read_input(path)?)?);
    }

    if let [request] = requests.as_slice() {
        let commands = reportdoc::to_commands(request, &options)?;
        let rendered = encode(&commands, format, args.width)?;
        return write_or_print(output, &rendered);
    }

    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Formatting...");
    let results = format_batch(&requests, &options);

    let mut failures = 0;
    for (path, result) in inputs.iter().zip(results) {
        pb.set_message(path.display().to_string());
        match result {
            Ok(commands) => {
                let target = output_path(path, &output_dir, format);
                fs::write(&target, encode(&commands, format, args.width)?)?;
                log::info!("Wrote {}", target.display());
            }
            Err(e) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "Skipped".yellow(), path.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} reports written to {}",
        "Done!".green().bold(),
        requests.len() - failures,
        requests.len(),
        output_dir.display()
    );

    Ok(())
}

fn cmd_sections(
    input: &Path,
    json: bool,
    normalize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let sections = Reportdoc::new()
        .with_unicode_normalization(normalize)
        .split(&text);

    if json {
        println!("{}", render::to_json(&sections, JsonFormat::Pretty)?);
        return Ok(());
    }

    if sections.is_empty() {
        println!("{}", "No sections detected".yellow());
        return Ok(());
    }

    for (index, section) in sections.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{:>2}.", index + 1).dimmed(),
            section.label().cyan().bold(),
            format!("({} lines)", section.content.lines().count()).dimmed()
        );
    }

    Ok(())
}

fn cmd_info(input: &Path, args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let request = args.input(text)?;
    let commands = reportdoc::to_commands(&request, &args.options())?;
    let stats = RenderStats::from_commands(&commands);

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Sections".bold(), stats.section_page_count);
    println!(
        "{}: {}",
        "Fallback".bold(),
        if request.used_fallback { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Bold runs".bold(), stats.bold_run_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_placeholder(topic: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    write_or_print(output, &reportdoc::fallback::placeholder_report(topic))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reportdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Structured report formatting tool");
    println!();
    println!("License: MIT");
}
