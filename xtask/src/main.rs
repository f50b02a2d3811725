use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dmg_inspector::config::CONFIG_FILE;
use dmg_inspector::InspectorConfig;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for dmg-inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format check, clippy, every test suite
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Format check and clippy only
    Check,
    /// Run tests
    Test {
        /// Which suite to run (all by default)
        #[arg(long, value_enum)]
        suite: Option<Suite>,
        /// Restrict unit tests to one inspector module
        #[arg(long, value_enum, conflicts_with = "suite")]
        module: Option<Module>,
    },
    /// Run criterion benchmarks
    Bench {
        /// Benchmark group (all by default)
        #[arg(long, value_enum)]
        group: Option<BenchGroup>,
        /// Save results under this baseline name
        #[arg(long)]
        baseline: Option<String>,
    },
    /// Write or check an inspector configuration file
    Config {
        #[arg(long, default_value = CONFIG_FILE)]
        path: PathBuf,
        /// Validate the file instead of writing defaults
        #[arg(long)]
        check: bool,
        /// Overwrite an existing file with defaults
        #[arg(long, conflicts_with = "check")]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Suite {
    /// `#[cfg(test)]` modules in the library
    Unit,
    /// tests/inspector_tests.rs against the fake DMG
    Integration,
    /// Doc examples
    Doc,
}

#[derive(Clone, Copy, ValueEnum)]
enum Module {
    Offset,
    Port,
    ViewState,
    Step,
    Tiles,
    Memory,
    Registers,
    Panel,
    Ui,
    Config,
}

impl Module {
    /// Test name filter for the module
    fn filter(self) -> &'static str {
        match self {
            Module::Offset => "inspector::offset",
            Module::Port => "inspector::port",
            Module::ViewState => "inspector::view_state",
            Module::Step => "inspector::step",
            Module::Tiles => "inspector::tiles",
            Module::Memory => "inspector::memory",
            Module::Registers => "inspector::registers",
            Module::Panel => "inspector::panel",
            Module::Ui => "inspector::ui",
            Module::Config => "config::",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BenchGroup {
    Compose,
    MemoryWindow,
}

impl BenchGroup {
    fn name(self) -> &'static str {
        match self {
            BenchGroup::Compose => "compose",
            BenchGroup::MemoryWindow => "memory_window",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Check => run_check(),
        Commands::Test { suite, module } => match module {
            Some(module) => run_module_tests(module),
            None => run_tests(suite),
        },
        Commands::Bench { group, baseline } => run_bench(group, baseline.as_deref()),
        Commands::Config { path, check, force } => run_config(path, check, force),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== dmg-inspector CI ===".bold().blue());

    let start = Instant::now();

    run_task("Format check", fmt_check, verbose)?;
    run_task("Clippy", clippy, verbose)?;
    for suite in [Suite::Unit, Suite::Integration, Suite::Doc] {
        run_task(suite_name(suite), || run_suite(suite), verbose)?;
    }

    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );

    Ok(())
}

fn run_check() -> Result<()> {
    run_task("Format check", fmt_check, false)?;
    run_task("Clippy", clippy, false)
}

fn fmt_check() -> Result<()> {
    execute(cargo().args(["fmt", "--all", "--", "--check"]))
}

fn clippy() -> Result<()> {
    execute(cargo().args([
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]))
}

fn run_tests(suite: Option<Suite>) -> Result<()> {
    match suite {
        Some(suite) => run_suite(suite),
        None => execute(cargo().args(["test", "-p", "dmg-inspector"])),
    }
}

fn suite_name(suite: Suite) -> &'static str {
    match suite {
        Suite::Unit => "Unit tests",
        Suite::Integration => "Integration tests",
        Suite::Doc => "Doc tests",
    }
}

fn run_suite(suite: Suite) -> Result<()> {
    let mut cmd = cargo();
    cmd.args(["test", "-p", "dmg-inspector"]);
    match suite {
        Suite::Unit => cmd.arg("--lib"),
        Suite::Integration => cmd.args(["--test", "inspector_tests"]),
        Suite::Doc => cmd.arg("--doc"),
    };
    execute(&mut cmd)
}

fn run_module_tests(module: Module) -> Result<()> {
    println!("{} {} tests", "→".blue(), module.filter().bold());
    execute(cargo().args(["test", "-p", "dmg-inspector", "--lib", module.filter()]))
}

fn run_bench(group: Option<BenchGroup>, baseline: Option<&str>) -> Result<()> {
    let mut cmd = cargo();
    cmd.args(["bench", "-p", "dmg-inspector", "--bench", "inspector_bench", "--"]);

    if let Some(group) = group {
        cmd.arg(group.name());
    }
    if let Some(baseline) = baseline {
        cmd.args(["--save-baseline", baseline]);
    }

    execute(&mut cmd)
}

fn run_config(path: PathBuf, check: bool, force: bool) -> Result<()> {
    if check {
        let config = InspectorConfig::load(&path)
            .with_context(|| format!("{} is not a usable inspector config", path.display()))?;
        println!(
            "{} {} ({} rows, scale {})",
            "✓".green(),
            path.display(),
            config.memory.visible_rows,
            config.graphics.scale
        );
        return Ok(());
    }

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    InspectorConfig::default().save(&path)?;
    println!("{} wrote defaults to {}", "✓".green(), path.display());

    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();
    let result = task();

    let elapsed = if verbose {
        format!("({:.2}s)", start.elapsed().as_secs_f64())
    } else {
        String::new()
    };
    match &result {
        Ok(()) => println!("{} {}", "✓".green().bold(), elapsed),
        Err(_) => println!("{} {}", "✗".red().bold(), elapsed),
    }

    result
}

fn cargo() -> Command {
    Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()))
}

fn execute(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("could not start cargo")?;

    if !status.success() {
        anyhow::bail!("command failed with {}", status);
    }

    Ok(())
}
