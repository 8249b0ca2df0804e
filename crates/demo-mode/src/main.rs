use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use demo_mode::{init_tracing, parse_assignment, DemoConfig, DemoMode, OfflineTaskWidget};
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    let jobs = Arg::new("jobs")
        .long("jobs")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Demo job registry (JSON array of {name, params, job})");
    let config = Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Demo mode config (TOML)");

    Command::new("demo-mode")
        .version(demo_mode::VERSION)
        .about("Demo job registry tools")
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("jobs")
                .about("Print the serialized registry")
                .arg(jobs.clone())
                .arg(config.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Check whether a submission would be answered by a demo job")
                .arg(jobs)
                .arg(
                    Arg::new("task")
                        .long("task")
                        .required(true)
                        .help("Task name"),
                )
                .arg(
                    Arg::new("param")
                        .long("param")
                        .action(ArgAction::Append)
                        .value_parser(parse_assignment)
                        .help("Parameter value as name=value; repeat for multiple values"),
                )
                .arg(
                    Arg::new("file-param")
                        .long("file-param")
                        .action(ArgAction::Append)
                        .value_parser(parse_assignment)
                        .help("File parameter path as name=path; repeat for multiple files"),
                )
                .arg(config),
        )
}

fn session(args: &ArgMatches) -> Result<DemoMode> {
    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DemoConfig::default(),
    };
    let demo = DemoMode::new(config);
    if let Some(path) = args.get_one::<PathBuf>("jobs") {
        let count = demo
            .load_jobs_file(path)
            .with_context(|| format!("loading demo jobs {}", path.display()))?;
        tracing::debug!("Loaded {} demo jobs", count);
    }
    Ok(demo)
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("jobs", args)) => {
            let demo = session(args)?;
            println!("{}", demo.jobs_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Some(("check", args)) => {
            let demo = session(args)?;
            let task = args
                .get_one::<String>("task")
                .context("--task is required")?;

            let mut widget = OfflineTaskWidget::new(task.as_str());
            for (name, value) in args
                .get_many::<(String, String)>("param")
                .into_iter()
                .flatten()
            {
                widget = widget.with_value(name, value);
            }
            for (name, path) in args
                .get_many::<(String, String)>("file-param")
                .into_iter()
                .flatten()
            {
                widget = widget.with_file(name, path);
            }

            match demo.check(&widget) {
                Some(job) => {
                    println!("match: {job}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("no match");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
