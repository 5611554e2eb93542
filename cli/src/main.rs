//! Pet service - command line front end
//!
//! Runs pet service operations against an in-memory repository seeded
//! from the config file.
//!
//! ```sh
//! # List pet names from the default config (~/.config/pet-service/config.toml)
//! pet-cli names
//!
//! # Custom config path, JSON output
//! pet-cli --config ./pets.toml --json list
//!
//! # Several operations sharing one repository
//! printf 'rename 1 Rex\nremove 2\nnames\n' | pet-cli shell
//! ```

use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use pet_service::{init_tracing, AppConfig, InMemoryPetRepository, Pet, PetError, PetService};

/// Manage a collection of pets.
#[derive(Parser, Debug)]
#[command(name = "pet-cli", version, about = "Pet collection management")]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Pet(PetCommand),
    /// Read commands from stdin, one per line, against the same pets.
    Shell,
}

#[derive(Subcommand, Debug)]
enum PetCommand {
    /// Print the names of all pets.
    Names,
    /// Print all pets; fails when there are none.
    List,
    /// Print the name of the pet with the given id.
    Get { id: String },
    /// Add a new pet.
    Add { id: String, name: String },
    /// Rename an existing pet.
    Rename { id: String, name: String },
    /// Remove the pet with the given id.
    Remove { id: String },
    /// Remove every pet.
    Clear,
}

/// Line-level parser used by `shell`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: PetCommand,
}

#[derive(Debug, PartialEq)]
enum Output {
    Names(Vec<String>),
    Pets(Vec<Pet>),
    Name(String),
    Flag(bool),
}

impl Output {
    fn print(&self, json: bool) {
        if json {
            let value = match self {
                Self::Names(names) => serde_json::json!(names),
                Self::Pets(pets) => serde_json::json!(pets),
                Self::Name(name) => serde_json::json!(name),
                Self::Flag(flag) => serde_json::json!(flag),
            };
            println!("{value}");
            return;
        }
        match self {
            Self::Names(names) => names.iter().for_each(|name| println!("{name}")),
            Self::Pets(pets) => pets.iter().for_each(|pet| println!("{}\t{}", pet.id, pet.name)),
            Self::Name(name) => println!("{name}"),
            Self::Flag(flag) => println!("{flag}"),
        }
    }
}

fn execute(service: &PetService, command: PetCommand) -> Result<Output, PetError> {
    Ok(match command {
        PetCommand::Names => Output::Names(service.get_all_pet_names()),
        PetCommand::List => Output::Pets(service.get_all_pets()?),
        PetCommand::Get { id } => Output::Name(service.get_pet_name_by_id(&id)?),
        PetCommand::Add { id, name } => Output::Flag(service.add_new_pet(Pet::new(id, name))?),
        PetCommand::Rename { id, name } => Output::Flag(service.update_pet_details(&id, &name)?),
        PetCommand::Remove { id } => Output::Flag(service.remove_pet_by_id(&id)?),
        PetCommand::Clear => Output::Flag(service.remove_all_pets()),
    })
}

/// Error line printed to stderr for a failed operation.
fn describe_error(err: &PetError) -> String {
    match err.pet_id() {
        Some(id) => format!("error: {err} ({id})"),
        None => format!("error: {err}"),
    }
}

/// Parses one `shell` input line. Blank lines and `#` comments yield `None`.
fn parse_shell_line(line: &str) -> Option<Result<PetCommand, clap::Error>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.first().map_or(true, |word| word.starts_with('#')) {
        return None;
    }
    Some(ShellLine::try_parse_from(words).map(|parsed| parsed.command))
}

fn run_shell(service: &PetService, json: bool) -> ExitCode {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        match parse_shell_line(&line) {
            None => {}
            Some(Ok(command)) => match execute(service, command) {
                Ok(output) => output.print(json),
                Err(e) => eprintln!("{}", describe_error(&e)),
            },
            Some(Err(e)) => eprintln!("{e}"),
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(pet_service::default_config_path);

    let config_exists = config_path.exists();
    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);
    if config_exists {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        info!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Seed pets   : {}", config.pets.len());
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        eprintln!("No command given; see --help");
        return ExitCode::FAILURE;
    };

    // ── Wire service ───────────────────────────────────────────
    let repository = Arc::new(InMemoryPetRepository::with_pets(config.pets));
    info!(count = repository.len(), "Seeded in-memory pet repository");
    let service = PetService::new(repository);

    let command = match command {
        Command::Shell => return run_shell(&service, cli.json),
        Command::Pet(command) => command,
    };

    match execute(&service, command) {
        Ok(output) => {
            output.print(cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PetService {
        let repo = InMemoryPetRepository::with_pets([Pet::new("1", "Buddy"), Pet::new("2", "Max")]);
        PetService::new(Arc::new(repo))
    }

    fn names(names: &[&str]) -> Output {
        Output::Names(names.iter().map(|n| n.to_string()).collect())
    }

    fn run(service: &PetService, line: &str) -> Result<Output, PetError> {
        let command = parse_shell_line(line)
            .expect("line is not blank")
            .expect("line parses");
        execute(service, command)
    }

    #[test]
    fn names_and_list_map_to_queries() {
        let service = service();

        assert_eq!(execute(&service, PetCommand::Names), Ok(names(&["Buddy", "Max"])));
        assert_eq!(
            execute(&service, PetCommand::List),
            Ok(Output::Pets(vec![Pet::new("1", "Buddy"), Pet::new("2", "Max")]))
        );
    }

    #[test]
    fn get_returns_name_or_not_found() {
        let service = service();

        assert_eq!(
            execute(&service, PetCommand::Get { id: "2".into() }),
            Ok(Output::Name("Max".into()))
        );
        assert_eq!(
            execute(&service, PetCommand::Get { id: "9".into() }),
            Err(PetError::not_found("9"))
        );
    }

    #[test]
    fn add_reports_flag_or_already_exists() {
        let service = service();

        assert_eq!(
            execute(&service, PetCommand::Add { id: "3".into(), name: "Luna".into() }),
            Ok(Output::Flag(true))
        );
        assert_eq!(
            execute(&service, PetCommand::Add { id: "1".into(), name: "Other".into() }),
            Err(PetError::already_exists("1"))
        );
    }

    #[test]
    fn rename_and_remove_report_flags() {
        let service = service();

        assert_eq!(
            execute(&service, PetCommand::Rename { id: "1".into(), name: "Rex".into() }),
            Ok(Output::Flag(true))
        );
        assert_eq!(
            execute(&service, PetCommand::Remove { id: "2".into() }),
            Ok(Output::Flag(true))
        );
        assert_eq!(
            execute(&service, PetCommand::Remove { id: "2".into() }),
            Err(PetError::not_found("2"))
        );
    }

    #[test]
    fn clear_prints_false_once_empty() {
        let service = service();

        assert_eq!(execute(&service, PetCommand::Clear), Ok(Output::Flag(true)));
        assert_eq!(execute(&service, PetCommand::Clear), Ok(Output::Flag(false)));
        assert_eq!(execute(&service, PetCommand::List), Err(PetError::EmptyCollection));
    }

    #[test]
    fn shell_lines_share_one_repository() {
        let service = service();

        assert_eq!(run(&service, "rename 1 Rex"), Ok(Output::Flag(true)));
        assert_eq!(run(&service, "remove 2"), Ok(Output::Flag(true)));
        assert_eq!(run(&service, "names"), Ok(names(&["Rex"])));
        assert_eq!(run(&service, "get 2"), Err(PetError::not_found("2")));
    }

    #[test]
    fn shell_skips_blank_and_comment_lines() {
        assert!(parse_shell_line("").is_none());
        assert!(parse_shell_line("   ").is_none());
        assert!(parse_shell_line("# names").is_none());
    }

    #[test]
    fn shell_rejects_nested_shell_and_unknown_commands() {
        assert!(matches!(parse_shell_line("shell"), Some(Err(_))));
        assert!(matches!(parse_shell_line("feed 1"), Some(Err(_))));
        assert!(matches!(parse_shell_line("add 1"), Some(Err(_))));
    }

    #[test]
    fn error_lines_include_pet_id() {
        assert_eq!(
            describe_error(&PetError::not_found("9")),
            "error: Pet not found (9)"
        );
        assert_eq!(
            describe_error(&PetError::EmptyCollection),
            "error: No pets available"
        );
    }

    #[test]
    fn cli_reads_config_path_and_subcommand() {
        let cli = Cli::try_parse_from(["pet-cli", "--config", "pets.toml", "--json", "rename", "1", "Rex"])
            .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("pets.toml")));
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Command::Pet(PetCommand::Rename { ref id, ref name })) if id == "1" && name == "Rex"
        ));
    }

    #[test]
    fn cli_accepts_shell_subcommand() {
        let cli = Cli::try_parse_from(["pet-cli", "shell"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Shell)));
    }
}
