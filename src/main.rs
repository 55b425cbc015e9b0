use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::PagerWriter;
use gitlet::artifacts::merge::resolution::MergeOutcome;
use gitlet::commands::porcelain::log::LogEntry;
use gitlet::commands::porcelain::status::StatusReport;
use gitlet::config::Config;
use gitlet::errors::GitletError;
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "gitlet keeps snapshots of a directory in a hidden .gitlet folder. \
    It supports branches and three-way merges, but has no remotes and no diffs.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Creates .gitlet in the current directory with a single branch, master, \
        pointing at the initial commit."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "Stages the current content of each file; directories stage every file below them."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "Creates a commit from the head snapshot plus the staged additions and removals."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
        #[arg(index = 1, conflicts_with = "message", help = "The commit message")]
        positional: Option<String>,
    },
    #[command(
        name = "rm",
        about = "Unstage a file or stage its removal",
        long_about = "Unstages the file; if the head commit tracks it, the removal is staged and \
        the file is deleted from the work tree."
    )]
    Rm {
        #[arg(index = 1)]
        path: PathBuf,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "Lists the first-parent history of the current head, newest first."
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit ever made",
        long_about = "Lists every commit in the repository, newest first."
    )]
    GlobalLog,
    #[command(
        name = "find",
        about = "Print the ids of commits with the given message"
    )]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches, staged files and work tree changes"
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file> restores a file from the head commit, \
        checkout <commit> -- <file> restores it from the given commit, \
        checkout <branch> switches to the branch."
    )]
    Checkout {
        #[arg(index = 1, help = "A commit id (with a file) or a branch name")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<PathBuf>,
    },
    #[command(name = "branch", about = "Create a branch at the current head")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to a commit",
        long_about = "Checks out every file of the commit, removes tracked files it lacks \
        and clears the staging area."
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch"
    )]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from_env()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(config.log_directive()))
        .init();

    // failures the user can act on are reported like any other output
    match run(cli.command, config) {
        Ok(()) => Ok(()),
        Err(GitletError::Storage(error)) => Err(error),
        Err(error) => {
            println!("{error}");
            Ok(())
        }
    }
}

fn run(command: Commands, config: Config) -> gitlet::errors::Result<()> {
    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(&pwd, config)?;
    if !matches!(command, Commands::Init) {
        repository.load()?;
    }

    match command {
        Commands::Init => {
            repository.init()?;
        }
        Commands::Add { paths } => repository.add(&paths)?,
        Commands::Commit {
            message,
            positional,
        } => {
            let message = message.or(positional).unwrap_or_default();
            repository.commit(&message)?;
        }
        Commands::Rm { path } => repository.rm(&path)?,
        Commands::Log => {
            let entries = repository.log()?;
            print_paged(repository.config(), |writer| write_log(writer, &entries))?;
        }
        Commands::GlobalLog => {
            let entries = repository.global_log()?;
            print_paged(repository.config(), |writer| write_log(writer, &entries))?;
        }
        Commands::Find { message } => {
            for oid in repository.find(&message)? {
                println!("{oid}");
            }
        }
        Commands::Status => {
            let report = repository.status()?;
            write_status(&mut std::io::stdout().lock(), &report)?;
        }
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(&file)?,
            (Some(commit), Some(file)) => repository.checkout_commit_file(&commit, &file)?,
            (Some(branch), None) => repository.checkout_branch(&branch)?,
            (None, None) => println!("Incorrect operands."),
        },
        Commands::Branch { name } => repository.branch(&name)?,
        Commands::RmBranch { name } => repository.rm_branch(&name)?,
        Commands::Reset { commit } => repository.reset(&commit)?,
        Commands::Merge { branch } => match repository.merge(&branch)? {
            MergeOutcome::AlreadyUpToDate => {
                println!("Given branch is an ancestor of the current branch.")
            }
            MergeOutcome::FastForwarded => println!("Current branch fast-forwarded."),
            outcome @ MergeOutcome::Merged { .. } => {
                if outcome.has_conflicts() {
                    println!("Encountered a merge conflict.");
                }
            }
        },
    }

    Ok(())
}

/// Send the output through the pager when stdout is an interactive terminal
fn print_paged(
    config: &Config,
    print: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> anyhow::Result<()> {
    if !config.pager() || !std::io::stdout().is_terminal() {
        let mut stdout = std::io::stdout().lock();
        print(&mut stdout)?;
        return Ok(stdout.flush()?);
    }

    let mut writer = PagerWriter::new(minus::Pager::new());
    print(&mut writer)?;
    minus::page_all(writer.into_pager())?;

    Ok(())
}

fn write_log(writer: &mut dyn Write, entries: &[LogEntry]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", entry.oid)?;
        if let (Some(first), Some(second)) =
            (entry.commit.parents().first(), entry.commit.parents().second())
        {
            writeln!(
                writer,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", entry.commit.readable_timestamp())?;
        writeln!(writer, "{}", entry.commit.message())?;
        writeln!(writer)?;
    }

    Ok(())
}

fn write_status(writer: &mut impl Write, report: &StatusReport) -> std::io::Result<()> {
    writeln!(writer, "=== Branches ===")?;
    for branch in &report.branches {
        if branch == &report.active_branch {
            writeln!(writer, "*{branch}")?;
        } else {
            writeln!(writer, "{branch}")?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "=== Staged Files ===")?;
    for path in report.info.staged.keys() {
        writeln!(writer, "{}", path.display())?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Removed Files ===")?;
    for path in &report.info.removed {
        writeln!(writer, "{}", path.display())?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
    for (path, change) in &report.info.modified {
        writeln!(writer, "{} {change}", path.display())?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Untracked Files ===")?;
    for path in &report.info.untracked {
        writeln!(writer, "{}", path.display())?;
    }
    writeln!(writer)?;

    Ok(())
}
