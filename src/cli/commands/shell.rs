use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ScheduleLogic;
use crate::core::selection::ToggleOutcome;
use crate::core::session::SchedulingSession;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::block::Block;
use crate::models::day::Day;
use crate::ui::messages::{error, hint, info, success};
use crate::ui::render::{
    print_cell, print_files, print_grid, print_sections, print_selected, print_titles,
};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};

/// One line typed in the interactive shell.
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Import a new batch of CSV files (clears selection and filter)
    Import {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// List the loaded files
    Files,
    /// Remove a loaded file and its classes
    Remove { file: String },
    /// List course titles
    Titles,
    /// Filter by course title (or its number in `titles`); no argument clears it
    Filter { title: Vec<String> },
    /// List the sections of the filtered course
    Sections,
    /// Select or deselect every section with this NRC
    Toggle { nrc: String, section: Option<String> },
    /// Remove one selected section
    #[command(name = "drop")]
    Unselect { nrc: String, section: String },
    /// Empty the selection
    Clear,
    /// List the selected sections
    Selected,
    /// Print the weekly grid
    Grid,
    /// Print one cell of the grid (block A-G, weekday)
    Cell { block: String, day: String },
    /// Save the selection as the saved schedule
    Save,
    /// Restore the saved schedule
    Load,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

fn resolve_title(session: &SchedulingSession, words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let joined = words.join(" ");
    let titles = session.titles();
    if titles.contains(&joined.as_str()) {
        return Some(joined);
    }
    match joined.parse::<usize>() {
        Ok(n) if n >= 1 && n <= titles.len() => Some(titles[n - 1].to_string()),
        _ => Some(joined),
    }
}

fn execute(
    command: ShellCommand,
    session: &mut SchedulingSession,
    pool: &mut DbPool,
    cfg: &Config,
) -> AppResult<Flow> {
    match command {
        ShellCommand::Import { files } => {
            ScheduleLogic::import(session, &files, cfg, Some(&*pool))?;
            if session.has_pool() {
                ScheduleLogic::hint_saved(pool, cfg)?;
            }
        }
        ShellCommand::Files => print_files(session.files()),
        ShellCommand::Remove { file } => {
            ScheduleLogic::remove_file(session, &file, Some(&*pool))?;
        }
        ShellCommand::Titles => print_titles(&session.titles()),
        ShellCommand::Filter { title } => {
            let resolved = resolve_title(session, &title);
            match &resolved {
                Some(t) => info(format!("Filter: {}", t)),
                None => info("Filter cleared."),
            }
            session.set_title_filter(resolved);
        }
        ShellCommand::Sections => match session.title_filter() {
            Some(t) => print_sections(t, &session.sections_for_title(t)),
            None => hint("Select a course first with `filter <title>`."),
        },
        ShellCommand::Toggle { nrc, section } => {
            let outcome = match section {
                Some(s) => session.toggle_section(&nrc, &s)?,
                None => session.toggle_nrc(&nrc)?,
            };
            match outcome {
                ToggleOutcome::Selected(n) => success(format!("NRC {}: {} rows selected", nrc, n)),
                ToggleOutcome::Deselected(n) => {
                    success(format!("NRC {}: {} rows deselected", nrc, n))
                }
            }
        }
        ShellCommand::Unselect { nrc, section } => {
            let n = session.remove_section(&nrc, &section)?;
            success(format!("Removed {} {} ({} rows)", nrc, section, n));
        }
        ShellCommand::Clear => {
            session.clear_selection();
            success("Selection cleared.");
        }
        ShellCommand::Selected => print_selected(&session.selected_groups()),
        ShellCommand::Grid => print_grid(session, cfg),
        ShellCommand::Cell { block, day } => {
            let b = Block::from_label(&block).ok_or(AppError::InvalidBlock(block))?;
            let d = Day::from_label(&day).ok_or(AppError::InvalidDay(day))?;
            print_cell(b, d, &session.cell(b, d), cfg);
        }
        ShellCommand::Save => ScheduleLogic::save(session, pool, cfg)?,
        ShellCommand::Load => {
            ScheduleLogic::load(session, pool, cfg)?;
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Run the interactive loop until `quit` or end of input.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell { files } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut session = SchedulingSession::new();

        if !files.is_empty() {
            execute(
                ShellCommand::Import {
                    files: files.clone(),
                },
                &mut session,
                &mut pool,
                cfg,
            )?;
        }

        let interactive = io::stdin().is_terminal();
        if interactive {
            hint("Type `help` for the list of commands, `quit` to leave.");
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            if interactive {
                print!("horario> ");
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line?;
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() || words[0].starts_with('#') {
                continue;
            }

            let parsed = match ShellLine::try_parse_from(words.iter().copied()) {
                Ok(p) => p,
                Err(e) => {
                    // help/usage output goes to stdout as clap renders it
                    let _ = e.print();
                    continue;
                }
            };

            match execute(parsed.command, &mut session, &mut pool, cfg) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => error(e),
            }
        }
    }

    Ok(())
}
