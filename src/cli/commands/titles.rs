use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ScheduleLogic;
use crate::core::session::SchedulingSession;
use crate::errors::AppResult;
use crate::ui::render::{print_sections, print_titles};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Titles { files } => {
            let mut session = SchedulingSession::new();
            ScheduleLogic::import(&mut session, files, cfg, None)?;
            print_titles(&session.titles());
        }
        Commands::Sections { files, title } => {
            let mut session = SchedulingSession::new();
            ScheduleLogic::import(&mut session, files, cfg, None)?;
            print_sections(title, &session.sections_for_title(title));
        }
        _ => {}
    }

    Ok(())
}
