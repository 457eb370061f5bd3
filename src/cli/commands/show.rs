use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ScheduleLogic;
use crate::core::selection::ToggleOutcome;
use crate::core::session::SchedulingSession;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, warning};
use crate::ui::render::{print_grid, print_selected};

/// One-shot session: import, restore, toggle, save, then render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        files,
        title,
        select,
        load,
        save,
    } = cmd
    {
        // The database is only needed to restore or save the schedule
        let mut pool = if *load || *save {
            Some(DbPool::new(&cfg.database)?)
        } else {
            None
        };

        let mut session = SchedulingSession::new();
        ScheduleLogic::import(&mut session, files, cfg, pool.as_ref())?;

        if *load && let Some(pool) = pool.as_mut() {
            match ScheduleLogic::load(&mut session, pool, cfg) {
                Ok(_) => {}
                Err(AppError::NoPoolLoaded) => error(AppError::NoPoolLoaded),
                Err(e) => return Err(e),
            }
        }

        for nrc in select {
            match session.toggle_nrc(nrc)? {
                ToggleOutcome::Selected(n) => info(format!("NRC {}: {} rows selected", nrc, n)),
                ToggleOutcome::Deselected(n) => {
                    info(format!("NRC {}: {} rows deselected", nrc, n))
                }
            }
        }

        if let Some(t) = title {
            if !session.titles().contains(&t.as_str()) {
                warning(format!("No course titled '{}' in the loaded files.", t));
            }
            session.set_title_filter(Some(t.clone()));
        }

        if *save && let Some(pool) = pool.as_mut() {
            ScheduleLogic::save(&session, pool, cfg)?;
        }

        if !session.has_pool() {
            return Ok(());
        }

        print_selected(&session.selected_groups());
        print_grid(&session, cfg);
    }

    Ok(())
}
