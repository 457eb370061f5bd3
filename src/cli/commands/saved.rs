use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::persistence::ScheduleBridge;
use crate::db::kv;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::render::print_selected;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Saved { print, discard } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let updated = kv::updated_at(&pool, &cfg.schedule_slot)?;

        {
            let mut bridge = ScheduleBridge::new(&mut pool, &cfg.schedule_slot);

            if !bridge.exists()? {
                info("No saved schedule.");
                return Ok(());
            }

            match updated {
                Some(ts) => info(format!("Saved schedule found (last saved {}).", ts)),
                None => info("Saved schedule found."),
            }

            if *print && let Some(selection) = bridge.peek()? {
                print_selected(&selection.groups());
            }

            if !*discard {
                return Ok(());
            }
            bridge.discard()?;
        }

        ttlog_quiet(&pool.conn, "discard", &cfg.schedule_slot, "Saved schedule discarded");
        success("Saved schedule discarded.");
    }

    Ok(())
}
