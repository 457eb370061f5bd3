use crate::config::Config;
use crate::core::import::{ImportBatch, import_files};
use crate::core::persistence::ScheduleBridge;
use crate::core::session::{LoadOutcome, SchedulingSession};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::render::print_import_report;
use crate::utils::path::expand_all;

/// Session operations that touch the filesystem or the database, shared by
/// the one-shot commands and the interactive shell.
pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Import a new batch of files and publish it into the session.
    pub fn import(
        session: &mut SchedulingSession,
        files: &[String],
        cfg: &Config,
        pool: Option<&DbPool>,
    ) -> AppResult<ImportBatch> {
        let delimiter = cfg.delimiter_byte()?;
        let paths = expand_all(files);

        let batch = import_files(&paths, delimiter);
        print_import_report(&batch);

        if let Some(pool) = pool {
            ttlog_quiet(
                &pool.conn,
                "import",
                &batch.files.join(", "),
                &format!(
                    "Imported {} classes ({} rows dropped)",
                    batch.records.len(),
                    batch.rows_dropped()
                ),
            );
        }

        session.load_batch(batch.clone());
        Ok(batch)
    }

    pub fn remove_file(
        session: &mut SchedulingSession,
        file_id: &str,
        pool: Option<&DbPool>,
    ) -> AppResult<usize> {
        let purged = session.remove_file(file_id)?;
        success(format!(
            "Removed {} ({} selected rows purged).",
            file_id, purged
        ));

        if let Some(pool) = pool {
            ttlog_quiet(
                &pool.conn,
                "remove",
                file_id,
                &format!("File removed, {} selected rows purged", purged),
            );
        }
        Ok(purged)
    }

    /// Overwrite the saved schedule with the current selection.
    pub fn save(session: &SchedulingSession, pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let count = session.selection().len();
        {
            let mut bridge = ScheduleBridge::new(pool, &cfg.schedule_slot);
            session.save(&mut bridge)?;
        }

        ttlog_quiet(
            &pool.conn,
            "save",
            &cfg.schedule_slot,
            &format!("Saved schedule with {} rows", count),
        );
        success("Schedule saved.");
        if count == 0 {
            warning("No classes selected: the saved schedule is empty.");
        }
        Ok(())
    }

    /// Replace the selection with the saved schedule.
    pub fn load(
        session: &mut SchedulingSession,
        pool: &mut DbPool,
        cfg: &Config,
    ) -> AppResult<LoadOutcome> {
        let outcome = {
            let bridge = ScheduleBridge::new(pool, &cfg.schedule_slot);
            session.load(&bridge)?
        };

        ttlog_quiet(
            &pool.conn,
            "load",
            &cfg.schedule_slot,
            &format!("Restored {} rows", outcome.restored),
        );
        success(format!("Schedule loaded ({} rows).", outcome.restored));
        if outcome.orphaned > 0 {
            warning(format!(
                "{} restored rows belong to sections not present in the loaded files.",
                outcome.orphaned
            ));
        }
        Ok(outcome)
    }

    /// Tell the user a saved schedule can be restored.
    pub fn hint_saved(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let bridge = ScheduleBridge::new(pool, &cfg.schedule_slot);
        if bridge.exists()? {
            info("A saved schedule exists: use `load` to restore it.");
        }
        Ok(())
    }
}
