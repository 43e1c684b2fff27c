use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn start(label: &str) {
    println!("{}▶ {}…{}", CYAN, label, RESET);
}

fn done(label: &str) {
    println!("{}✔ {}{}\n", GREEN, label, RESET);
}

/// Database maintenance. Flags run in the order migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let db_path = &ctx.cfg.database;
        let mut pool = DbPool::new(db_path)?;

        if *migrate {
            start("Running migrations");
            run_pending_migrations(&pool.conn)?;
            done("Migration completed.");
        }

        if *info {
            stats::print_db_info(&mut pool, db_path)?;
        }

        if *check {
            start("Running integrity check");
            let result: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            if result == "ok" {
                done("Integrity check passed.");
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, result);
            }
        }

        if *vacuum {
            start("Running VACUUM");
            pool.conn.execute_batch("VACUUM;")?;
            done("Vacuum completed.");
        }
    }

    Ok(())
}
