use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            return Ok(());
        }
        let pool = DbPool::new(&ctx.cfg.database)?;
        init_db(&pool.conn)?;
        LogLogic::print_log(&pool.conn)?;
    }
    Ok(())
}
