use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let user = ctx.user()?;
        let store = ctx.store()?;
        ExportLogic::export(&*store, &user, *format, file, *force)?;
    }
    Ok(())
}
