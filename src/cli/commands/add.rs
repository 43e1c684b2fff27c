use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::now_fixed;

/// Record one entry for the current user.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add { kind, at } = cmd {
        let user = ctx.user()?;
        let mut store = ctx.store()?;

        let entry = AddLogic::apply(store.as_mut(), &user, kind, at.as_ref(), now_fixed())?;

        success(format!(
            "Added {} #{} at {}",
            entry.kind,
            entry.id,
            entry.display_timestamp()
        ));
    }

    Ok(())
}
