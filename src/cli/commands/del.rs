use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let user = ctx.user()?;
        let mut store = ctx.store()?;

        if !*yes {
            print!("Delete entry #{id}? [y/N]: ");
            io::stdout().flush()?;

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                warning("Aborted.");
                return Ok(());
            }
        }

        DeleteLogic::apply(store.as_mut(), &user, *id)?;
        success(format!("Deleted entry #{id}"));
    }

    Ok(())
}
