use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let user = ctx.user()?;
        let store = ctx.store()?;
        let entries = store.list(&user)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            info(format!("No entries for {user}."));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("TIMESTAMP", 26),
            Column::new("TYPE", 10),
        ]);
        for e in &entries {
            table.add_row(vec![
                e.id.to_string(),
                e.display_timestamp(),
                e.kind.to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} entries", entries.len());
    }

    Ok(())
}
