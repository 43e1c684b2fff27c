use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::aggregator::aggregate;
use crate::errors::AppResult;
use crate::export::read_json;
use crate::ui::charts;
use crate::utils::time::parse_optional_local;
use std::path::Path;

/// Aggregate the caller's entries (or a JSON file of entries) into chart data.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Stats { now, input, json } = cmd {
        let now = parse_optional_local(now.as_ref())?;

        let entries = match input {
            Some(file) => read_json(Path::new(file))?,
            None => {
                let user = ctx.user()?;
                ctx.store()?.list(&user)?
            }
        };

        let data = aggregate(&entries, &now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print!("{}", charts::render(&data));
        }
    }

    Ok(())
}
