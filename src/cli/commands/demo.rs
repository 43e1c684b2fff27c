use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::demo::{DemoLogic, DemoSettings};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_local;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Demo {
        generate,
        clear,
        seed,
        now,
    } = cmd
    {
        let user = ctx.user()?;
        let mut store = ctx.store()?;

        if *clear {
            let removed = DemoLogic::clear(store.as_mut(), &user)?;
            success(format!("Removed {removed} entries for {user}"));
        }

        if *generate {
            let now = parse_optional_local(now.as_ref())?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_entropy(),
            };

            let created = DemoLogic::generate(
                store.as_mut(),
                &user,
                &now,
                DemoSettings::from(&ctx.cfg),
                &mut rng,
            )?;
            success(format!(
                "Generated {} demo entries for {user}",
                created.len()
            ));
        }
    }

    Ok(())
}
