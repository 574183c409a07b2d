use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra,
    infra::name_store::CsvNameStore,
    telegram::{self, TelegramGateway},
    usecases::{self, bootstrap, event_loop},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                domain = domain::module_name(),
                telegram = telegram::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut gateway = TelegramGateway::connect(&context.config.telegram)?;
            let mut store = CsvNameStore::new(context.config.storage.path.clone());

            tracing::info!(
                store = %context.config.storage.path.display(),
                poll_timeout_secs = context.config.telegram.poll_timeout_secs,
                "starting update loop"
            );

            event_loop::run(&mut gateway, &mut store)
        }
    }
}
