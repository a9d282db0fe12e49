use crate::cli::{validate_arguments, CommandLineArgs};
use crate::cloud::CloudClients;
use crate::glossary::{create_or_update_glossary, load_glossary_from_csv};
use crate::translation::{translate_text, TranslationOptions};
use crate::utils::{AppConfig, Result};

/// validate -> authenticate -> load glossary -> sync glossary -> translate.
/// Stops at the first failure.
pub async fn run(args: &CommandLineArgs, config: &AppConfig) -> Result<()> {
    validate_arguments(args)?;

    let clients = CloudClients::connect(&args.account, &args.project, config).await?;

    let glossary_data = load_glossary_from_csv(&args.glossary, &config.glossary.name).await?;

    let glossary_id = create_or_update_glossary(
        &clients.translation,
        &clients.storage,
        &glossary_data,
        &args.project,
        config,
    )
    .await?;

    let options = TranslationOptions {
        from: args.from.clone(),
        to: args.to.clone(),
        glossary_id,
        project_id: args.project.clone(),
        location: config.cloud.location.clone(),
    };
    translate_text(&clients.translation, &args.input, &args.output, &options).await
}
