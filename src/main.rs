use anyhow::Result;
use clap::Parser;

use lingo_cli::cli::commands::{i18n, init, providers, translate, validate};
use lingo_cli::cli::{Args, Command};
use lingo_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Init {
            force,
            default_provider,
        } => {
            init::run_init(init::InitOptions {
                force,
                default_provider,
            })?;
        }
        Command::Validate => {
            validate::run_validate()?;
        }
        Command::Providers => {
            providers::print_providers()?;
        }
        Command::Languages => {
            print_languages();
        }
        Command::Translate {
            text,
            to,
            provider,
            context,
            temperature,
        } => {
            translate::run_translate(translate::TranslateOptions {
                text,
                to,
                provider,
                context,
                temperature,
            })
            .await?;
        }
        Command::I18n {
            input,
            output_dir,
            languages,
            format,
            provider,
            cache,
        } => {
            i18n::run_i18n(i18n::I18nOptions {
                input,
                output_dir,
                languages,
                format,
                provider,
                cache,
            })
            .await?;
        }
    }

    Ok(())
}
