use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Multi-provider AI translation CLI with i18n generation")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Provider used when none is given on the command line
        #[arg(long)]
        default_provider: Option<String>,
    },
    /// Validate the configuration file
    Validate,
    /// List known providers and their configuration status
    Providers,
    /// List supported language codes
    Languages,
    /// Translate a single piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Target language code (ISO 639-1, e.g., zh, en, es)
        #[arg(short = 't', long = "to", default_value = "zh")]
        to: String,

        /// Provider to use (defaults to the configured default_provider)
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Context to disambiguate the translation
        #[arg(short = 'c', long)]
        context: Option<String>,

        /// Sampling temperature (0.0-1.0)
        #[arg(long)]
        temperature: Option<f32>,
    },
    /// Generate translated i18n files from a source JSON document
    I18n {
        /// Source JSON file
        input: String,

        /// Directory for generated files
        #[arg(short = 'o', long, default_value = "i18n")]
        output_dir: String,

        /// Target language codes, comma-separated
        #[arg(short = 'l', long, value_delimiter = ',', default_value = "zh,es")]
        languages: Vec<String>,

        /// Output format: json or yaml
        #[arg(short = 'f', long, default_value = "json")]
        format: String,

        /// Provider to use (defaults to the configured default_provider)
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Reuse cached translations across runs
        #[arg(long)]
        cache: bool,
    },
}
