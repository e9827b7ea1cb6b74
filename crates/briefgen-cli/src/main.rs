use anyhow::Context;
use briefgen_core::{validate_input, CampaignInput};
use briefgen_llm::BriefGenerator;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "briefgen-cli")]
#[command(about = "Validate campaign requests and generate briefs from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a campaign request and print the cleaned fields.
    Validate(CampaignArgs),
    /// Validate, then generate a brief (stub mode without `OPENAI_API_KEY`).
    Generate(CampaignArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
struct CampaignArgs {
    #[arg(long)]
    brand_name: String,
    /// Instagram, `TikTok` or UGC
    #[arg(long)]
    platform: String,
    /// Awareness, Conversions or "Content Assets"
    #[arg(long)]
    goal: String,
    /// Professional, Friendly or Playful
    #[arg(long)]
    tone: String,
}

impl From<CampaignArgs> for CampaignInput {
    fn from(args: CampaignArgs) -> Self {
        Self {
            brand_name: args.brand_name,
            platform: args.platform,
            goal: args.goal,
            tone: args.tone,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = briefgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate(args) => {
            let request = validate_input(&args.into())?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Generate(args) => {
            let request = validate_input(&args.into())?;
            let generator = BriefGenerator::from_settings(&config.llm)?;
            let generated = generator
                .generate(&request)
                .await
                .context("Failed to generate brief")?;
            let output = serde_json::json!({
                "success": true,
                "data": generated.brief,
                "metrics": generated.metrics,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
