use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    config::{homepage_url, load_settings},
    BabyVisionClient,
};
use shared::domain::{clamp_age, Gender};

#[derive(Parser, Debug)]
#[command(name = "babyvision", about = "BabyVision command line client")]
struct Args {
    /// Backend base URL; overrides babyvision.toml and environment.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of name suggestions from a preference description.
    Names {
        #[arg(long)]
        input: String,
    },
    /// Generate a portrait for an age and gender.
    Photo {
        #[arg(long)]
        age: i32,
        #[arg(long, default_value = "child")]
        gender: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let api_url = args.api_url.unwrap_or_else(|| load_settings().api_url);
    println!("Backend: {api_url} (homepage: {})", homepage_url(&api_url));
    let client = BabyVisionClient::new(api_url);

    match args.command {
        Command::Names { input } => {
            if input.trim().is_empty() {
                println!("Preference text is empty; nothing to generate.");
                return Ok(());
            }
            let batch = client.generate_names(&input).await?;
            println!("Suggested names:");
            for name in &batch.names {
                println!("  {name}");
            }
            if !batch.suggestions.is_empty() {
                println!("Helpful tips:");
                for tip in &batch.suggestions {
                    println!("  - {tip}");
                }
            }
        }
        Command::Photo { age, gender } => {
            let gender: Gender = gender.parse()?;
            let portrait = client.generate_photo(clamp_age(age), gender).await?;
            println!("Age: {} years", portrait.age);
            println!("Portrait: {}", portrait.image_url);
        }
    }

    Ok(())
}
