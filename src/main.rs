use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cv_match::{
    HttpNlpClient, LocalFileStore, MatchPipeline, OfferDetails, OfferProfile, ProviderConfig,
    UploadedFile,
};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Rank a directory of PDF résumés against a job offer.
#[derive(Parser)]
#[command(name = "cv-match")]
#[command(about = "Rank candidate CVs against a job offer by semantic similarity")]
struct Cli {
    /// Directory containing the candidate PDFs
    #[arg(long, default_value = "cvs")]
    cv_dir: PathBuf,

    /// Offer title
    #[arg(long)]
    title: String,

    /// Offer description; prefix with @ to read it from a file
    #[arg(long)]
    description: String,

    /// Required skills
    #[arg(long)]
    skills: Option<String>,

    /// Responsibilities
    #[arg(long)]
    responsibilities: Option<String>,

    /// Minimum years of experience
    #[arg(long)]
    experience_years: Option<u32>,

    /// Salary range
    #[arg(long)]
    salary_range: Option<String>,

    /// Directory where stored copies of the uploads land
    #[arg(long, default_value = "uploads")]
    upload_dir: PathBuf,

    /// Public base URL prepended to stored filenames
    #[arg(long, default_value = "http://127.0.0.1:8000/static")]
    public_base: String,

    /// Also request a generative explanation for the top-ranked candidate
    #[arg(long)]
    explain_top: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ProviderConfig::from_env()?;
    info!("NLP service URL: {}", config.base_url);

    let client = HttpNlpClient::new(config)?;
    client.check_availability().await;

    let description = match cli.description.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read description file: {}", path))?,
        None => cli.description.clone(),
    };

    let details = OfferDetails {
        title: cli.title.clone(),
        description,
        skills_required: cli.skills.clone(),
        responsibilities: cli.responsibilities.clone(),
        experience_years: cli.experience_years,
        salary_range: cli.salary_range.clone(),
    };

    let offer = OfferProfile::build(&client, details).await;
    let files = collect_pdfs(&cli.cv_dir).await?;
    anyhow::ensure!(
        !files.is_empty(),
        "No PDF files found in {}",
        cli.cv_dir.display()
    );

    info!("Processing {} file(s)", files.len());

    let store = LocalFileStore::new(cli.upload_dir.clone(), cli.public_base.clone());
    let pipeline = MatchPipeline::new(client, store);
    let ranked = pipeline.run(&offer, files).await;

    for (position, candidate) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {:>6.2}%  {}  [{} | {}]",
            position + 1,
            candidate.score,
            candidate.file_name,
            candidate.email.as_deref().unwrap_or("-"),
            candidate.phone,
        );
        println!("    {}", candidate.rationale);
    }

    if cli.explain_top {
        if let Some(top) = ranked.first() {
            let explanation = pipeline.explain(top, &offer).await;
            println!("\n--- {} ---\n{}", top.file_name, explanation);
        }
    }

    Ok(())
}

/// Collect the PDF files in `dir`, sorted by name so batch order is stable.
async fn collect_pdfs(dir: &PathBuf) -> Result<Vec<UploadedFile>> {
    let mut files = Vec::new();

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read CV directory: {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .context("Failed to read directory entry")?
    {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        files.push(UploadedFile { name, bytes });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
