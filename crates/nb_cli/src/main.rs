use std::sync::Arc;

use clap::Parser;
use tracing::info;

use nb_core::{BriefingStore, CompanyBriefing, Result};
use nb_pipeline::BriefingProcessor;
use nb_providers::{
    FinnhubClient, GoogleTranslateClient, GttsClient, HfSummaryModel, NewsApiClient,
    ProviderConfig, YahooTickerClient,
};
use nb_store::MemoryStore;
use nb_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Company news briefings: summarized, scored and spoken", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch and process recent news for a company
    Fetch {
        /// Company name, e.g. "Acme Corp"
        company: String,
    },
    /// Fetch news for a company, then filter the processed briefings
    Search {
        company: String,
        /// Case-insensitive keyword to match against summaries
        keyword: String,
        #[arg(long, default_value_t = -1.0)]
        min_score: f64,
        #[arg(long, default_value_t = 1.0)]
        max_score: f64,
    },
    /// Serve the briefing API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,
    },
}

fn build_processor(
    config: &ProviderConfig,
    store: Arc<dyn BriefingStore>,
) -> Result<BriefingProcessor> {
    Ok(BriefingProcessor::new(
        Arc::new(FinnhubClient::new(config.finnhub_api_key.clone())?),
        Arc::new(YahooTickerClient::new()?),
        Arc::new(NewsApiClient::new(config.news_api_key.clone())?),
        Arc::new(HfSummaryModel::new(config.hf_api_key.clone())?),
        Arc::new(GoogleTranslateClient::new()?),
        Arc::new(GttsClient::new(config.audio_dir.clone())?),
        store,
    ))
}

fn print_briefing(briefing: &CompanyBriefing) {
    if !briefing.company_found {
        println!("⚠️ Could not find a ticker for {}", briefing.company);
        return;
    }
    println!(
        "✅ {} ({})",
        briefing.company,
        briefing.ticker.as_deref().unwrap_or("?")
    );
    if briefing.records.is_empty() {
        println!("⚠️ No news found");
        return;
    }

    for (i, record) in briefing.records.iter().enumerate() {
        println!("\n🔹 Article {}:", i + 1);
        println!("Title: {}", record.title);
        println!("Source: {}", record.source);
        println!("Date: {}", record.published_at);
        if let Some(url) = &record.url {
            println!("URL: {url}");
        }
        println!("📝 Summary: {}", record.summary);
        println!(
            "📊 Sentiment: {} (score: {:.2})",
            record.sentiment.label, record.sentiment.score
        );
        match &record.audio {
            Some(path) => println!("🎙️ Hindi audio: {path}"),
            None => println!("🎙️ Hindi audio: unavailable"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = ProviderConfig::from_env()?;
    let store = Arc::new(MemoryStore::new());
    let processor = Arc::new(build_processor(
        &config,
        store.clone() as Arc<dyn BriefingStore>,
    )?);

    match cli.command {
        Commands::Fetch { company } => {
            let briefing = processor.process(&company).await?;
            print_briefing(&briefing);
        }
        Commands::Search {
            company,
            keyword,
            min_score,
            max_score,
        } => {
            let briefing = processor.process(&company).await?;
            if !briefing.company_found {
                println!("⚠️ Could not find a ticker for {company}");
                return Ok(());
            }
            let hits = store.query(&keyword, min_score, max_score).await?;
            println!(
                "🔍 {} of {} briefings match keyword {keyword:?} in [{min_score}, {max_score}]",
                hits.len(),
                briefing.records.len()
            );
            for record in &hits {
                println!(
                    "- {} [{} {:.2}] {}",
                    record.title, record.sentiment.label, record.sentiment.score, record.summary
                );
            }
        }
        Commands::Serve { addr } => {
            let app = nb_web::create_app(AppState {
                processor: processor.clone(),
                audio_dir: config.audio_dir.clone(),
            });
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 Serving briefings on {addr}");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
