use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use news_reader::config::Config;
use news_reader::feed::{ControllerState, NewsClient, NewsController};
use news_reader::logging::init_tracing;
use news_reader::models::{ArticleRecord, FilterParameters, CATEGORIES, COUNTRIES, LANGUAGES};

#[derive(Debug, Parser)]
#[command(name = "news-reader", version, about = "Browse newsdata.io headlines")]
struct Cli {
    /// Topic to search for (empty for all news)
    #[arg(short, long)]
    category: Option<String>,

    /// Language code, e.g. en, fr
    #[arg(short, long)]
    language: Option<String>,

    /// Country code, e.g. us, gb ("all" for no restriction)
    #[arg(short = 'C', long)]
    country: Option<String>,

    /// Show the full detail of article N
    #[arg(short, long, value_name = "N")]
    detail: Option<usize>,

    /// Open article N in the browser
    #[arg(short, long, value_name = "N")]
    open: Option<usize>,

    /// Print the filter menu choices and exit
    #[arg(long)]
    list_filters: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn filter(&self, config: &Config) -> anyhow::Result<FilterParameters> {
        let mut params = config.default_filter()?;
        if let Some(category) = &self.category {
            params = params.with_category(category);
        }
        if let Some(language) = &self.language {
            params = params.with_language(language)?;
        }
        if let Some(country) = &self.country {
            let country = Some(country.as_str()).filter(|c| !c.eq_ignore_ascii_case("all"));
            params = params.with_country(country);
        }
        Ok(params)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_filters {
        println!("Languages:  {}", LANGUAGES.join(", "));
        println!("Categories: {}", CATEGORIES.join(", "));
        println!("Countries:  {}", COUNTRIES.join(", "));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let params = cli.filter(&config)?;
    let client = NewsClient::from_config(&config)?;
    let controller = NewsController::with_parameters(client, params);

    let mut rx = controller.subscribe();
    let state = {
        let settled = rx
            .wait_for(|s| !s.is_loading())
            .await
            .context("Controller stopped before the fetch completed")?;
        ControllerState::clone(&settled)
    };

    if let Some(error) = &state.last_error {
        if state.is_empty() {
            bail!("Could not load news: {}", error);
        }
    }

    if cli.detail.is_none() && cli.open.is_none() {
        print_list(&state.parameters, &state.articles);
        return Ok(());
    }

    if let Some(n) = cli.detail {
        print_detail(select_article(&state.articles, n)?);
    }
    if let Some(n) = cli.open {
        let link = select_article(&state.articles, n)?
            .link
            .as_deref()
            .context("Article has no link to open")?;
        open::that(link).with_context(|| format!("Failed to open {}", link))?;
    }

    Ok(())
}

/// Article by its 1-based position in the printed list
fn select_article(articles: &[ArticleRecord], n: usize) -> anyhow::Result<&ArticleRecord> {
    n.checked_sub(1)
        .and_then(|i| articles.get(i))
        .with_context(|| format!("No article #{} (have {})", n, articles.len()))
}

fn print_list(params: &FilterParameters, articles: &[ArticleRecord]) {
    println!(
        "News [{} | {} | {}]",
        params.category_label(),
        params.language(),
        params.country_label()
    );
    if articles.is_empty() {
        println!("(no articles)");
        return;
    }

    for (i, article) in articles.iter().enumerate() {
        let date = article
            .published_at()
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| article.published_label());
        println!("{:>3}. {}", i + 1, article.display_title());
        println!("     {} | {}", article.display_source(), date);
    }
}

fn print_detail(article: &ArticleRecord) {
    println!("{}", article.display_title());
    println!();
    println!("Published: {}", article.published_label());
    if let Some(image) = &article.image_url {
        println!("Image: {}", image);
    }
    println!();
    println!("{}", article.display_description());
    println!();
    println!("Source: {}", article.display_source());
    if let Some(url) = &article.source_url {
        println!("URL: {}", url);
    }
    if let Some(countries) = article.country_label() {
        println!("Country: {}", countries);
    }
    if let Some(link) = &article.link {
        println!("Link: {}", link);
    }
}
