// Site search widget host for the terminal.
//
// Each stdin line (or --query value) is one input-change event on the search
// field. After every event the results container is written to stdout as
// HTML. Logs go to stderr.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodegen_tools_sitesearch::utils::{DEFAULT_DATA_PATH, MAX_RENDERED_RESULTS};
use kodegen_tools_sitesearch::{HtmlResultsView, SearchWidget, WidgetConfig};

#[derive(Debug, Parser)]
#[command(name = "kodegen-sitesearch", version, about = "Search a site's search.json from the terminal")]
#[command(group(ArgGroup::new("source").required(true).args(["site", "url", "file"])))]
struct Cli {
    /// Site root; the document list is fetched from <SITE><DATA_PATH>
    #[arg(long)]
    site: Option<String>,

    /// Full URL of the document list
    #[arg(long)]
    url: Option<String>,

    /// Local document list
    #[arg(long)]
    file: Option<PathBuf>,

    /// Document list path below --site
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_path: String,

    /// Maximum number of results rendered per query
    #[arg(long, default_value_t = MAX_RENDERED_RESULTS)]
    max_results: usize,

    /// Disable English stemming
    #[arg(long)]
    no_stemming: bool,

    /// Queries to run instead of reading stdin
    #[arg(short, long = "query")]
    queries: Vec<String>,

    /// Print the whole <ul> container instead of its children
    #[arg(long)]
    outer: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn build_config(cli: &Cli) -> Result<WidgetConfig> {
    let builder = match (&cli.site, &cli.url, &cli.file) {
        (Some(site), _, _) => WidgetConfig::builder().site_url(site.as_str()),
        (_, Some(url), _) => WidgetConfig::builder().data_url(url.as_str()),
        (_, _, Some(file)) => WidgetConfig::builder().data_file(file.clone()),
        _ => anyhow::bail!("one of --site, --url or --file is required"),
    };

    builder
        .data_path(cli.data_path.as_str())
        .max_results(cli.max_results)
        .stemming(!cli.no_stemming)
        .build()
}

fn handle_event(widget: &mut SearchWidget, view: &mut HtmlResultsView, input: &str, outer: bool) {
    if let Err(e) = widget.handle_input(input, view) {
        tracing::warn!(input = %input, error = %e, "Input event not handled");
    }

    if outer {
        println!("{}", view.outer_html());
    } else {
        println!("{}", view.inner_html());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut view = HtmlResultsView::new(config.results_element_id());
    let mut widget = SearchWidget::new(config);
    widget.mount(&mut view).await?;

    if !cli.queries.is_empty() {
        for query in &cli.queries {
            handle_event(&mut widget, &mut view, query, cli.outer);
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle_event(&mut widget, &mut view, &line, cli.outer);
    }

    Ok(())
}
