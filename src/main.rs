use std::path::PathBuf;

use tracing::info;

use hanaboard::infrastructure::config::SiteConfig;
use hanaboard::infrastructure::fetch::HttpCsvSource;
use hanaboard::interfaces::page::render_page;
use hanaboard::Result;

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = PathBuf::from(args.next().unwrap_or_else(|| "site.json".to_string()));
    let out_path = args.next().map(PathBuf::from);

    let config = SiteConfig::load(&config_path)?;
    let source = HttpCsvSource::new();

    let page = render_page(&config, &source).await;

    match out_path {
        Some(path) => {
            std::fs::write(&path, &page)?;
            info!(path = %path.display(), bytes = page.len(), "Wrote page");
        }
        None => println!("{}", page),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = run().await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
