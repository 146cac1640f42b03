// Vocabulary matching tool: one line of `|`-separated hypotheses per query
use anyhow::Result;
use std::io::BufRead;
use std::path::PathBuf;

use word_matcher::MatcherConfig;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // 1. Locate config
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = MatcherConfig::load_existing(path.as_deref())?;

    // 2. Build matcher
    let matcher = config.build()?;
    tracing::info!("matcher ready ({:?})", config.strategy);

    // 3. Answer queries
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let hypotheses: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect();

        if hypotheses.is_empty() {
            continue;
        }

        if matcher.is_in_any(&hypotheses) {
            println!("match");
        } else {
            println!("no match");
        }
    }

    Ok(())
}
