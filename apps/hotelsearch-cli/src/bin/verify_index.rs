use std::process;

use hotelsearch_core::config::ServiceConfig;
use hotelsearch_core::error::SearchError;
use hotelsearch_core::types::{SearchMode, SearchRequest};
use hotelsearch_remote::{Dispatcher, RestSearchService};

/// Connectivity and shape check for a freshly configured index:
/// counts documents, lists a sample document's fields, then smoke
/// tests each search mode.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("============================================================");
    println!("SEARCH INDEX VERIFICATION");
    println!("============================================================");

    let config = ServiceConfig::load().unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });
    println!("   Endpoint: {}", config.endpoint);
    println!("   Index: {}", config.index_name);

    let dispatcher = Dispatcher::new(RestSearchService::new(config)?);

    println!("\n------------------------------------------------------------");
    println!("TEST 1: Retrieving all documents");
    println!("------------------------------------------------------------");
    let wildcard = SearchRequest::new("", SearchMode::Keyword, None, 5);
    match dispatcher.dispatch(&wildcard) {
        Ok(envelope) => {
            println!("✅ Total documents in index: {}", envelope.total_count);
            if let Some(first) = envelope.items.first() {
                println!("\n📄 Sample document fields:");
                for (key, value) in &first.fields {
                    let rendered = value.to_string();
                    let short = if rendered.chars().count() > 100 {
                        format!("{}...", rendered.chars().take(100).collect::<String>())
                    } else {
                        rendered
                    };
                    println!("   {}: {}", key, short);
                }
            }
        }
        Err(e) => {
            println!("❌ Wildcard search failed: {}", e);
            process::exit(1);
        }
    }

    println!("\n------------------------------------------------------------");
    println!("TEST 2: Keyword search");
    println!("------------------------------------------------------------");
    let keyword = SearchRequest::new("hotel", SearchMode::Keyword, None, 5);
    match dispatcher.dispatch(&keyword) {
        Ok(envelope) => println!("✅ Keyword search returned {} hits", envelope.total_count),
        Err(e) => println!("❌ Keyword search failed: {}", e),
    }

    println!("\n------------------------------------------------------------");
    println!("TEST 3: Semantic search");
    println!("------------------------------------------------------------");
    let semantic = SearchRequest::new("quiet place to relax", SearchMode::Semantic, None, 5);
    match dispatcher.dispatch(&semantic) {
        Ok(envelope) => {
            println!("✅ Semantic search returned {} hits", envelope.total_count);
            let captioned = envelope.items.iter().filter(|i| i.captions.is_some()).count();
            println!("   Items with captions: {}", captioned);
            match &envelope.answers {
                Some(answers) => println!("   Answers: {}", answers.len()),
                None => println!("   Answers: none"),
            }
        }
        Err(SearchError::Query(detail)) => {
            println!("❌ Semantic search rejected: {}", detail);
            println!("💡 The index may not have semantic search enabled; keyword mode still works.");
        }
        Err(e) => println!("❌ Semantic search failed: {}", e),
    }

    println!("\n============================================================");
    println!("Verification complete");
    println!("============================================================");
    Ok(())
}
