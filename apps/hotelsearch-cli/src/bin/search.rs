use std::env;
use std::process;

use hotelsearch_core::config::ServiceConfig;
use hotelsearch_core::types::{Category, FacetSelection, SearchMode, SearchRequest};
use hotelsearch_query::{build_filter, present, DisplayRecord};
use hotelsearch_remote::{Dispatcher, RestSearchService};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <query> [mode] [options]", program);
    eprintln!("  mode: keyword (default) | semantic | semantic-filter");
    eprintln!("  --min-rating <1.0-5.0>   minimum hotel rating");
    eprintln!("  --parking                only hotels with parking included");
    eprintln!("  --category <name>        repeatable: Budget, Boutique, Luxury, Resort, Suite");
    eprintln!("  --top <5-50>             number of results");
    eprintln!("Example: {} 'romantic getaway' semantic-filter --min-rating 4 --category Luxury", program);
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let query = args[1].clone();
    let mut mode = SearchMode::Keyword;
    let mut selection = FacetSelection::default();
    let mut top = 10usize;

    let mut i = 2;
    if i < args.len() && !args[i].starts_with("--") {
        mode = args[i].parse().unwrap_or_else(|e: String| {
            eprintln!("❌ {}", e);
            usage(&args[0]);
        });
        i += 1;
    }
    while i < args.len() {
        match args[i].as_str() {
            "--min-rating" => {
                i += 1;
                let raw: f64 = args.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| usage(&args[0]));
                selection.min_rating = raw.clamp(1.0, 5.0);
            }
            "--parking" => selection.parking_required = true,
            "--category" => {
                i += 1;
                let category: Category = args
                    .get(i)
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| usage(&args[0]));
                selection.categories.push(category);
            }
            "--top" => {
                i += 1;
                top = args.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| usage(&args[0]));
            }
            _ => usage(&args[0]),
        }
        i += 1;
    }

    let config = ServiceConfig::load().unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });

    let filters_enabled = mode != SearchMode::Semantic;
    let filter = build_filter(&selection, filters_enabled);
    let request = SearchRequest::new(query.clone(), mode, filter, top);

    println!("🏨 hotelsearch");
    println!("==============");
    println!("Query: {}", if query.is_empty() { "* (all hotels)" } else { &query });
    println!("Mode: {:?}", mode);
    if let Some(f) = &request.filter {
        println!("Filter: {}", f);
    }

    let service = RestSearchService::new(config)?;
    let envelope = Dispatcher::new(service).dispatch(&request)?;

    println!("\n🔍 Found {} hotels", envelope.total_count);

    if let Some(answers) = &envelope.answers {
        println!("\n💬 Answer: {}", answers[0]);
    }

    for (i, record) in present(&envelope).iter().enumerate() {
        print_record(i + 1, record);
    }

    Ok(())
}

fn print_record(rank: usize, record: &DisplayRecord) {
    match record.score {
        Some(score) => println!("\n  {}. {} (score {:.3})", rank, record.title, score),
        None => println!("\n  {}. {}", rank, record.title),
    }
    if let Some(category) = record.fields.get("Category").and_then(|v| v.as_str()) {
        println!("     🏷️  Category: {}", category);
    }
    if let Some(rating) = record.fields.get("Rating").and_then(|v| v.as_f64()) {
        println!("     ⭐ Rating: {}/5", rating);
    }
    if let Some(caption) = &record.caption {
        println!("     📝 {}", caption);
    }
}
