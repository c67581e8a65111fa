use std::io::{self, BufRead, Write};
use std::process;

use hotelsearch_core::config::ServiceConfig;
use hotelsearch_core::types::{Category, FacetSelection, SearchMode, SearchRequest};
use hotelsearch_query::{build_filter, present, SearchSession};
use hotelsearch_remote::{Dispatcher, RestSearchService};

/// Interactive search loop. Every input re-evaluates the trigger
/// policy against the session's last executed request, so changing a
/// facet or the mode re-fires the search the way the auto-search UX
/// does, while an unchanged state stays quiet.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🏨 Interactive Hotel Search");
    println!("===========================");

    let config = ServiceConfig::load().unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });
    let default_limit = config.default_limit;
    let dispatcher = Dispatcher::new(RestSearchService::new(config)?);

    println!("✅ Connected. Type a query, or :help for commands.");
    println!();

    let mut session = SearchSession::new();
    let mut query = String::new();
    let mut mode = SearchMode::Keyword;
    let mut selection = FacetSelection::default();
    let mut top = default_limit;
    let mut auto_search = true;

    let stdin = io::stdin();
    loop {
        print!("search> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let mut explicit = false;
        match line {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" => {
                print_help();
                continue;
            }
            ":search" => explicit = true,
            _ if line.starts_with(':') => {
                if let Err(msg) = apply_command(line, &mut mode, &mut selection, &mut top, &mut auto_search) {
                    println!("❌ {}", msg);
                    continue;
                }
            }
            _ => query = line.to_string(),
        }

        let filters_enabled = mode != SearchMode::Semantic;
        let filter = build_filter(&selection, filters_enabled);
        let request = SearchRequest::new(query.clone(), mode, filter, top);

        if !session.evaluate(&request, explicit, auto_search) {
            if !auto_search && !explicit {
                println!("ℹ️  Auto-search is off; run :search to dispatch.");
            }
            continue;
        }

        match dispatcher.dispatch(&request) {
            Ok(envelope) => {
                session.record(request);
                println!("🔍 Found {} hotels", envelope.total_count);
                if let Some(answers) = &envelope.answers {
                    println!("💬 Answer: {}", answers[0]);
                }
                for (i, record) in present(&envelope).iter().enumerate() {
                    match record.score {
                        Some(score) => println!("  {}. {} (score {:.3})", i + 1, record.title, score),
                        None => println!("  {}. {}", i + 1, record.title),
                    }
                    if let Some(caption) = &record.caption {
                        println!("     📝 {}", caption);
                    }
                }
            }
            Err(e) => println!("❌ {}", e),
        }
        println!();
    }

    Ok(())
}

fn apply_command(
    line: &str,
    mode: &mut SearchMode,
    selection: &mut FacetSelection,
    top: &mut usize,
    auto_search: &mut bool,
) -> Result<(), String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match command {
        ":mode" => *mode = rest.parse()?,
        ":rating" => {
            let raw: f64 = rest.parse().map_err(|_| format!("bad rating '{}'", rest))?;
            selection.min_rating = raw.clamp(1.0, 5.0);
        }
        ":parking" => selection.parking_required = matches!(rest, "on" | "true" | "yes"),
        ":categories" => {
            selection.categories.clear();
            if rest != "none" {
                for name in rest.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    selection.categories.push(name.parse::<Category>()?);
                }
            }
        }
        ":top" => {
            *top = rest.parse().map_err(|_| format!("bad count '{}'", rest))?;
        }
        ":auto" => *auto_search = matches!(rest, "on" | "true" | "yes"),
        other => return Err(format!("unknown command '{}' (:help for the list)", other)),
    }
    Ok(())
}

fn print_help() {
    println!("  <text>                 set the query (auto-searches on change)");
    println!("  :mode <m>              keyword | semantic | semantic-filter");
    println!("  :rating <1.0-5.0>      minimum rating facet");
    println!("  :parking on|off        parking-included facet");
    println!("  :categories A,B|none   category facet, e.g. Luxury,Resort");
    println!("  :top <5-50>            result count");
    println!("  :auto on|off           toggle auto-search");
    println!("  :search                dispatch now regardless of changes");
    println!("  :quit                  exit");
}
