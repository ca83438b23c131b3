use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use atelier_core::core::catalog;
use atelier_core::core::types::{QueryCandidate, Realm, SelectionSet};
use atelier_core::share;
use atelier_core::storage::FileStore;
use atelier_core::AtelierEngine;
use crossterm::style::Stylize;

// This function reliably gets the correct path for any user.
fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("keyword-atelier");
    path
}

fn main() {
    let dir = data_dir();
    let mut engine = AtelierEngine::open(&dir);

    let mut realm = Realm::Fashion;
    let mut toggled: Vec<String> = Vec::new();
    let mut toggled_colors: Vec<String> = Vec::new();
    let mut inspiration = String::new();
    let mut details = String::new();
    let mut results: Vec<QueryCandidate> = Vec::new();
    let mut status = String::from("Choose your realm, toggle a few chips, then press Enter.");

    loop {
        print_ui(
            realm,
            &toggled,
            &toggled_colors,
            &inspiration,
            &details,
            &results,
            engine.favourites().len(),
            engine.install_hint_dismissed(),
            &dir,
            &status,
        );
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap_or(0) == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" | "gen" => {
                let selection =
                    current_selection(realm, &toggled, &toggled_colors, &inspiration, &details);
                match engine.generate(&selection) {
                    Ok(generated) => {
                        results = generated;
                        status = "Keywords ready. Paste one into the 拼多多 search bar.".to_string();
                    }
                    Err(e) => {
                        results.clear();
                        status = format!("{e} ✦");
                    }
                }
            }
            "fashion" => switch_realm(Realm::Fashion, &mut realm, &mut toggled, &mut results),
            "home" => switch_realm(Realm::Home, &mut realm, &mut toggled, &mut results),
            "chars" | "character" => {
                switch_realm(Realm::Character, &mut realm, &mut toggled, &mut results)
            }
            "favs" => show_favourites(&engine),
            "share" => {
                if results.is_empty() {
                    status = "Nothing to share yet - generate keywords first.".to_string();
                } else {
                    println!("\n{}", share::share_all_text(&results));
                    pause();
                }
            }
            "x" => {
                engine.dismiss_install_hint();
                status = "Noted - the storage tip stays hidden from now on.".to_string();
            }
            other => {
                if let Some(rest) = other.strip_prefix(':') {
                    status = save_candidate(
                        &mut engine,
                        realm,
                        &results,
                        rest,
                        &current_selection(realm, &toggled, &toggled_colors, &inspiration, &details),
                    );
                } else if let Some(rest) = other.strip_prefix("o ").or(other.strip_prefix("open "))
                {
                    match parse_index(rest, results.len()) {
                        Some(idx) => {
                            println!("\n{}", share::search_url(&results[idx].keyword));
                            pause();
                        }
                        None => status = "No such keyword.".to_string(),
                    }
                } else if let Some(rest) = other.strip_prefix("s ") {
                    match parse_index(rest, results.len()) {
                        Some(idx) => {
                            println!("\n{}", share::share_text(&results[idx].keyword));
                            pause();
                        }
                        None => status = "No such keyword.".to_string(),
                    }
                } else if let Some(rest) = other.strip_prefix("rm ") {
                    engine.remove_favourite(rest.trim());
                    status = "Removed (if it existed).".to_string();
                } else if let Some(rest) = other.strip_prefix("i ") {
                    inspiration = rest.to_string();
                } else if other == "i" {
                    inspiration.clear();
                } else if let Some(rest) = other.strip_prefix("d ") {
                    details = rest.to_string();
                } else if other == "d" {
                    details.clear();
                } else if let Some(rest) = other.strip_prefix('c') {
                    match parse_index(rest, catalog::color_palette().len()) {
                        Some(idx) => {
                            let localized = catalog::color_palette()[idx].localized;
                            toggle(&mut toggled_colors, localized);
                        }
                        None => status = "No such color.".to_string(),
                    }
                } else {
                    let items = realm_items(realm);
                    match parse_index(other, items.len()) {
                        Some(idx) => toggle(&mut toggled, items[idx]),
                        None => status = format!("Unknown command '{other}'."),
                    }
                }
            }
        }
    }

    println!(
        "\nGoodbye - {} favourite(s) saved under {}",
        engine.favourites().len(),
        dir.display()
    );
}

#[allow(clippy::too_many_arguments)]
fn print_ui(
    realm: Realm,
    toggled: &[String],
    toggled_colors: &[String],
    inspiration: &str,
    details: &str,
    results: &[QueryCandidate],
    fav_count: usize,
    hint_dismissed: bool,
    dir: &PathBuf,
    status: &str,
) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "✦ Keyword Atelier ✦".bold().dark_yellow());
    println!("Describe your desire - receive the perfect Chinese search phrase.");
    println!("----------------------------------------------------------------");
    println!(
        "Realms: fashion | home | chars   (current: {})   Wishlist: {}",
        realm.as_str().bold(),
        fav_count
    );
    if !hint_dismissed {
        println!(
            "{}",
            format!("📱 Favourites persist under {} - type 'x' to hide this note.", dir.display())
                .dim()
        );
    }

    let mut index = 0;
    for group in catalog::option_groups(realm) {
        println!("\n{}", group.label.bold());
        let mut line = String::new();
        for item in group.items {
            index += 1;
            let selected = toggled.iter().any(|t| t == item);
            let cell = if selected {
                format!("[{index:>2}] {} ", format!("{item} ✓").green())
            } else {
                format!("[{index:>2}] {item} ")
            };
            line.push_str(&cell);
            if index % 4 == 0 {
                println!("  {line}");
                line.clear();
            }
        }
        if !line.is_empty() {
            println!("  {line}");
        }
    }

    println!("\n{}", "Color Palette (toggle with c<n>)".bold());
    let mut line = String::new();
    for (i, color) in catalog::color_palette().iter().enumerate() {
        let selected = toggled_colors.iter().any(|t| t == color.localized);
        let cell = if selected {
            format!("[c{:>2}] {} ", i + 1, format!("{} {} ✓", color.name, color.localized).green())
        } else {
            format!("[c{:>2}] {} {} ", i + 1, color.name, color.localized)
        };
        line.push_str(&cell);
        if (i + 1) % 4 == 0 {
            println!("  {line}");
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("  {line}");
    }

    println!(
        "\nInspo: [{}]   Details: [{}]",
        inspiration.to_string().cyan(),
        details.to_string().cyan()
    );

    if !results.is_empty() {
        println!("\n{}", "Your Keywords ✦ 您的搜索关键词".bold().dark_yellow());
        for (i, candidate) in results.iter().enumerate() {
            println!(
                "  {}. {} - {}",
                i + 1,
                candidate.label().bold(),
                candidate.tip().dim()
            );
            println!("     {}", candidate.keyword.as_str().cyan());
        }
        println!(
            "{}",
            "  :<n> save to wishlist · o <n> search URL · s <n>/share".dim()
        );
    }

    println!(
        "\n{}",
        "Commands: <n>/c<n> toggle · i/d <text> · Enter generate · favs · rm <id> · exit".dim()
    );
    if !status.is_empty() {
        println!("{}", status.to_string().dark_yellow());
    }
    print!("> ");
    stdout().flush().unwrap();
}

fn show_favourites(engine: &AtelierEngine<FileStore>) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "♥ My Wishlist ♥".bold().red());
    let favourites = engine.favourites();
    if favourites.is_empty() {
        println!("\nNo favourites yet - generate keywords and save them with :<n>.");
    } else {
        println!("\n{} saved keyword(s)\n", favourites.len());
        for record in &favourites {
            let date = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(record.saved_at)
                .map(|d| d.format("%b %e, %Y").to_string())
                .unwrap_or_default();
            println!("  {} {}", record.label.as_str().bold(), date.dim());
            println!("  {}", record.keyword.as_str().cyan());
            if !record.tags.is_empty() {
                println!("  tags: {}", record.tags.join(", ").dim());
            }
            println!("  id: {}   (rm {} to remove)\n", record.id, record.id);
        }
    }
    pause();
}

fn save_candidate(
    engine: &mut AtelierEngine<FileStore>,
    realm: Realm,
    results: &[QueryCandidate],
    raw_index: &str,
    selection: &SelectionSet,
) -> String {
    match parse_index(raw_index, results.len()) {
        Some(idx) => {
            let record = engine.save_favourite(&results[idx], realm, &selection.tags());
            format!("Saved ♥ {}", record.keyword)
        }
        None => "No such keyword.".to_string(),
    }
}

fn current_selection(
    realm: Realm,
    toggled: &[String],
    toggled_colors: &[String],
    inspiration: &str,
    details: &str,
) -> SelectionSet {
    let labels: Vec<&str> = toggled.iter().map(String::as_str).collect();
    let colors: Vec<&str> = toggled_colors.iter().map(String::as_str).collect();
    let mut selection = SelectionSet::from_toggles(realm, &labels, &colors);
    selection.inspiration = inspiration.to_string();
    selection.details = details.to_string();
    selection
}

fn switch_realm(
    next: Realm,
    realm: &mut Realm,
    toggled: &mut Vec<String>,
    results: &mut Vec<QueryCandidate>,
) {
    // Chip selections belong to a realm; colors survive the switch.
    *realm = next;
    toggled.clear();
    results.clear();
}

fn realm_items(realm: Realm) -> Vec<&'static str> {
    catalog::option_groups(realm)
        .iter()
        .flat_map(|group| group.items.iter().copied())
        .collect()
}

fn toggle(list: &mut Vec<String>, label: &str) {
    if let Some(pos) = list.iter().position(|t| t == label) {
        list.remove(pos);
    } else {
        list.push(label.to_string());
    }
}

/// 1-based user index into a list of `len` entries.
fn parse_index(raw: &str, len: usize) -> Option<usize> {
    let n: usize = raw.trim().parse().ok()?;
    if n >= 1 && n <= len {
        Some(n - 1)
    } else {
        None
    }
}

fn pause() {
    print!("\n(Enter to return) ");
    stdout().flush().unwrap();
    let mut throwaway = String::new();
    let _ = stdin().read_line(&mut throwaway);
}
