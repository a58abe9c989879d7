use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use verz::browser::{Action, Browser};
use verz::commands::page::PageView;
use verz::commands::{CmdMessage, CmdResult, MessageLevel};
use verz::config::VerzConfig;
use verz::error::Result;
use verz::source::fs::FileSource;
use verz::source::CorpusSource;

mod args;
mod browse;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_path = resolve_data_path(&cli);
    let corpus = FileSource::new(&data_path).load()?;
    let mut browser = Browser::new(corpus);

    match cli.command {
        Some(Commands::Show { chapter }) => handle_show(&mut browser, chapter),
        Some(Commands::Search { term }) => handle_search(&mut browser, term),
        Some(Commands::Random) => handle_random(&mut browser),
        Some(Commands::Browse { chapter }) => browse::run(&mut browser, chapter),
        None => browse::run(&mut browser, None),
    }
}

/// `--data` wins, then a project-local `.verz/config.json`, then the user
/// config dir, then the conventional `data.json` next to the caller.
fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.data {
        return path.clone();
    }

    let project_dir = PathBuf::from(".verz");
    let config = if project_dir.exists() {
        VerzConfig::load(&project_dir).unwrap_or_default()
    } else if let Some(dirs) = ProjectDirs::from("com", "verz", "verz") {
        VerzConfig::load(dirs.config_dir()).unwrap_or_default()
    } else {
        VerzConfig::default()
    };

    PathBuf::from(config.data_file)
}

fn handle_show(browser: &mut Browser, chapter: Option<usize>) -> Result<()> {
    let result = match chapter {
        Some(n) => browser.dispatch(Action::Jump(n)),
        None => browser.dispatch(Action::Refresh),
    };
    print_result(&result);
    Ok(())
}

fn handle_search(browser: &mut Browser, term: String) -> Result<()> {
    let result = browser.dispatch(Action::Search(term));
    print_result(&result);
    Ok(())
}

fn handle_random(browser: &mut Browser) -> Result<()> {
    let result = browser.dispatch(Action::Random);
    print_result(&result);
    Ok(())
}

pub fn print_result(result: &CmdResult) {
    if let Some(page) = &result.page {
        print_page(page);
    }
    if let Some(verse) = &result.spotlight {
        print_spotlight(verse);
    }
    print_messages(&result.messages);
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const COLUMN_GAP: usize = 2;

pub fn print_page(page: &PageView) {
    let prev_marker = if page.has_previous { "‹" } else { " " };
    let next_marker = if page.has_next { "›" } else { " " };
    let counter = format!("CHAPTER {} OF {}", page.chapter_number, page.chapter_count);
    println!(
        "{} {} {}",
        prev_marker.dimmed(),
        counter.bold(),
        next_marker.dimmed()
    );

    let widths = column_widths(page);
    let table_width =
        widths.iter().sum::<usize>() + COLUMN_GAP * widths.len().saturating_sub(1);
    println!("{}", "-".repeat(table_width.max(counter.width() + 4)));

    for row in &page.rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            let padding = widths[i].saturating_sub(cell.text.width());
            let padded = format!("{}{}", cell.text, " ".repeat(padding));
            let rendered = if cell.highlighted {
                padded.yellow().bold().to_string()
            } else {
                padded
            };
            if i > 0 {
                line.push_str(&" ".repeat(COLUMN_GAP));
            }
            line.push_str(&rendered);
        }
        println!("{}", line.trim_end());
    }
}

pub fn print_spotlight(verse: &str) {
    println!("{}", verse.yellow().bold());
}

fn column_widths(page: &PageView) -> Vec<usize> {
    let columns = page.rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in &page.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.width());
        }
    }
    widths
}
