use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use taskz::api::{
    CmdMessage, ConfigAction, ItemUpdate, ListFilter, MessageLevel, StatusFilter, TaskzApi,
};
use taskz::config::TaskzConfig;
use taskz::error::Result;
use taskz::model::{Item, Priority};
use taskz::store::fs::FsBackend;
use taskz::store::TaskStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TaskzApi<FsBackend>,
    data_file: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            notes,
            priority,
            due,
        }) => handle_add(&ctx, title, notes, priority, due),
        Some(Commands::List { done, open, search }) => handle_list(&ctx, done, open, search),
        Some(Commands::Done { ids }) => handle_done(&ctx, ids),
        Some(Commands::Edit {
            id,
            title,
            notes,
            priority,
            due,
        }) => handle_edit(&ctx, id, title, notes, priority, due),
        Some(Commands::Delete { ids }) => handle_delete(&ctx, ids),
        Some(Commands::Clear) => handle_clear(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_file = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "taskz", "taskz").expect("Could not determine data dir");
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let config = TaskzConfig::load(&data_dir).unwrap_or_default();
            data_dir.join(config.data_file_name())
        }
    };

    let config_dir = data_file
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    let store = TaskStore::new(FsBackend::new(data_file.clone()));
    let api = TaskzApi::new(store, config_dir);
    api.load()?;

    Ok(AppContext { api, data_file })
}

fn handle_add(
    ctx: &AppContext,
    title: String,
    notes: Option<String>,
    priority: Priority,
    due: String,
) -> Result<()> {
    let result = ctx
        .api
        .add_task(&title, notes.as_deref().unwrap_or(""), priority, &due)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, done: bool, open: bool, search: Option<String>) -> Result<()> {
    let status = if done {
        StatusFilter::Done
    } else if open {
        StatusFilter::Open
    } else {
        StatusFilter::All
    };
    let result = ctx.api.list_tasks(ListFilter {
        status,
        search_term: search,
    })?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.toggle_tasks(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &AppContext,
    id: u64,
    title: Option<String>,
    notes: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
) -> Result<()> {
    let update = ItemUpdate {
        id,
        title,
        notes,
        priority,
        due,
    };
    let result = ctx.api.update_task(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.delete_tasks(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.data_file.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file_name());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const NOTES_PREVIEW_CHARS: usize = 40;

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No tasks found.");
        return;
    }

    for item in items {
        let check = if item.done { "[x] " } else { "[ ] " };
        let idx_str = format!("{}. ", item.id);

        let notes_preview: String = item
            .notes
            .chars()
            .take(NOTES_PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let mut line_text = item.title.clone();
        if !notes_preview.is_empty() {
            line_text.push(' ');
            line_text.push_str(&notes_preview);
        }
        if !item.due.is_empty() {
            line_text.push_str(&format!(" [{}]", item.due));
        }

        let right_suffix = match item.priority {
            Priority::High => "! ",
            _ => "  ",
        };

        let time_ago = format_time_ago(item.created_at);

        let fixed_width = check.width() + idx_str.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let text_display = truncate_to_width(&line_text, available);
        let padding = available.saturating_sub(text_display.width());

        let idx_colored = match item.priority {
            Priority::High => idx_str.yellow(),
            Priority::Low => idx_str.dimmed(),
            Priority::Medium => idx_str.normal(),
        };
        let check_colored = if item.done {
            check.green()
        } else {
            check.normal()
        };
        let text_colored = if item.done {
            text_display.dimmed()
        } else {
            text_display.normal()
        };
        let suffix_colored = match item.priority {
            Priority::High => right_suffix.red(),
            _ => right_suffix.normal(),
        };

        println!(
            "{}{}{}{}{}{}",
            check_colored,
            idx_colored,
            text_colored,
            " ".repeat(padding),
            suffix_colored,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
