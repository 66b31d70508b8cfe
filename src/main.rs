//! CLI entry point for `throwbox`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use throwbox::config::Config;
use throwbox::decoder;
use throwbox::mailbox::{self, MailboxView, Refresh};
use throwbox::model::message::{DecodedMessage, MessageHeaders};
use throwbox::model::summary::MailSummary;
use throwbox::parser::{eml, MailParserBackend};
use throwbox::source;

#[derive(Parser)]
#[command(
    name = "throwbox",
    version,
    about = "Inspect disposable-inbox messages and mailbox listings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an .eml file and print its body and attachments
    View {
        path: PathBuf,
        #[arg(long)]
        json: bool,
        /// Print HTML bodies as-is instead of rendering them to text
        #[arg(long)]
        raw_html: bool,
    },
    /// Save the attachments of an .eml file
    Attachments {
        path: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also save the raw message next to the attachments
        #[arg(long)]
        raw: bool,
    },
    /// Reconcile a mailbox listing and print the resulting view
    List {
        path: PathBuf,
        /// Listing from the previous poll
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Treat the listing as changed even if the ids match
        #[arg(short, long)]
        force: bool,
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = throwbox::config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Commands::View {
            path,
            json,
            raw_html,
        } => cmd_view(&path, json, raw_html),
        Commands::Attachments { path, output, raw } => {
            cmd_attachments(&path, output.as_deref(), raw, &config)
        }
        Commands::List {
            path,
            previous,
            force,
            json,
        } => cmd_list(&path, previous.as_deref(), force, json, &config),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = throwbox::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "throwbox.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "throwbox", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Decode a message file and print it.
fn cmd_view(path: &Path, json: bool, raw_html: bool) -> anyhow::Result<()> {
    let raw = eml::load_eml(path)?;
    let backend = MailParserBackend::new();
    let headers = backend.headers(&raw)?;
    let message = decoder::decode_raw(&backend, &raw)?;

    if json {
        print_message_json(&headers, &message)
    } else {
        print_message(&headers, &message, raw_html);
        Ok(())
    }
}

/// Save all attachments (and optionally the raw message) of a message file.
fn cmd_attachments(
    path: &Path,
    output: Option<&Path>,
    raw: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let Some(output) = output.or(config.export.default_output_dir.as_deref()) else {
        anyhow::bail!("No output directory given (use --output or export.default_output_dir)");
    };

    let data = eml::load_eml(path)?;
    let message = decoder::decode_raw(&MailParserBackend::new(), &data)?;

    if message.attachments.is_empty() && !raw {
        println!("  No attachments found.");
        return Ok(());
    }

    let paths = throwbox::export::attachment::export_attachments(&message, output)?;
    println!("  Saved {} attachment(s) to {}", paths.len(), output.display());

    if raw {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("message");
        let raw_path = throwbox::export::raw::export_raw(&data, output, name)?;
        println!("  Saved raw message to {}", raw_path.display());
    }

    Ok(())
}

/// Reconcile a listing against an optional previous one and print the view.
fn cmd_list(
    path: &Path,
    previous: Option<&Path>,
    force: bool,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let current = match previous {
        Some(prev) => MailboxView {
            items: {
                let mut items = source::load_listing(prev)?;
                mailbox::sort_newest_first(&mut items);
                items
            },
            ..MailboxView::default()
        },
        None => MailboxView::new(),
    };

    let incoming = source::load_listing(path)?;
    let refresh = current.refresh(incoming, force);
    let changed = matches!(refresh, Refresh::Replaced(_));
    let has_new = refresh.has_new();
    let view = refresh.apply(current);

    if json {
        print_view_json(&view, changed, has_new, config)
    } else {
        print_view_table(&view, changed, has_new, config);
        Ok(())
    }
}

/// Print a decoded message for the terminal.
fn print_message(headers: &MessageHeaders, message: &DecodedMessage, raw_html: bool) {
    use humansize::{format_size, BINARY};

    println!();
    println!("  {}", headers.subject);
    println!("  {}", headers.from.format());
    println!("  to {}", headers.to.format());
    println!("  {}", "-".repeat(78));

    let body = if message.is_html() && !raw_html {
        decoder::html_to_text(&message.body)
    } else {
        message.body.clone()
    };
    if body.is_empty() {
        println!("  (no displayable body)");
    } else {
        for line in body.lines() {
            println!("  {line}");
        }
    }

    if !message.attachments.is_empty() {
        println!("  {}", "-".repeat(78));
        println!("  {} attachment(s):", message.attachments.len());
        for (i, att) in message.attachments.iter().enumerate() {
            let name = if att.name.is_empty() {
                "(unnamed)"
            } else {
                att.name.as_str()
            };
            println!(
                "  {:>3}. {:<40} {:<28} {:>10}",
                i + 1,
                name,
                att.content_type,
                format_size(att.size(), BINARY)
            );
        }
    }
    println!();
}

/// Print a decoded message as JSON.
fn print_message_json(headers: &MessageHeaders, message: &DecodedMessage) -> anyhow::Result<()> {
    let attachments: Vec<serde_json::Value> = message
        .attachments
        .iter()
        .map(|a| {
            serde_json::json!({
                "name": a.name,
                "content_type": a.content_type,
                "size": a.size(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "from": headers.from,
        "to": headers.to,
        "subject": headers.subject,
        "is_html": message.is_html(),
        "body": message.body,
        "attachments": attachments,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Format a listing timestamp with the configured pattern, or show it raw.
fn format_timestamp(ts: &str, config: &Config) -> String {
    match chrono::DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt
            .with_timezone(&chrono::Local)
            .format(&config.list.date_format)
            .to_string(),
        Err(_) => ts.to_string(),
    }
}

/// Print the reconciled mailbox as a table.
fn print_view_table(view: &MailboxView, changed: bool, has_new: bool, config: &Config) {
    println!();
    println!(
        "  {}",
        mailbox::window_title(&config.list.title, &view.items)
    );
    println!(
        "  changed: {}   new mail: {}   selected: {}",
        if changed { "yes" } else { "no" },
        if has_new { "yes" } else { "no" },
        if view.selected_id.is_empty() {
            "-"
        } else {
            view.selected_id.as_str()
        }
    );
    if let Some(notice) = mailbox::new_mail_notice(has_new, config.notify.new_mail_timeout_ms) {
        println!("  {} (shown for {} ms)", notice.text, notice.timeout.as_millis());
    }
    println!();

    if view.items.is_empty() {
        println!("  No Emails");
        println!();
        return;
    }

    let from_width = mailbox::longest_sender_label(&view.items)
        .map(|l| l.chars().count())
        .unwrap_or(4)
        .clamp(4, 40);

    println!(
        "  {:<4} {:<1} {:<from_width$} {:<40} {:>20}",
        "#", "", "From", "Subject", "Date"
    );
    println!("  {}", "-".repeat(70 + from_width));

    for (i, item) in view.items.iter().enumerate() {
        let marker = if item.is_new { "*" } else { " " };
        let from: String = item.sender_label().chars().take(from_width).collect();
        let subject: String = item.subject().chars().take(39).collect();
        println!(
            "  {:<4} {:<1} {:<from_width$} {:<40} {:>20}",
            i + 1,
            marker,
            from,
            subject,
            format_timestamp(&item.timestamp, config)
        );
    }
    println!();
}

/// Print the reconciled mailbox as JSON.
fn print_view_json(
    view: &MailboxView,
    changed: bool,
    has_new: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let items: Vec<serde_json::Value> = view.items.iter().map(summary_json).collect();
    let notice = mailbox::new_mail_notice(has_new, config.notify.new_mail_timeout_ms).map(|n| {
        serde_json::json!({
            "text": n.text,
            "timeout_ms": n.timeout.as_millis() as u64,
        })
    });

    let output = serde_json::json!({
        "changed": changed,
        "has_new": has_new,
        "selected_id": view.selected_id,
        "unread": view.unread_count(),
        "title": mailbox::window_title(&config.list.title, &view.items),
        "from_column_width": mailbox::from_column_width(
            &view.items,
            config.list.from_px_per_char,
            config.list.from_max_width,
        ),
        "notice": notice,
        "items": items,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn summary_json(item: &MailSummary) -> serde_json::Value {
    serde_json::json!({
        "message_id": item.message_id,
        "timestamp": item.timestamp,
        "is_new": item.is_new,
        "from": item.sender_label(),
        "subject": item.subject(),
    })
}
