use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use acctree::audit::AuditLogger;
use acctree::cli::{
    handle_account_command, handle_audit_command, handle_search_command, handle_service_command,
    AccountCommands, ServiceCommands,
};
use acctree::config::{AppPaths, Settings};
use acctree::display::format_tree;
use acctree::editor::RecordEditor;
use acctree::storage::DocumentStore;
use acctree::AcctreeError;

#[derive(Parser)]
#[command(
    name = "acctree",
    author = "Kaylee Beyene",
    version,
    about = "Terminal editor for a JSON tree of accounts and services",
    long_about = "acctree edits a JSON document of accounts, each holding \
                  credentials and a list of services, plus a catch-all OTHERS \
                  bucket. Use the interactive TUI or one-shot commands."
)]
struct Cli {
    /// Data file to edit
    #[arg(short, long, global = true, env = "ACCTREE_DATA_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the whole document as a tree
    Tree {
        /// Show passwords and PINs in clear text
        #[arg(short, long)]
        reveal: bool,
    },

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Service management commands
    #[command(subcommand)]
    Service(ServiceCommands),

    /// List service names of an account that match a query
    Search {
        /// Account email, or OTHERS
        account: String,
        /// Text to look for in service names
        #[arg(default_value = "")]
        query: String,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = paths.data_file(cli.file.as_deref(), &settings.data_file);
    let audit = AuditLogger::new(paths.audit_log());
    debug!("Using data file {}", data_file.display());

    if let Some(Commands::Config) = cli.command {
        print_config(&paths, &settings, &data_file);
        return Ok(());
    }
    if let Some(Commands::Audit { limit }) = cli.command {
        handle_audit_command(&audit, limit)?;
        return Ok(());
    }

    let store = DocumentStore::new(&data_file).with_indent(settings.indent);
    let (editor, warning) = RecordEditor::open(store);
    let mut editor = if settings.audit_enabled {
        editor.with_audit(audit)
    } else {
        editor
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            let warning = warning.map(|w| load_message(&w));
            acctree::tui::run_tui(editor, settings.confirm_on_exit, warning)?;
        }
        Some(command) => {
            // One-shot commands start from an empty document without comment
            if let Some(w) = warning.filter(|w| !w.is_not_found()) {
                if command.mutates() {
                    anyhow::bail!(
                        "{}; refusing to modify {}",
                        load_message(&w),
                        data_file.display()
                    );
                }
                eprintln!("{}", load_message(&w));
            }
            match command {
                Commands::Tree { reveal } => print!("{}", format_tree(editor.document(), reveal)),
                Commands::Account(cmd) => handle_account_command(&mut editor, cmd)?,
                Commands::Service(cmd) => handle_service_command(&mut editor, cmd)?,
                Commands::Search { account, query } => {
                    handle_search_command(&editor, &account, &query)?
                }
                Commands::Tui | Commands::Audit { .. } | Commands::Config => {}
            }
        }
    }

    Ok(())
}

impl Commands {
    /// Whether the command writes the data file
    fn mutates(&self) -> bool {
        match self {
            Commands::Account(cmd) => cmd.mutates(),
            Commands::Service(cmd) => cmd.mutates(),
            _ => false,
        }
    }
}

fn load_message(warning: &AcctreeError) -> String {
    if warning.is_not_found() {
        format!("{}; starting with an empty document.", warning)
    } else {
        format!("Error loading JSON file: {}", warning)
    }
}

fn print_config(paths: &AppPaths, settings: &Settings, data_file: &std::path::Path) {
    println!("acctree Configuration");
    println!("=====================");
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Data file:        {}", data_file.display());
    println!();
    println!("Settings:");
    println!("  Indent:          {}", settings.indent);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Confirm on exit: {}", settings.confirm_on_exit);
}
