//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use super::prompt::{confirm, prompt_secret};
use super::select_account;
use crate::display::{format_account_details, format_account_list};
use crate::editor::{Decision, RecordEditor, UpdateOutcome};
use crate::error::{AcctreeError, AcctreeResult};
use crate::models::{AccountKey, AccountUpdate};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account email
        email: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account email, or OTHERS
        account: String,
        /// Show passwords in clear text
        #[arg(short, long)]
        reveal: bool,
    },
    /// Edit an account
    Edit {
        /// Account email, or OTHERS
        account: String,
        /// New email (renames the account)
        #[arg(short, long)]
        email: Option<String>,
        /// New password
        #[arg(short, long, conflicts_with = "prompt_password")]
        password: Option<String>,
        /// Read the new password without echo
        #[arg(long)]
        prompt_password: bool,
        /// New creation date
        #[arg(short, long)]
        date: Option<String>,
        /// Replace the phone list (comma-separated)
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete an account and all of its services
    Delete {
        /// Account email
        account: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl AccountCommands {
    /// Whether the command changes the document
    pub fn mutates(&self) -> bool {
        !matches!(self, Self::List | Self::Show { .. })
    }
}

/// Handle an account command
pub fn handle_account_command(editor: &mut RecordEditor, cmd: AccountCommands) -> AcctreeResult<()> {
    match cmd {
        AccountCommands::Create { email } => {
            let key = editor.create_account(&email)?;
            editor.save_all(true)?;
            println!("Created account: {}", key);
        }

        AccountCommands::List => {
            print!("{}", format_account_list(editor.document()));
        }

        AccountCommands::Show { account, reveal } => {
            let key = AccountKey::parse(&account);
            let found = editor
                .account(&key)
                .ok_or_else(|| AcctreeError::account_not_found(&account))?;
            print!("{}", format_account_details(&key, &found, reveal));
        }

        AccountCommands::Edit {
            account,
            email,
            password,
            prompt_password,
            date,
            phone,
        } => {
            if email.is_none() && password.is_none() && !prompt_password && date.is_none() && phone.is_none() {
                println!("No changes specified. Use --email, --password, --date or --phone.");
                return Ok(());
            }

            let key = select_account(editor, &account)?;
            let mut update = editor.begin_edit()?;

            if let Some(email) = email {
                if key.is_others() {
                    return Err(AcctreeError::Validation(
                        "OTHERS cannot be renamed.".into(),
                    ));
                }
                update.email = email;
            }
            if prompt_password {
                update.password = prompt_secret("New password: ")?;
            } else if let Some(password) = password {
                update.password = password;
            }
            if let Some(date) = date {
                update.date_created = date;
            }
            if let Some(phone) = phone {
                update.phone = AccountUpdate::parse_phone_list(&phone);
            }

            match editor.update_account(update)? {
                UpdateOutcome::Unchanged => println!("No changes to save."),
                UpdateOutcome::Updated => {
                    editor.save_all(true)?;
                    let current = editor
                        .selected_account()
                        .map(ToString::to_string)
                        .unwrap_or(account);
                    println!("Updated account: {}", current);
                }
            }
        }

        AccountCommands::Delete { account, yes } => {
            let key = select_account(editor, &account)?;
            if key.is_others() {
                // Refused by the editor; fail before prompting
                editor.delete_account(Decision::Declined)?;
            }

            let decision = if yes {
                Decision::Confirmed
            } else {
                Decision::from_bool(confirm(&format!(
                    "Delete account '{}' and all of its services?",
                    key
                ))?)
            };

            match editor.delete_account(decision)? {
                Some(_) => {
                    editor.save_all(true)?;
                    println!("Deleted account: {}", key);
                }
                None => println!("Aborted."),
            }
        }
    }

    Ok(())
}
