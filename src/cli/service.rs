//! Service CLI commands
//!
//! Implements CLI commands for the services nested under an account or the
//! OTHERS bucket. Services are addressed by their index in `service list`.

use clap::{Args, Subcommand};

use super::prompt::{confirm, prompt_secret};
use super::select_account;
use crate::display::{format_service_details, format_service_list};
use crate::editor::{matching_services, suggestions, Decision, RecordEditor};
use crate::error::{AcctreeError, AcctreeResult};
use crate::models::{AccountKey, ServiceForm};

/// Service subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Add a service to an account
    Add {
        /// Account email, or OTHERS
        account: String,
        #[command(flatten)]
        fields: ServiceFields,
    },
    /// List the services of an account
    List {
        /// Account email, or OTHERS
        account: String,
        /// Only services whose name contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one service
    Show {
        /// Account email, or OTHERS
        account: String,
        /// Service index
        index: usize,
        /// Show passwords and PINs in clear text
        #[arg(short, long)]
        reveal: bool,
    },
    /// Edit a service; omitted fields keep their current value
    Edit {
        /// Account email, or OTHERS
        account: String,
        /// Service index
        index: usize,
        #[command(flatten)]
        fields: ServiceFields,
    },
    /// Delete a service
    Delete {
        /// Account email, or OTHERS
        account: String,
        /// Service index
        index: usize,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl ServiceCommands {
    /// Whether the command changes the document
    pub fn mutates(&self) -> bool {
        !matches!(self, Self::List { .. } | Self::Show { .. })
    }
}

/// Field flags shared by `service add` and `service edit`
#[derive(Args, Debug, Default)]
pub struct ServiceFields {
    /// Service name
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub username: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub webpage: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(short, long, conflicts_with = "prompt_password")]
    pub password: Option<String>,
    /// Read the password without echo
    #[arg(long)]
    pub prompt_password: bool,
    #[arg(long)]
    pub pin: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Creation date
    #[arg(short, long)]
    pub date: Option<String>,
    #[arg(long)]
    pub sign_in_with: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    /// JSON object or free text
    #[arg(long)]
    pub details: Option<String>,
}

impl ServiceFields {
    /// Overwrite the form fields that were given on the command line
    fn apply(self, form: &mut ServiceForm) -> AcctreeResult<()> {
        let overrides = [
            (self.name, &mut form.name),
            (self.username, &mut form.username),
            (self.email, &mut form.email),
            (self.link, &mut form.link),
            (self.webpage, &mut form.webpage),
            (self.url, &mut form.url),
            (self.password, &mut form.password),
            (self.pin, &mut form.pin),
            (self.phone, &mut form.phone),
            (self.date, &mut form.date_created),
            (self.sign_in_with, &mut form.sign_in_with),
            (self.note, &mut form.note),
            (self.details, &mut form.details),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if self.prompt_password {
            form.password = prompt_secret("Service password: ")?;
        }
        Ok(())
    }
}

/// Handle a service command
pub fn handle_service_command(editor: &mut RecordEditor, cmd: ServiceCommands) -> AcctreeResult<()> {
    match cmd {
        ServiceCommands::Add { account, fields } => {
            let key = select_account(editor, &account)?;
            let mut form = ServiceForm::default();
            fields.apply(&mut form)?;

            let index = editor.create_service(form)?;
            editor.save_all(true)?;
            println!("Added service [{}] to {}", index, key);
        }

        ServiceCommands::List { account, query } => {
            let key = AccountKey::parse(&account);
            let services = editor
                .services(&key)
                .ok_or_else(|| AcctreeError::account_not_found(&account))?;
            let matches = matching_services(services, query.as_deref().unwrap_or(""));
            println!("{}", format_service_list(&matches).trim_end());
        }

        ServiceCommands::Show {
            account,
            index,
            reveal,
        } => {
            select_account(editor, &account)?;
            editor.select_service(index)?;
            if let Some(service) = editor.selected_service() {
                print!("{}", format_service_details(index, service, reveal));
            }
        }

        ServiceCommands::Edit {
            account,
            index,
            fields,
        } => {
            select_account(editor, &account)?;
            editor.select_service(index)?;
            let mut form = editor
                .selected_service()
                .map(ServiceForm::from_service)
                .unwrap_or_default();
            fields.apply(&mut form)?;

            editor.update_service(form)?;
            editor.save_all(true)?;
            println!("Updated service [{}]", index);
        }

        ServiceCommands::Delete {
            account,
            index,
            yes,
        } => {
            let key = select_account(editor, &account)?;
            editor.select_service(index)?;
            let name = editor
                .selected_service()
                .map(|s| s.display_name().to_string())
                .unwrap_or_default();

            let decision = if yes {
                Decision::Confirmed
            } else {
                Decision::from_bool(confirm(&format!("Delete service '{}' from {}?", name, key))?)
            };

            match editor.delete_service(decision)? {
                Some(_) => {
                    editor.save_all(true)?;
                    println!("Deleted service: {}", name);
                }
                None => println!("Aborted."),
            }
        }
    }

    Ok(())
}

/// Print the names of an account's services that match `query`
pub fn handle_search_command(editor: &RecordEditor, account: &str, query: &str) -> AcctreeResult<()> {
    let key = AccountKey::parse(account);
    let services = editor
        .services(&key)
        .ok_or_else(|| AcctreeError::account_not_found(account))?;

    let names = suggestions(services, query);
    if names.is_empty() {
        println!("No matching services.");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
