//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::mask;
use crate::models::{Account, AccountKey, Document};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account")]
    key: String,
    #[tabled(rename = "Services")]
    services: usize,
    #[tabled(rename = "Phones")]
    phones: usize,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format all accounts, then OTHERS, as a table
pub fn format_account_list(document: &Document) -> String {
    let rows: Vec<AccountRow> = document
        .keys()
        .into_iter()
        .filter_map(|key| {
            let account = document.account_view(&key)?;
            Some(AccountRow {
                key: key.to_string(),
                services: account.services.len(),
                phones: account.phone.len(),
                created: account.date_created,
            })
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Format a single account's details
pub fn format_account_details(key: &AccountKey, account: &Account, reveal: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", key));
    output.push_str(&format!("  Password:  {}\n", mask(&account.password, reveal)));
    output.push_str(&format!("  Created:   {}\n", account.date_created));
    output.push_str(&format!("  Phone:     {}\n", account.phone.join(", ")));

    for (field, value) in &account.extra {
        output.push_str(&format!("  {}: {}\n", field, value));
    }

    output.push('\n');
    if account.services.is_empty() {
        output.push_str("  (no services)\n");
    } else {
        output.push_str("  Services:\n");
        for (index, service) in account.services.iter().enumerate() {
            output.push_str(&format!("    [{}] {}\n", index, service.display_name()));
        }
    }

    output
}
