//! Interactive prompts for CLI commands

use std::io::{self, Write};

use crate::error::{AcctreeError, AcctreeResult};

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub fn confirm(question: &str) -> AcctreeResult<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read a secret without echoing it
pub fn prompt_secret(prompt: &str) -> AcctreeResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| AcctreeError::Io(format!("Failed to read password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }
}
