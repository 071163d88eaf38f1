//! Session key management.
//!
//! Authentication itself happens against the marketplace auth endpoints;
//! these commands only manage what gets remembered on this profile.

use mercadito_storefront::{JsonFileStore, Session};

/// Store the username, and the bearer token when provided.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn login(
    session: &Session<JsonFileStore>,
    username: &str,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    session.set_username(username)?;
    if let Some(token) = token {
        session.set_token(token)?;
    }
    println!("Logged in as {username}");
    Ok(())
}

/// Clear both session keys.
///
/// # Errors
///
/// Fails when the removal fails.
#[allow(clippy::print_stdout)]
pub fn logout(session: &Session<JsonFileStore>) -> Result<(), Box<dyn std::error::Error>> {
    session.clear_token()?;
    session.clear_username()?;
    println!("Logged out");
    Ok(())
}

/// Print the stored session.
#[allow(clippy::print_stdout)]
pub fn whoami(session: &Session<JsonFileStore>) {
    match session.username() {
        Some(username) if session.is_authenticated() => println!("{username} (authenticated)"),
        Some(username) => println!("{username} (no token stored)"),
        None => println!("No session stored"),
    }
}
