//! Token command - offline token inspection.

use super::print_json;
use crate::cli::args::{TokenAction, TokenArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::TokenIssuer;

/// Execute the token command. Needs only the signing key, not the database.
pub async fn execute(args: TokenArgs, config: Config) -> AppResult<()> {
    let issuer = TokenIssuer::from_config(&config)?;

    match args.action {
        TokenAction::Verify { token } => print_json(&issuer.verify(&token)?),
    }
}
