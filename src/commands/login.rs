//! Login command - authenticate and print the issued token.

use super::{connect_services, print_json};
use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::errors::AppResult;

/// Execute the login command
pub async fn execute(args: LoginArgs, config: Config) -> AppResult<()> {
    let services = connect_services(&config).await?;

    let user = services
        .auth()
        .authenticate(&args.username, &args.password)
        .await?;

    print_json(&user)
}
