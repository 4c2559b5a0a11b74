//! Users command - identity registration and lookup.

use super::{connect_services, print_json};
use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::domain::NewIdentity;
use crate::errors::AppResult;

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let services = connect_services(&config).await?;
    let auth = services.auth();

    match args.action {
        UsersAction::Create {
            username,
            email,
            password,
        } => {
            let identity = auth
                .register(NewIdentity {
                    username,
                    email,
                    password,
                })
                .await?;
            print_json(&identity)
        }
        UsersAction::Show { id } => print_json(&auth.find_identity(id).await?),
    }
}
