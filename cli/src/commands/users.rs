//! User account commands.

use tienda_cli::{OutputFormatter, Result};
use tienda_link::models::{RegisterUserRequest, User};
use tienda_link::TiendaClient;

use crate::args::UsersCommand;

use super::{parse_role, user_pairs};

const HEADERS: &[&str] = &["ID", "EMAIL", "NAME", "ROLE", "ACTIVE"];

fn row(user: &User) -> Vec<String> {
    vec![
        user.id.clone(),
        user.email.clone(),
        user.name.clone(),
        user.role.to_string(),
        user.is_active.to_string(),
    ]
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &UsersCommand,
) -> Result<()> {
    let api = client.users();
    match command {
        UsersCommand::List => {
            let users = api.list().await?;
            fmt.list(&users, HEADERS, row)
        }
        UsersCommand::Get { id } => {
            let user = api.get(id).await?;
            fmt.detail(&user, user_pairs(&user))
        }
        UsersCommand::Create {
            email,
            password,
            name,
            role,
        } => {
            let role = role.as_deref().map(parse_role).transpose()?;
            let user = api
                .create(&RegisterUserRequest {
                    email: email.clone(),
                    password: password.clone(),
                    name: name.clone(),
                    role,
                })
                .await?;
            fmt.note(&format!("Created user {}", user.email));
            fmt.detail(&user, user_pairs(&user))
        }
    }
}
