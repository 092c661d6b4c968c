//! login / logout / whoami / register.

use serde_json::json;
use tienda_cli::{OutputFormat, OutputFormatter, Result};
use tienda_link::models::{LoginRequest, RegisterUserRequest};
use tienda_link::TiendaClient;

use super::{parse_role, user_pairs};

pub async fn login(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    email: &str,
    password: &str,
) -> Result<()> {
    let auth = client
        .auth()
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    fmt.note(&format!(
        "Logged in as {} ({})",
        auth.user.name, auth.user.role
    ));
    if fmt.format() == OutputFormat::Json {
        fmt.json(&auth.user)?;
    }
    Ok(())
}

pub async fn logout(client: &TiendaClient, fmt: &OutputFormatter) -> Result<()> {
    client.auth().logout().await?;
    fmt.note("Logged out; local session cleared.");
    if fmt.format() == OutputFormat::Json {
        fmt.json(&json!({ "loggedOut": true }))?;
    }
    Ok(())
}

pub async fn whoami(client: &TiendaClient, fmt: &OutputFormatter) -> Result<()> {
    let user = client.auth().current_user().await;
    let authenticated = client.auth().is_authenticated().await;

    if fmt.format() == OutputFormat::Json {
        return fmt.json(&json!({ "user": user, "authenticated": authenticated }));
    }

    match user {
        Some(user) => {
            let mut pairs = user_pairs(&user);
            pairs.push(("authenticated", authenticated.to_string()));
            fmt.detail(&user, pairs)
        }
        None => {
            fmt.note("Not logged in.");
            Ok(())
        }
    }
}

pub async fn register(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    email: &str,
    password: &str,
    name: &str,
    role: Option<&str>,
) -> Result<()> {
    let role = role.map(parse_role).transpose()?;
    let user = client
        .auth()
        .register(&RegisterUserRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role,
        })
        .await?;

    fmt.note(&format!("Registered {}", user.email));
    fmt.detail(&user, user_pairs(&user))
}
