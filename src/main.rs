//! roster-guard - query the RBAC engine from a shell
//!
//! Every command prints JSON on stdout; logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_guard::{Config, Permission, RbacSystem, Role, utils};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "roster-guard", version, about = "Role-based access control queries")]
struct Cli {
    /// YAML configuration file with an optional role table override
    #[arg(short, long, env = "ROSTER_GUARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether ROLE holds PERMISSION
    Check { role: String, permission: String },
    /// Check whether ROLE holds any of PERMISSIONS
    Any {
        role: String,
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Check whether ROLE is at least level MIN
    Level { role: String, min: u32 },
    /// List the dashboard modules available to ROLE
    Modules { role: String },
    /// List the roles ACTOR may assign
    Assignable { actor: String },
    /// Check whether ACTOR may move a TARGET-role user to NEW
    CanUpdate {
        actor: String,
        target: String,
        new: String,
    },
    /// Validate that ACTOR may assign NEW
    Validate { actor: String, new: String },
    /// Check whether ROLE may open PATH
    Route { role: String, path: String },
    /// Print the role table
    Roles,
}

fn run(rbac: &RbacSystem, command: Command) -> anyhow::Result<Value> {
    let value = match command {
        Command::Check { role, permission } => json!({
            "role": role,
            "permission": permission,
            "granted": rbac.has_permission_key(&role, &permission),
        }),
        Command::Any { role, permissions } => {
            // Unknown keys can never be granted, so they drop out here
            let known: Vec<Permission> = permissions
                .iter()
                .filter_map(|key| Permission::parse(key))
                .collect();
            json!({
                "role": role,
                "permissions": permissions,
                "granted": rbac.has_any_permission(&role, &known),
            })
        }
        Command::Level { role, min } => json!({
            "role": role,
            "level": rbac.level(&role),
            "meets_minimum": rbac.has_minimum_level(&role, min),
        }),
        Command::Modules { role } => json!({
            "role": role,
            "modules": rbac.available_modules(&role),
        }),
        Command::Assignable { actor } => json!({
            "actor": actor,
            "roles": rbac.assignable_roles(&actor),
        }),
        Command::CanUpdate { actor, target, new } => json!({
            "actor": actor,
            "target": target,
            "new": new,
            "allowed": rbac.can_update_user_role(&actor, &target, &new),
        }),
        Command::Validate { actor, new } => {
            serde_json::to_value(rbac.validate_role_assignment(&actor, &new))?
        }
        Command::Route { role, path } => json!({
            "role": role,
            "path": path,
            "allowed": rbac.can_access_route(&role, &path),
        }),
        Command::Roles => {
            let roles: Vec<Value> = rbac
                .all_roles()
                .into_iter()
                .map(|role: Role| {
                    json!({
                        "role": role,
                        "info": rbac.role_info(role),
                        "permissions": rbac.granted_permissions(role),
                    })
                })
                .collect();
            Value::Array(roles)
        }
    };
    Ok(value)
}

async fn try_main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    utils::logging::init(config.logging())?;

    let rbac = config.build_rbac()?;
    let output = run(&rbac, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
