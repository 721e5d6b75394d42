//! Configuration: repository root resolution and MCP client setup.
//!
//! The repository root is the only external input. It is resolved with
//! precedence `--repo` flag > `GL_PUBLISHER_PATH` > `~/IdeaProjects/oracle-gl-publisher`.
//!
//! The `config` subcommand creates/updates `.mcp.json` in the project root
//! with a ledger-lore server entry.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde_json::{Map, Value, json};

use crate::error::{Error, Result};

/// Environment variable overriding the default repository root.
pub const REPO_ENV_VAR: &str = "GL_PUBLISHER_PATH";

/// Default repository location, relative to the home directory.
pub const DEFAULT_REPO_DIR: &str = "IdeaProjects/oracle-gl-publisher";

/// Name of the server entry written to `.mcp.json`.
pub const SERVER_NAME: &str = "ledger-lore";

/// Resolves the repository root from the CLI flag, the environment or
/// the default location.
///
/// # Errors
///
/// Returns [`Error::Config`] when neither a flag nor the environment
/// variable is set and no home directory can be determined.
pub fn resolve_repo_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_with(explicit, std::env::var_os(REPO_ENV_VAR), dirs::home_dir())
}

fn resolve_with(
    explicit: Option<PathBuf>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    home.map(|home| home.join(DEFAULT_REPO_DIR)).ok_or_else(|| {
        Error::Config(format!(
            "no repository root: pass --repo or set {REPO_ENV_VAR}"
        ))
    })
}

/// Configure ledger-lore by creating/updating .mcp.json in the current directory.
///
/// ## Errors
/// Returns an error if:
/// - File I/O fails
/// - Existing .mcp.json contains invalid JSON
/// - ledger-lore is already configured
pub fn configure(repo_root: Option<&Path>) -> anyhow::Result<()> {
    let config_file = configure_in(Path::new("."), repo_root)?;

    println!("\n{}", "=".repeat(60));
    println!("✓ Updated {}", config_file.display());
    println!("{}", "=".repeat(60));
    println!("\nNext steps:");
    println!("  1. Restart your MCP client if it's running");
    println!("  2. ledger-lore will start automatically");
    println!("  3. Try: \"Which ADRs talk about reversals?\"\n");

    Ok(())
}

/// Writes the ledger-lore entry into `<dir>/.mcp.json` and returns its path.
///
/// ## Errors
/// Same as [`configure`].
pub fn configure_in(dir: &Path, repo_root: Option<&Path>) -> anyhow::Result<PathBuf> {
    let config_file = dir.join(".mcp.json");

    // Read existing config or create new
    let mut config: Value = if config_file.exists() {
        let content = fs::read_to_string(&config_file).context("failed to read .mcp.json")?;
        serde_json::from_str(&content).context("failed to parse .mcp.json - invalid JSON")?
    } else {
        json!({})
    };

    // Ensure config is an object
    if !config.is_object() {
        config = json!({});
    }
    let Some(config_obj) = config.as_object_mut() else {
        bail!(".mcp.json root is not an object");
    };

    // Get or create mcpServers object
    let mcp_servers = config_obj
        .entry("mcpServers")
        .or_insert_with(|| Value::Object(Map::new()));
    if !mcp_servers.is_object() {
        *mcp_servers = Value::Object(Map::new());
    }
    let Some(mcp_servers_obj) = mcp_servers.as_object_mut() else {
        bail!("mcpServers is not an object");
    };

    if mcp_servers_obj.contains_key(SERVER_NAME) {
        bail!(
            "{SERVER_NAME} is already configured in .mcp.json\n\n\
            To reconfigure, first remove the existing entry, then run:\n  \
            {SERVER_NAME} config"
        );
    }

    let mut args = Vec::new();
    if let Some(root) = repo_root {
        args.push("--repo".to_string());
        args.push(root.display().to_string());
    }
    mcp_servers_obj.insert(
        SERVER_NAME.to_string(),
        json!({
            "command": SERVER_NAME,
            "args": args,
        }),
    );

    // Write atomically (temp file + rename)
    let temp_file = config_file.with_extension("tmp");
    let json_str = serde_json::to_string_pretty(&config).context("failed to serialize JSON")?;

    fs::write(&temp_file, json_str).context("failed to write temporary config file")?;

    fs::rename(&temp_file, &config_file).context("failed to rename temporary config file")?;

    Ok(config_file)
}
