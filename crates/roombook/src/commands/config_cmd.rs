//! Config subcommand handlers.

use dialoguer::{Input, Select};
use roombook_core::ZoneSetting;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "********";

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Ask where a service password should live. `None` means the keyring
/// now holds it.
fn store_password_interactively(profile_name: &str, pass: String) -> Result<Option<String>, CliError> {
    let store_choices = &[
        "Store password in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let store_selection = Select::new()
        .with_prompt("Where to store the password?")
        .items(store_choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if store_selection == 0 {
        roombook_config::store_password(profile_name, &pass)?;
        eprintln!("   ✓ Password stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(pass))
    }
}

fn describe(cfg: &Config) -> String {
    let mut lines = vec![
        format!(
            "Default profile:  {}",
            cfg.default_profile.as_deref().unwrap_or("default")
        ),
        format!("Output:           {}", cfg.defaults.output),
        format!("Color:            {}", cfg.defaults.color),
        format!("Timeout:          {}s", cfg.defaults.timeout),
    ];

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        lines.push(String::new());
        lines.push(format!("[{name}]"));
        lines.push(format!("  server:    {}", p.server));
        lines.push(format!(
            "  username:  {}",
            p.api_username.as_deref().unwrap_or("admin")
        ));
        if p.api_password.is_some() {
            lines.push(format!("  password:  {REDACTED}"));
        }
        if let Some(ref env) = p.api_password_env {
            lines.push(format!("  password from ${env}"));
        }
        lines.push(format!(
            "  timezone:  {}",
            p.timezone.as_deref().unwrap_or("local")
        ));
        if let Some(ref ca) = p.ca_cert {
            lines.push(format!("  ca_cert:   {}", ca.display()));
        }
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("roombook configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let server: String = Input::new()
                .with_prompt("API base URL")
                .default(roombook_config::DEFAULT_SERVER.into())
                .validate_with(|s: &String| -> Result<(), String> {
                    url::Url::parse(s).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            let username: String = Input::new()
                .with_prompt("Service account username")
                .default("admin".into())
                .interact_text()
                .map_err(prompt_err)?;

            let pass = rpassword::prompt_password("Service account password: ").map_err(prompt_err)?;
            let api_password = if pass.is_empty() {
                None
            } else {
                store_password_interactively(&profile_name, pass)?
            };

            let timezone: String = Input::new()
                .with_prompt("Time zone for bookings (local, UTC, +05:30, Europe/Paris)")
                .default("local".into())
                .validate_with(|s: &String| -> Result<(), String> {
                    s.parse::<ZoneSetting>().map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            let profile = Profile {
                server,
                api_username: Some(username),
                api_password,
                timezone: Some(timezone),
                ..Profile::default()
            };

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: roombook rooms list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let mut cfg = config::load_config_or_default();
            for profile in cfg.profiles.values_mut() {
                if profile.api_password.is_some() {
                    profile.api_password = Some(REDACTED.into());
                }
            }
            let out = output::render_single(&global.output, &cfg, describe, |_| {
                config::config_path().display().to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── SetPassword ─────────────────────────────────────────────
        ConfigCommand::SetPassword => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            let pass = rpassword::prompt_password(format!(
                "Service account password for '{profile_name}': "
            ))
            .map_err(prompt_err)?;
            if pass.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }
            roombook_config::store_password(&profile_name, &pass)?;
            output::print_status(
                &format!("Password for profile '{profile_name}' stored in system keyring"),
                &global.color,
                global.quiet,
            );
            Ok(())
        }
    }
}
