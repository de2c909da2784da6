use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::config::{self, Config, DEFAULT_ENDPOINT};
use crate::error::{Result, UsersError};
use crate::types::Layout;

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_and_save(&config_path, &mut stdin.lock(), &mut stdout.lock())
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_and_save<R: BufRead, W: Write>(
    config_path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if config_path.exists() {
        let answer = ask(
            input,
            out,
            &format!(
                "Config file already exists at {}. Overwrite? [y/N] ",
                config_path.display()
            ),
        )?;

        if !answer.eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    writeln!(out, "usuarios configuration")?;
    writeln!(out, "======================\n")?;

    let endpoint = ask(input, out, &format!("Endpoint URL [{DEFAULT_ENDPOINT}]: "))?;
    let endpoint = if endpoint.is_empty() {
        None
    } else {
        config::parse_endpoint(&endpoint)?;
        Some(endpoint)
    };

    let layout = ask(input, out, "Layout (age, city) [age]: ")?;
    let layout = if layout.is_empty() {
        None
    } else {
        let parsed = Layout::from_str(&layout, true)
            .map_err(|_| UsersError::InvalidLayout(layout.clone()))?;
        Some(parsed)
    };

    Config { endpoint, layout }.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "config written");

    writeln!(out, "\nConfig saved to {}", config_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(path: &Path, input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = prompt_and_save(path, &mut input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_writes_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (result, out) = run_with(&path, "http://10.0.0.5:5000/api/v1/usuarios\ncity\n");
        result.unwrap();
        assert!(out.contains("Config saved to"));

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://10.0.0.5:5000/api/v1/usuarios")
        );
        assert_eq!(config.layout, Some(Layout::City));
    }

    #[test]
    fn test_blank_answers_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        run_with(&path, "\n\n").0.unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_declined_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = \"city\"\n").unwrap();

        let (result, out) = run_with(&path, "n\n");
        result.unwrap();
        assert!(out.contains("Aborted."));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "layout = \"city\"\n"
        );
    }

    #[test]
    fn test_rejects_unknown_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (result, _) = run_with(&path, "\nsideways\n");
        assert!(matches!(result, Err(UsersError::InvalidLayout(l)) if l == "sideways"));
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (result, _) = run_with(&path, "not a url\n\n");
        assert!(matches!(result, Err(UsersError::InvalidUrl(_))));
        assert!(!path.exists());
    }
}
