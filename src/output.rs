use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::types::User;
use crate::view::ListView;

pub const HEADING: &str = "Lista de usuarios";

/// Global output format setting
static FORMAT: OnceLock<OutputFormat> = OnceLock::new();
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_format(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

pub fn format() -> OutputFormat {
    FORMAT.get().copied().unwrap_or_default()
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nombre")]
    nombre: String,
    #[tabled(rename = "Edad")]
    edad: String,
    #[tabled(rename = "Ciudad")]
    ciudad: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            nombre: user.nombre.clone(),
            edad: user.edad.as_ref().map(|e| e.to_string()).unwrap_or_default(),
            ciudad: user.ciudad.as_ref().map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

/// Write the users in the active format.
pub fn print_users(view: &ListView, users: &[User]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_users(&mut out, format(), is_quiet(), view, users)
}

pub fn write_users<W: Write>(
    out: &mut W,
    format: OutputFormat,
    quiet: bool,
    view: &ListView,
    users: &[User],
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, users),
        OutputFormat::Table => {
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            writeln!(out, "{table}")
        }
        OutputFormat::List => {
            if !quiet {
                writeln!(out, "{}", HEADING.bold())?;
            }
            for item in view.iter() {
                tracing::trace!(key = %item.key, "list item");
                writeln!(out, "{}", item.text)?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Print a message (skipped in quiet mode, simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    match format() {
        OutputFormat::Json => println!("{}", serde_json::json!({ "message": message })),
        _ => println!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layout;
    use crate::view::render;

    fn rendered(format: OutputFormat, quiet: bool, users: &[User]) -> String {
        colored::control::set_override(false);
        let view = render(ListView::default(), users, Layout::Age);
        let mut buf = Vec::new();
        write_users(&mut buf, format, quiet, &view, users).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_format() {
        let users = vec![User::new(1, "Ana", 30, "Lima")];
        assert_eq!(
            rendered(OutputFormat::List, false, &users),
            "Lista de usuarios\n1 Ana 30\n"
        );
        assert_eq!(rendered(OutputFormat::List, true, &users), "1 Ana 30\n");
    }

    #[test]
    fn test_list_format_empty() {
        assert_eq!(rendered(OutputFormat::List, true, &[]), "");
    }

    #[test]
    fn test_json_format() {
        let users = vec![User::new(2, "Ana Gómez", 30, "Buenos Aires")];
        let out = rendered(OutputFormat::Json, false, &users);
        let parsed: Vec<User> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, users);
    }

    #[test]
    fn test_table_format() {
        let users = vec![User::new(3, "Carlos López", 22, "Madrid")];
        let out = rendered(OutputFormat::Table, false, &users);
        assert!(out.contains("Nombre"));
        assert!(out.contains("Carlos López"));
        assert!(out.contains("Madrid"));
    }
}
