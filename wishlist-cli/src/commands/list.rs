//! List command implementation.
//!
//! This module implements the `list` command, which prints the whole
//! wishlist as seen by one user in various formats (table, JSON, CSV).

use std::io::Write;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, resolve_format, resolve_user, GlobalOptions, OutputFormat,
};
use clap::Args;
use wishlist::ItemView;

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 6] = [
    "id",
    "name",
    "link",
    "own",
    "reserved",
    "reserved_by_us",
];

/// List the wishlist as seen by a user.
#[derive(Args)]
pub struct ListCommand {
    /// Email of the viewing user
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let viewer = resolve_user(&db, &self.acting_user)?;
        let items = db.list_items(viewer.id)?;
        log::debug!("{} items visible to {}", items.len(), viewer.email);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match resolve_format(self.format, &config) {
            OutputFormat::Table => format_as_table(&mut handle, &items)?,
            OutputFormat::Json => format_as_json(&mut handle, &items)?,
            OutputFormat::Csv => format_as_csv(&mut handle, &items)?,
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format items as a human-readable table.
fn format_as_table(out: &mut impl Write, items: &[ItemView]) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for item in items {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            item.id,
            item.name,
            item.link.as_deref().unwrap_or("-"),
            yes_no(item.is_own),
            yes_no(item.is_reserved),
            yes_no(item.is_reserved_by_us),
        )?;
    }
    Ok(())
}

/// Format items as a JSON array.
fn format_as_json(out: &mut impl Write, items: &[ItemView]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    Ok(())
}

/// Format items as CSV with a header row.
fn format_as_csv(out: &mut impl Write, items: &[ItemView]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["id", "name", "link", "is_own", "is_reserved", "is_reserved_by_us"])?;
    for item in items {
        writer.write_record([
            item.id.to_string(),
            item.name.clone(),
            item.link.clone().unwrap_or_default(),
            item.is_own.to_string(),
            item.is_reserved.to_string(),
            item.is_reserved_by_us.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist::ItemId;

    fn sample() -> Vec<ItemView> {
        vec![
            ItemView {
                id: ItemId::new(1),
                name: "Kettle".into(),
                link: Some("https://shop.example/kettle".into()),
                is_own: true,
                is_reserved: true,
                is_reserved_by_us: false,
            },
            ItemView {
                id: ItemId::new(2),
                name: "Book, hardcover".into(),
                link: None,
                is_own: false,
                is_reserved: false,
                is_reserved_by_us: false,
            },
        ]
    }

    fn render(f: fn(&mut Vec<u8>, &[ItemView]) -> Result<(), CliError>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer, &sample()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_output() {
        let output = render(|out, items| format_as_table(out, items));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "ID\tNAME\tLINK\tOWN\tRESERVED\tRESERVED_BY_US");
        assert_eq!(lines[1], "1\tKettle\thttps://shop.example/kettle\tyes\tyes\tno");
        assert_eq!(lines[2], "2\tBook, hardcover\t-\tno\tno\tno");
    }

    #[test]
    fn test_json_output() {
        let output = render(|out, items| format_as_json(out, items));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["is_own"], true);
        assert_eq!(parsed[0]["link"], "https://shop.example/kettle");
        assert!(parsed[1].get("link").is_none());
    }

    #[test]
    fn test_csv_output_quotes_commas() {
        let output = render(|out, items| format_as_csv(out, items));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "id,name,link,is_own,is_reserved,is_reserved_by_us");
        assert_eq!(lines[2], "2,\"Book, hardcover\",,false,false,false");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let mut buffer = Vec::new();
        format_as_table(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
