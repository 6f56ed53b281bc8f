//! Slug and breadcrumb commands

use anyhow::Result;
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use academy_core::breadcrumb::breadcrumbs;
use academy_core::slug::{create_slug_with_id, extract_id_from_slug, extract_name_from_slug};

#[derive(Subcommand, Debug)]
pub enum SlugCommand {
    /// Build `<slugified-name>-<id>`
    Create {
        /// Item name
        name: String,

        /// Item id
        id: String,
    },

    /// Split a slug into its id and approximate name
    Parse {
        /// Slug such as `react-basics-42`
        slug: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

impl SlugCommand {
    pub fn execute(&self) -> Result<()> {
        match self {
            SlugCommand::Create { name, id } => {
                println!("{}", create_slug_with_id(name, id));
            }
            SlugCommand::Parse { slug, json } => {
                let id = extract_id_from_slug(slug);
                let name = extract_name_from_slug(slug);
                if *json {
                    let output = serde_json::json!({ "id": id, "name": name });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                } else {
                    println!("id:   {id}");
                    println!("name: {name}");
                }
            }
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct CrumbRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Href")]
    href: String,
    #[tabled(rename = "Current")]
    current: String,
}

pub fn execute_breadcrumb(path: &str, json: bool) -> Result<()> {
    let trail = breadcrumbs(path);

    if json {
        println!("{}", serde_json::to_string_pretty(&trail)?);
        return Ok(());
    }

    let rows: Vec<CrumbRow> = trail
        .into_iter()
        .map(|crumb| CrumbRow {
            label: crumb.label,
            href: crumb.href,
            current: if crumb.current { "*" } else { "" }.to_string(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("{table}");

    Ok(())
}
