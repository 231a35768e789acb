//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use jmxbeat_paths::{PathCategory, PathResolver};
use std::io;
use std::path::Path;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render the four resolved directories
    pub fn render_paths(&self, paths: &PathResolver) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(paths).map_err(io::Error::other)?;
            println!("{json}");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Path").add_attribute(Attribute::Bold),
        ]);

        for category in PathCategory::ALL {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(paths.dir(category).display()),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render a single resolved path
    pub fn render_resolved(
        &self,
        category: PathCategory,
        input: &Path,
        resolved: &Path,
    ) -> io::Result<()> {
        if self.json_output {
            let value = serde_json::json!({
                "category": category,
                "path": input,
                "resolved": resolved,
            });
            let json = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
            println!("{json}");
        } else {
            println!("{}", resolved.display());
        }
        Ok(())
    }
}
