// GitBrowse - Literate Browsing for Git Objects
// Copyright (C) 2025 GitBrowse Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

use crate::output;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::Parser;
use console::style;

/// List branches
#[derive(Parser, Debug)]
pub struct BranchesCmd {
    /// Print the branch index entries as JSON
    #[arg(long)]
    pub json: bool,
}

impl BranchesCmd {
    pub async fn execute(&self, session: &Session) -> Result<()> {
        let resolver = session.resolver().await?;
        let index = resolver
            .list_branches()
            .await
            .context("Cannot list branches")?;

        if self.json {
            return output::json(&index.branches);
        }

        let default_branch = &session.config.browse.default_branch;
        let width = index.names().map(str::len).max().unwrap_or(0);
        for entry in &index.branches {
            if entry.name == *default_branch {
                println!(
                    "* {:<width$}  {}",
                    style(&entry.name).green().bold(),
                    entry.id,
                    width = width
                );
            } else {
                println!("  {:<width$}  {}", entry.name, entry.id, width = width);
            }
        }
        Ok(())
    }
}
