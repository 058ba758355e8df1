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
use crate::render::{commit_summary, tree_table};
use crate::session::Session;
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use gitbrowse_store::{AnyObject, BlobEncoding, ObjectId};

/// Show a single stored document by id
#[derive(Parser, Debug)]
pub struct ObjectCmd {
    /// Document id, e.g. `git-branches` or `git-object-<sha>`
    #[arg(value_name = "ID")]
    pub id: String,
}

impl ObjectCmd {
    pub async fn execute(&self, session: &Session) -> Result<()> {
        let resolver = session.resolver().await?;
        let id = ObjectId::new(self.id.as_str());
        let object = resolver
            .fetch_object(&id)
            .await
            .with_context(|| format!("Cannot show object {}", id))?;

        println!("{} {}", style(object.kind().type_name()).yellow().bold(), id);
        match object {
            AnyObject::BranchIndex(index) => {
                for entry in &index.branches {
                    output::detail(&entry.name, entry.id.as_str());
                }
            }
            AnyObject::Branch(branch) => {
                output::detail("Branch", &branch.name);
                output::detail("Commit", branch.head_commit.id.as_str());
            }
            AnyObject::Commit(commit) => {
                print!("{}", commit_summary(&commit));
            }
            AnyObject::Tree(tree) => {
                output::detail("Sha", &tree.sha);
                output::detail("Entries", &tree.len().to_string());
                println!();
                print!("{}", tree_table(&tree));
            }
            AnyObject::Blob(blob) => {
                let encoding = match blob.encoding() {
                    BlobEncoding::Raw => "raw",
                    BlobEncoding::Base64 => "base64",
                };
                output::detail("Sha", &blob.sha);
                output::detail("Encoding", encoding);
                output::detail("Size", &format!("{} bytes", blob.bytes().len()));
            }
        }
        Ok(())
    }
}
