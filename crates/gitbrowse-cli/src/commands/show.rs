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
use crate::render::{literate_columns, tree_table};
use crate::session::Session;
use anyhow::{Context, Result};
use clap::Parser;
use gitbrowse_codec::hexdump;
use gitbrowse_literate::{guess_mime_type, split_source, CommentSyntax};
use gitbrowse_resolver::{RepoPath, Resolution};
use gitbrowse_store::{Blob, TreeOrBlob};
use tracing::warn;

/// Show the tree or file at a path of a branch
#[derive(Parser, Debug)]
pub struct ShowCmd {
    /// Branch name [default: browse.default_branch]
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Revision; only `head` is supported [default: browse.default_revision]
    #[arg(value_name = "REVISION")]
    pub revision: Option<String>,

    /// Path inside the commit tree [default: the root]
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Print JSON (tree entries, or literate rows for a file)
    #[arg(long, conflicts_with = "hex")]
    pub json: bool,

    /// Hexdump the file even if it is text
    #[arg(long)]
    pub hex: bool,
}

impl ShowCmd {
    pub async fn execute(&self, session: &Session) -> Result<()> {
        let browse = &session.config.browse;
        let branch = self.branch.as_deref().unwrap_or(&browse.default_branch);
        let revision = self.revision.as_deref().unwrap_or(&browse.default_revision);
        let path_text = self.path.as_deref().unwrap_or("");
        let path = RepoPath::parse(path_text)
            .with_context(|| format!("Invalid path {:?}", path_text))?;

        let resolver = session.resolver().await?;
        let resolution = resolver
            .resolve(branch, revision, &path)
            .await
            .with_context(|| format!("Cannot show {}:{}", branch, path))?;

        match &resolution.object {
            TreeOrBlob::Tree(tree) => {
                if self.json {
                    return output::json(tree);
                }
                print_location(&resolution);
                print!("{}", tree_table(tree));
            }
            TreeOrBlob::Blob(blob) => {
                self.show_blob(&resolution, blob, session.config.render.doc_width)?;
            }
        }
        Ok(())
    }

    fn show_blob(&self, resolution: &Resolution, blob: &Blob, doc_width: usize) -> Result<()> {
        let mime = guess_mime_type(resolution.basename().unwrap_or_default());

        let text = if self.hex || !mime.is_text() {
            None
        } else {
            match blob.text() {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(object_id = %resolution.object_id, error = %e, "Text file is not UTF-8, falling back to hexdump");
                    None
                }
            }
        };

        let Some(text) = text else {
            println!("{}", hexdump(&blob.bytes()));
            return Ok(());
        };

        let rows = split_source(&text, &CommentSyntax::for_mime(&mime));
        if self.json {
            return output::json(&rows);
        }
        print_location(resolution);
        print!("{}", literate_columns(&rows, doc_width));
        Ok(())
    }
}

fn print_location(resolution: &Resolution) {
    let short_sha: String = resolution.commit.sha.chars().take(10).collect();
    output::header(&format!(
        "{} {} {}",
        resolution.branch, short_sha, resolution.path
    ));
    output::detail("Commit", resolution.commit.summary());
    println!();
}
