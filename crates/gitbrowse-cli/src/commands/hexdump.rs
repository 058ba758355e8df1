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

use anyhow::{Context, Result};
use clap::Parser;
use gitbrowse_codec::hexdump;
use std::path::PathBuf;

/// Hexdump a local file
#[derive(Parser, Debug)]
pub struct HexdumpCmd {
    /// File to dump
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl HexdumpCmd {
    pub async fn execute(&self) -> Result<()> {
        let bytes = tokio::fs::read(&self.file)
            .await
            .with_context(|| format!("Cannot read {}", self.file.display()))?;
        println!("{}", hexdump(&bytes));
        Ok(())
    }
}
