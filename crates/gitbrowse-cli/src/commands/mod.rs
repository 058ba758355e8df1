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
// Command modules for the gitbrowse CLI
pub mod branches;
pub mod hexdump;
pub mod object;
pub mod show;

pub use branches::BranchesCmd;
pub use hexdump::HexdumpCmd;
pub use object::ObjectCmd;
pub use show::ShowCmd;
