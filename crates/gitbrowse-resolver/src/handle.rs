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

//! Handle for a resolution running on its own task

use tokio::task::{JoinError, JoinHandle};

/// Handle returned by [`Resolver::spawn_resolve`](crate::Resolver::spawn_resolve)
///
/// Dropping the handle detaches the task; it keeps running and its callback
/// still fires. Call [`cancel`](Self::cancel) to stop it.
#[derive(Debug)]
pub struct ResolveHandle {
    task: JoinHandle<()>,
}

impl ResolveHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Stop the resolution
    ///
    /// The in-flight fetch is abandoned at its next suspension point and
    /// neither callback runs afterwards.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the task has completed, been cancelled or panicked
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] when the task was cancelled or a callback
    /// panicked.
    pub async fn join(self) -> Result<(), JoinError> {
        self.task.await
    }
}
