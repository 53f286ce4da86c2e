// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> load_config --> run_sync_command
//! ```

pub mod sync;
