// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                   sync
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, CLI layers   |
//!              '-------------+-------------'
//!                            v
//!                          sync
//!            clone --> scan --> report --> pull
//!              |        |         |
//!              v        v         v
//!          manifest   probe     report
//!                       |
//!                       v
//!                      git
//!               GitQuery / GitMutation
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, status    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod probe;
pub mod report;
pub mod status;
pub mod sync;

#[cfg(test)]
mod test_utils;
