// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the course-schedule converter.

mod cli;
mod cmd_convert;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_convert::CmdConvert;
pub use crate::config::parse_config;
