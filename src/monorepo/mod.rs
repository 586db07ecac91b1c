// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Monorepo detection and package enumeration.

mod detector;
mod packages;
mod report;

pub use detector::{is_monorepo, is_monorepo_like, MonorepoTool, CONVENTIONAL_FOLDERS};
pub use packages::{collect_patterns, get_monorepo_packages, MonorepoPackages};
pub use report::MonorepoReport;
