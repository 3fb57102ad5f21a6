// Build-time version and the banner printed above the report

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

const LICENSE: &str = "\
This program is free software; you can redistribute it and/or modify
it under the terms of the GNU General Public License version 2 as
published by the Free Software Foundation.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.";

/// Two-line program banner.
pub fn banner() -> String {
    format!("{NAME} {VERSION}\nStatus-file statistics for Nagios-compatible daemons\n")
}

/// Banner followed by the license terms.
pub fn license() -> String {
    format!("{}\n{LICENSE}\n", banner())
}
