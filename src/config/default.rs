// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# monodetect configuration

# Output configuration
[output]
# "text" or "json"; --format on the command line overrides this
format = "text"
# Color text output when writing to a terminal
color = true

# Detection configuration
[detect]
# Let `monodetect detect` fall back to the packages/ and apps/ folder heuristic
heuristic = false
"#
}
