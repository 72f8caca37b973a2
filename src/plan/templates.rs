//! Generated configuration files, kept as typed constants keyed by
//! [`UiLibrary`] so file-write steps are testable without running any
//! external process. Contents track the Tailwind CSS 3 / PostCSS 8 layout.

use crate::selection::UiLibrary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTemplate {
    /// Path relative to the project directory.
    pub relative_path: &'static str,
    pub contents: &'static str,
}

/// Content-scan globs covering the HTML entry and all source script/markup
/// files.
pub const TAILWIND_CONFIG: ConfigTemplate = ConfigTemplate {
    relative_path: "tailwind.config.js",
    contents: "\
/** @type {import('tailwindcss').Config} */
export default {
  content: [
    \"./index.html\",
    \"./src/**/*.{js,ts,jsx,tsx}\",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
",
};

pub const POSTCSS_CONFIG: ConfigTemplate = ConfigTemplate {
    relative_path: "postcss.config.js",
    contents: "\
export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
",
};

/// The three layer directives, in the order Tailwind requires.
pub const TAILWIND_STYLESHEET: ConfigTemplate = ConfigTemplate {
    relative_path: "src/index.css",
    contents: "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n",
};

const TAILWIND_FILES: [ConfigTemplate; 3] = [TAILWIND_CONFIG, POSTCSS_CONFIG, TAILWIND_STYLESHEET];

/// Project files to generate for the chosen library. Empty for every library
/// that configures itself through imports alone.
pub fn config_files(library: UiLibrary) -> &'static [ConfigTemplate] {
    match library {
        UiLibrary::Tailwind => &TAILWIND_FILES,
        _ => &[],
    }
}
