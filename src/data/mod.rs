/// Data layer: core types, parsing, tabulation and file import.
///
/// Architecture:
/// ```text
///  text area          .csv / .json / .txt
///      │                     │
///      │               ┌──────────┐
///      │               │  loader   │  file → series or raw text
///      │               └──────────┘
///      ▼                     │
///   ┌──────────┐             │
///   │  parser   │ ◄──────────┘  lines → TitrationSeries (bad lines dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  read-only two-column view
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod table;
