/// Data layer: core types, loading, filtering, and summary projections.
///
/// Architecture:
/// ```text
///    penguins.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PenguinTable  │  immutable Vec<Penguin>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  mass ceiling + species set → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  count, means, scatter + grid projections
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
