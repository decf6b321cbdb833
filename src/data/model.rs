use std::fmt;

// ---------------------------------------------------------------------------
// Species – the fixed category axis of the dataset
// ---------------------------------------------------------------------------

/// One of the three penguin species in the Palmer Archipelago dataset.
/// `Ord` so species sets can live in a `BTreeSet` and render in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// All species, in display order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    /// Parse the dataset's species label.
    pub fn from_name(name: &str) -> Option<Species> {
        match name {
            "Adelie" => Some(Species::Adelie),
            "Gentoo" => Some(Species::Gentoo),
            "Chinstrap" => Some(Species::Chinstrap),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed specimen. Measurements can be missing (`NA` in the
/// source data); aggregations skip absent values instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    /// Bill length in millimetres.
    pub bill_length_mm: Option<f64>,
    /// Bill depth in millimetres.
    pub bill_depth_mm: Option<f64>,
    /// Body mass in grams.
    pub body_mass_g: Option<f64>,
}

// ---------------------------------------------------------------------------
// PenguinTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset. Loaded once, never mutated afterwards; row order
/// is the source file's insertion order.
#[derive(Debug, Clone, Default)]
pub struct PenguinTable {
    rows: Vec<Penguin>,
}

impl PenguinTable {
    pub fn new(rows: Vec<Penguin>) -> Self {
        PenguinTable { rows }
    }

    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    /// Number of penguins.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
