//! Product catalog offered by the giveaway

/// Offerings shown when the configuration does not list any
pub const DEFAULT_PRODUCTS: &[&str] = &[
    "Canva Pro (Canva For Education Student Access)",
    "Microsoft Office 365 E5 Developer",
    "Autodesk",
    "JetBrains",
];

/// Ordered, duplicate-free list of selectable offerings.
///
/// Display order is insertion order. The first occurrence of a name wins;
/// blank names are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    names: Vec<String>,
}

impl ProductCatalog {
    /// Build a catalog from configured names, falling back to the defaults
    /// when nothing usable remains.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() || unique.contains(&name) {
                continue;
            }
            unique.push(name);
        }

        if unique.is_empty() {
            return Self::default();
        }

        Self { names: unique }
    }

    /// Check whether a product name is one of the offerings
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }

    /// Name at a display position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Display position of a product name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Selection after `current` when cycling forward.
    ///
    /// The cycle is: unselected, each offering in order, unselected again.
    pub fn next_selection(&self, current: &str) -> String {
        match self.position(current) {
            None => self.get(0).unwrap_or_default().to_string(),
            Some(i) => self.get(i + 1).unwrap_or_default().to_string(),
        }
    }

    /// Selection before `current` when cycling backward
    pub fn prev_selection(&self, current: &str) -> String {
        match self.position(current) {
            None => self.names.last().cloned().unwrap_or_default(),
            Some(0) => String::new(),
            Some(i) => self.get(i - 1).unwrap_or_default().to_string(),
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_PRODUCTS.iter().map(|n| n.to_string()).collect(),
        }
    }
}
