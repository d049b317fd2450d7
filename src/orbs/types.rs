use serde::{Deserialize, Serialize};

/// The four reforging orbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orb {
    /// Remove one enchantment.
    Annul,
    /// Add one enchantment from a family not yet present.
    Annex,
    /// Reroll everything into up to three fresh families.
    Turmoil,
    /// Reroll the tier of every active enchantment in place.
    Falter,
}

impl Orb {
    pub const ALL: [Orb; 4] = [Orb::Annul, Orb::Annex, Orb::Turmoil, Orb::Falter];

    /// Short id used in seed strings and by the UI shell.
    pub fn id(&self) -> &'static str {
        match self {
            Orb::Annul => "annul",
            Orb::Annex => "annex",
            Orb::Turmoil => "turmoil",
            Orb::Falter => "falter",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orb::Annul => "Orb of Annulment",
            Orb::Annex => "Orb of Annexation",
            Orb::Turmoil => "Orb of Turmoil",
            Orb::Falter => "Orb of Faltering",
        }
    }

    pub fn parse(s: &str) -> Option<Orb> {
        Orb::ALL.iter().copied().find(|orb| orb.id() == s)
    }

    fn index(&self) -> usize {
        match self {
            Orb::Annul => 0,
            Orb::Annex => 1,
            Orb::Turmoil => 2,
            Orb::Falter => 3,
        }
    }
}

/// Per-orb usage counters, monotonic until an item change resets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbCounts {
    counts: [u32; 4],
}

impl OrbCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, orb: Orb) -> u32 {
        self.counts[orb.index()]
    }

    pub fn set(&mut self, orb: Orb, count: u32) {
        self.counts[orb.index()] = count;
    }

    pub fn bump(&mut self, orb: Orb) {
        self.counts[orb.index()] += 1;
    }

    pub fn reset(&mut self) {
        self.counts = [0; 4];
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// One uniform random draw: which index was chosen out of how many.
/// Exposed so tests can pin down the selection space without caring about
/// rationale wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub pool: usize,
    pub index: usize,
}

/// What one orb application did. The rationale is display-only; the
/// loadout itself is the authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbOutcome {
    pub orb: Orb,
    pub changed: bool,
    pub draws: Vec<Draw>,
    pub rationale: String,
}

impl OrbOutcome {
    pub fn noop(orb: Orb, rationale: impl Into<String>) -> Self {
        Self {
            orb,
            changed: false,
            draws: Vec::new(),
            rationale: rationale.into(),
        }
    }
}
