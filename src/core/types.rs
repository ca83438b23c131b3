// src/core/types.rs
use serde::{Deserialize, Serialize};

use crate::core::catalog;
use crate::favourites::MAX_TAGS;

/// Top-level domain a selection is made in. Decides which option groups
/// apply, and is stored on every saved favourite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    Fashion,
    Home,
    Character,
}

impl Realm {
    pub const ALL: [Realm; 3] = [Realm::Fashion, Realm::Home, Realm::Character];

    /// The wire string for this realm, as persisted in favourite records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Realm::Fashion => "fashion",
            Realm::Home => "home",
            Realm::Character => "character",
        }
    }
}

/// What kind of attribute an option group holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Category,
    Style,
    Character,
}

/// A labeled, ordered set of selectable attribute values of one kind.
/// Declaration order is significant: it is the preference order the
/// generator sees selections in.
#[derive(Debug, Clone, Copy)]
pub struct OptionGroup {
    pub label: &'static str,
    pub kind: OptionKind,
    pub items: &'static [&'static str],
}

/// One swatch in the fixed color palette. `localized` is the Chinese
/// name that ends up in generated keywords; `hex`/`border` only matter
/// to a front end drawing the swatch.
#[derive(Debug, Clone, Copy)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: &'static str,
    pub localized: &'static str,
    pub border: Option<&'static str>,
}

/// Rank position of a generated query candidate, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Focused,
    Broader,
    StyleDiscovery,
    QualityFilter,
}

impl RankTier {
    pub fn label(self) -> &'static str {
        match self {
            RankTier::Focused => "Focused Search",
            RankTier::Broader => "Broader Search",
            RankTier::StyleDiscovery => "Style Discovery",
            RankTier::QualityFilter => "Quality Filter",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            RankTier::Focused => "Best starting point",
            RankTier::Broader => "More variety in results",
            RankTier::StyleDiscovery => "Browse the aesthetic",
            RankTier::QualityFilter => "With free shipping",
        }
    }
}

/// One ranked search-string suggestion. Produced fresh per generation
/// call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCandidate {
    pub tier: RankTier,
    pub keyword: String,
}

impl QueryCandidate {
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    pub fn tip(&self) -> &'static str {
        self.tier.tip()
    }
}

/// The user's current choices, as consumed by the generator.
///
/// All sequences are ordered. When built through `from_toggles` the
/// order is catalog declaration order, not click order, so "first
/// selected" is well-defined no matter how the toggles arrived.
/// `colors` holds localized color names; the attribute fields hold
/// display labels that the generator translates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    pub categories: Vec<String>,
    pub styles: Vec<String>,
    pub characters: Vec<String>,
    pub colors: Vec<String>,
    pub inspiration: String,
    pub details: String,
}

impl SelectionSet {
    /// Builds a selection from toggled labels by walking the realm's
    /// option groups and the palette in declaration order. Color toggles
    /// are matched against either the display or the localized name.
    pub fn from_toggles(realm: Realm, toggled: &[&str], toggled_colors: &[&str]) -> Self {
        let mut selection = SelectionSet::default();
        for group in catalog::option_groups(realm) {
            for item in group.items {
                if !toggled.iter().any(|t| t == item) {
                    continue;
                }
                match group.kind {
                    OptionKind::Category => selection.categories.push((*item).to_string()),
                    OptionKind::Style => selection.styles.push((*item).to_string()),
                    OptionKind::Character => selection.characters.push((*item).to_string()),
                }
            }
        }
        for color in catalog::color_palette() {
            if toggled_colors
                .iter()
                .any(|t| *t == color.name || *t == color.localized)
            {
                selection.colors.push(color.localized.to_string());
            }
        }
        selection
    }

    /// A selection can only produce a useful result once at least one
    /// category, style or character is chosen.
    pub fn has_primary_selection(&self) -> bool {
        !(self.categories.is_empty() && self.styles.is_empty() && self.characters.is_empty())
    }

    /// Provenance tags for a saved favourite: the selected attribute
    /// labels in group order, capped at the record limit.
    pub fn tags(&self) -> Vec<String> {
        self.categories
            .iter()
            .chain(&self.styles)
            .chain(&self.characters)
            .take(MAX_TAGS)
            .cloned()
            .collect()
    }
}
