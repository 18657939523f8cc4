//! Sample herb-run catalog and inventories.
//!
//! Three herb locations with realistic transit options:
//!
//! - `ardougne`: Ardougne cloak (item), Ardougne Teleport (spell),
//!   portal nexus (house, needs construction 72).
//! - `catherby`: Camelot Teleport (spell), Camelot tablet (item).
//! - `falador`: Explorer's ring (item), Falador Teleport (spell).
//!
//! Every herb location consumes one herb seed of any kind and one
//! supercompost. Secateurs and a watering can are run-wide tools.

use furrow_atlas::{Catalog, CatalogError, TargetLocation, TransitKind, TransitOption};
use furrow_core::{
    Capability, CategoryRequirement, LocationId, Requirement, ResourceId, StatusKey, TargetCategory,
    Tile,
};

/// Resource IDs used by the sample catalog.
pub mod ids {
    pub const LAW_RUNE: u32 = 563;
    pub const WATER_RUNE: u32 = 555;
    pub const AIR_RUNE: u32 = 556;
    pub const SUPERCOMPOST: u32 = 6034;
    pub const SECATEURS: u32 = 5329;
    pub const MAGIC_SECATEURS: u32 = 7409;
    /// Watering can (1) through (8).
    pub const WATERING_CANS: [u32; 8] = [5333, 5334, 5335, 5336, 5337, 5338, 5339, 5340];
    pub const ARDOUGNE_CLOAKS: [u32; 4] = [13121, 13122, 13123, 13124];
    pub const EXPLORERS_RINGS: [u32; 3] = [13126, 13127, 13128];
    pub const CAMELOT_TABLET: u32 = 8010;
    pub const HOUSE_TABLET: u32 = 8013;
    pub const GUAM_SEED: u32 = 5291;
    pub const RANARR_SEED: u32 = 5295;
    pub const TORSTOL_SEED: u32 = 5304;
    /// Guam through torstol.
    pub const HERB_SEEDS: std::ops::RangeInclusive<u32> = 5291..=5304;
}

pub const ARDOUGNE_PATCH: Tile = Tile::new(2670, 3374, 0);
pub const CATHERBY_PATCH: Tile = Tile::new(2813, 3463, 0);
pub const FALADOR_PATCH: Tile = Tile::new(3058, 3311, 0);
/// Landing tile of the Ardougne cloak.
pub const ARDOUGNE_CLOAK_LANDING: Tile = Tile::new(2667, 3375, 0);
/// Landing tile of the Camelot teleport.
pub const CAMELOT_LANDING: Tile = Tile::new(2757, 3478, 0);
/// Landing tile of the Explorer's ring.
pub const EXPLORERS_RING_LANDING: Tile = Tile::new(3055, 3308, 0);
/// Somewhere far from every patch (Grand Exchange).
pub const BANK: Tile = Tile::new(3164, 3487, 0);

fn rid(id: u32) -> ResourceId {
    ResourceId(id)
}

fn any_of(ids: &[u32]) -> impl Iterator<Item = ResourceId> + '_ {
    ids.iter().copied().map(ResourceId)
}

/// `quantity` of `id`, labelled.
fn item(id: u32, quantity: u32, label: &str) -> Result<Requirement, CatalogError> {
    Ok(Requirement::item(rid(id), quantity)?.labelled(label))
}

/// One of `primary` or any of `alternatives`, labelled.
fn one_of(primary: u32, alternatives: &[u32], label: &str) -> Result<Requirement, CatalogError> {
    let requirement = Requirement::any_of(rid(primary), 1, any_of(alternatives))?;
    Ok(requirement.labelled(label))
}

/// The herb seed category at `quantity`.
pub fn herb_seeds(quantity: u32) -> Result<CategoryRequirement, CatalogError> {
    Ok(CategoryRequirement::new("Herb seeds", quantity, ids::HERB_SEEDS.map(ResourceId))?)
}

/// Build the sample herb catalog.
pub fn try_herb_catalog() -> Result<Catalog, CatalogError> {
    let cloaks = ids::ARDOUGNE_CLOAKS;
    let rings = ids::EXPLORERS_RINGS;
    let cans = ids::WATERING_CANS;

    let ardougne = TargetLocation::new(
        "ardougne",
        "Ardougne",
        ARDOUGNE_PATCH,
        TargetCategory::Herb,
        StatusKey(4771),
    )
    .with_transit(
        TransitOption::new(
            "ARDOUGNE_CLOAK",
            TransitKind::Item,
            "Ardougne cloak: Farm Teleport",
            ARDOUGNE_CLOAK_LANDING,
        )
        .requires(one_of(cloaks[1], &cloaks[2..], "Ardougne cloak")?),
    )
    .with_transit(
        TransitOption::new(
            "ARDOUGNE_TELEPORT",
            TransitKind::Spellbook,
            "Ardougne Teleport",
            Tile::new(2662, 3305, 0),
        )
        .requires(item(ids::LAW_RUNE, 2, "Law rune")?)
        .requires(item(ids::WATER_RUNE, 2, "Water rune")?),
    )
    .with_transit(
        TransitOption::new(
            "ARDOUGNE_NEXUS",
            TransitKind::PortalNexus,
            "House portal nexus to Ardougne",
            Tile::new(2662, 3305, 0),
        )
        .requires(item(ids::HOUSE_TABLET, 1, "Teleport to house")?)
        .requires(Requirement::capability(
            Capability::new("construction", 72).with_detail("Portal nexus"),
        )),
    );

    let catherby = TargetLocation::new(
        "catherby",
        "Catherby",
        CATHERBY_PATCH,
        TargetCategory::Herb,
        StatusKey(4772),
    )
    .with_transit(
        TransitOption::new(
            "CAMELOT_TELEPORT",
            TransitKind::Spellbook,
            "Camelot Teleport",
            CAMELOT_LANDING,
        )
        .requires(item(ids::LAW_RUNE, 1, "Law rune")?)
        .requires(item(ids::AIR_RUNE, 5, "Air rune")?),
    )
    .with_transit(
        TransitOption::new(
            "CAMELOT_TABLET",
            TransitKind::Item,
            "Camelot teleport tablet",
            CAMELOT_LANDING,
        )
        .requires_item(rid(ids::CAMELOT_TABLET), 1)?,
    );

    let falador = TargetLocation::new(
        "falador",
        "Falador",
        FALADOR_PATCH,
        TargetCategory::Herb,
        StatusKey(4773),
    )
    .with_transit(
        TransitOption::new(
            "EXPLORERS_RING",
            TransitKind::Item,
            "Explorer's ring: Cabbage patch",
            EXPLORERS_RING_LANDING,
        )
        .requires(one_of(rings[0], &rings[1..], "Explorer's ring")?),
    )
    .with_transit(
        TransitOption::new(
            "FALADOR_TELEPORT",
            TransitKind::Spellbook,
            "Falador Teleport",
            Tile::new(2966, 3403, 0),
        )
        .requires(item(ids::LAW_RUNE, 1, "Law rune")?)
        .requires(item(ids::AIR_RUNE, 3, "Air rune")?)
        .requires(item(ids::WATER_RUNE, 1, "Water rune")?),
    );

    Catalog::builder()
        .location(ardougne)
        .location(catherby)
        .location(falador)
        .supply(TargetCategory::Herb, herb_seeds(1)?)
        .supply(
            TargetCategory::Herb,
            item(ids::SUPERCOMPOST, 1, "Supercompost")?,
        )
        .tool(one_of(ids::MAGIC_SECATEURS, &[ids::SECATEURS], "Secateurs")?)
        .tool(one_of(cans[7], &cans[..7], "Watering can")?)
        .build()
}

/// The sample herb catalog.
///
/// # Panics
///
/// Never in practice: the sample data is valid.
pub fn herb_catalog() -> Catalog {
    try_herb_catalog().unwrap_or_else(|e| panic!("sample herb catalog is invalid: {e}"))
}

/// Every sample location ID, in catalog order.
pub fn herb_location_ids() -> Vec<LocationId> {
    ["ardougne", "catherby", "falador"]
        .into_iter()
        .map(LocationId::from)
        .collect()
}

/// Slots satisfying everything the default transits need for a full
/// three-stop run.
pub fn full_herb_run_inventory() -> Vec<(u32, u32)> {
    vec![
        (ids::ARDOUGNE_CLOAKS[1], 1),
        (ids::LAW_RUNE, 10),
        (ids::AIR_RUNE, 50),
        (ids::WATER_RUNE, 10),
        (ids::EXPLORERS_RINGS[2], 1),
        (ids::RANARR_SEED, 2),
        (ids::TORSTOL_SEED, 1),
        (ids::SUPERCOMPOST, 3),
        (ids::MAGIC_SECATEURS, 1),
        (ids::WATERING_CANS[7], 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_builds() {
        let catalog = herb_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.supplies(TargetCategory::Herb).len(), 2);
        assert_eq!(catalog.tools().len(), 2);
    }

    #[test]
    fn herb_seed_category_spans_every_seed() {
        let seeds = herb_seeds(9).unwrap();
        assert_eq!(seeds.members().len(), 14);
        assert_eq!(seeds.display_label(), "9x Herb seeds (any type)");
        assert!(seeds.contains(ResourceId(ids::GUAM_SEED)));
    }

    #[test]
    fn default_transits_are_first_listed() {
        let catalog = herb_catalog();
        let defaults: Vec<&str> = catalog
            .locations()
            .filter_map(|l| l.default_transit())
            .map(|t| t.id().as_str())
            .collect();
        assert_eq!(
            defaults,
            vec!["ARDOUGNE_CLOAK", "CAMELOT_TELEPORT", "EXPLORERS_RING"]
        );
    }
}
