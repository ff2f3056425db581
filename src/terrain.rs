//! Terrain band definition, classification and metadata.

use serde::Serialize;

/// Height bands a map cell can fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Terrain {
    Water,
    Sand,
    Grass,
    Rock,
    Snow,
}

/// All bands in ascending height order.
pub const TERRAIN_BANDS: [Terrain; 5] = [
    Terrain::Water,
    Terrain::Sand,
    Terrain::Grass,
    Terrain::Rock,
    Terrain::Snow,
];

/// Upper height level of a band, inclusive.
pub fn terrain_level(t: Terrain) -> u8 {
    match t {
        Terrain::Water => 127,
        Terrain::Sand => 153,
        Terrain::Grass => 178,
        Terrain::Rock => 229,
        Terrain::Snow => 255,
    }
}

/// Canonical terrain → RGB colour mapping, shared by all export backends.
pub fn terrain_color(t: Terrain) -> [u8; 3] {
    match t {
        Terrain::Water => [30, 70, 200],
        Terrain::Sand => [220, 210, 120],
        Terrain::Grass => [100, 200, 80],
        Terrain::Rock => [130, 120, 110],
        Terrain::Snow => [245, 245, 250],
    }
}

/// Human-readable name for a band, used in the legend.
pub fn terrain_name(t: Terrain) -> &'static str {
    match t {
        Terrain::Water => "Water",
        Terrain::Sand => "Sand",
        Terrain::Grass => "Grass",
        Terrain::Rock => "Rock",
        Terrain::Snow => "Snow",
    }
}

/// Buckets a height value into the lowest band whose level it does not exceed.
pub fn classify(height: u8) -> Terrain {
    TERRAIN_BANDS
        .into_iter()
        .find(|&t| height <= terrain_level(t))
        .unwrap_or(Terrain::Snow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_levels_are_strictly_ascending() {
        let levels: Vec<u8> = TERRAIN_BANDS.into_iter().map(terrain_level).collect();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(levels.last(), Some(&u8::MAX));
    }

    #[test]
    fn classification_respects_band_boundaries() {
        assert_eq!(classify(0), Terrain::Water);
        assert_eq!(classify(127), Terrain::Water);
        assert_eq!(classify(128), Terrain::Sand);
        assert_eq!(classify(153), Terrain::Sand);
        assert_eq!(classify(154), Terrain::Grass);
        assert_eq!(classify(178), Terrain::Grass);
        assert_eq!(classify(179), Terrain::Rock);
        assert_eq!(classify(229), Terrain::Rock);
        assert_eq!(classify(230), Terrain::Snow);
        assert_eq!(classify(255), Terrain::Snow);
    }
}
