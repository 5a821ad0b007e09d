use serde::Serialize;

/// Named percentage range with the canned guidance shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub min_percentage: u8,
    pub label: &'static str,
    pub verdict: &'static str,
    pub insights: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Bands ordered by descending threshold; the last band must start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BandTable {
    pub bands: &'static [Band],
}

impl BandTable {
    pub const fn new(bands: &'static [Band]) -> Self {
        Self { bands }
    }

    /// First band whose threshold the percentage meets. Boundaries resolve upward.
    pub fn select(&self, percentage: u8) -> &'static Band {
        let bands = self.bands;
        bands
            .iter()
            .find(|band| percentage >= band.min_percentage)
            .or_else(|| bands.last())
            .unwrap_or(&FALLBACK_BAND)
    }

    pub fn lowest(&self) -> &'static Band {
        self.bands.last().unwrap_or(&FALLBACK_BAND)
    }
}

static FALLBACK_BAND: Band = Band {
    min_percentage: 0,
    label: "Unrated",
    verdict: "Unrated",
    insights: &[],
    recommendations: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: BandTable = BandTable::new(&[
        Band {
            min_percentage: 80,
            label: "A",
            verdict: "top",
            insights: &[],
            recommendations: &[],
        },
        Band {
            min_percentage: 60,
            label: "B",
            verdict: "upper",
            insights: &[],
            recommendations: &[],
        },
        Band {
            min_percentage: 40,
            label: "C",
            verdict: "lower",
            insights: &[],
            recommendations: &[],
        },
        Band {
            min_percentage: 0,
            label: "D",
            verdict: "bottom",
            insights: &[],
            recommendations: &[],
        },
    ]);

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(BANDS.select(80).label, "A");
        assert_eq!(BANDS.select(79).label, "B");
        assert_eq!(BANDS.select(60).label, "B");
        assert_eq!(BANDS.select(40).label, "C");
        assert_eq!(BANDS.select(39).label, "D");
        assert_eq!(BANDS.select(0).label, "D");
        assert_eq!(BANDS.select(100).label, "A");
    }

    #[test]
    fn empty_table_falls_back() {
        let empty = BandTable::new(&[]);
        assert_eq!(empty.select(50).label, "Unrated");
        assert_eq!(empty.lowest().label, "Unrated");
    }
}
