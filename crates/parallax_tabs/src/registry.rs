//! Region height registry
//!
//! Tracks the last known height of every tab region and which one is active.
//! Stored heights are padded: the natural height a region reports plus the
//! auxiliary spacer reserved above its content. Regions that never reported
//! start at the configured minimum height.
//!
//! The scroll container extent is always `max(min_height, padded(active))`.

use smallvec::SmallVec;

/// One tab region
#[derive(Clone, Debug, PartialEq)]
pub struct RegionDescriptor {
    pub index: usize,
    pub heading: String,
    /// Last measured height without padding, `None` until first measured
    pub natural_height: Option<f32>,
    pub padded_height: f32,
}

/// Per-region heights plus the active region pointer
#[derive(Clone, Debug)]
pub struct RegionHeightRegistry {
    regions: SmallVec<[RegionDescriptor; 4]>,
    active: usize,
    min_height: f32,
    auxiliary_height: f32,
}

impl RegionHeightRegistry {
    /// Create a registry for one region per heading.
    ///
    /// `active` must be in range; the caller validates it.
    pub fn new(headings: Vec<String>, active: usize, min_height: f32, auxiliary_height: f32) -> Self {
        let regions = headings
            .into_iter()
            .enumerate()
            .map(|(index, heading)| RegionDescriptor {
                index,
                heading,
                natural_height: None,
                padded_height: min_height,
            })
            .collect();
        Self {
            regions,
            active,
            min_height,
            auxiliary_height,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn auxiliary_height(&self) -> f32 {
        self.auxiliary_height
    }

    pub fn regions(&self) -> &[RegionDescriptor] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&RegionDescriptor> {
        self.regions.get(index)
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.iter().map(|r| r.heading.as_str())
    }

    /// Stored (padded) height of region `index`
    pub fn height_of(&self, index: usize) -> Option<f32> {
        self.regions.get(index).map(|r| r.padded_height)
    }

    pub fn active_height(&self) -> f32 {
        self.height_of(self.active).unwrap_or(self.min_height)
    }

    /// Largest stored height across all regions
    pub fn max_height(&self) -> f32 {
        self.regions
            .iter()
            .map(|r| r.padded_height)
            .fold(self.min_height, f32::max)
    }

    /// Scroll container extent if region `index` were active
    pub fn extent_for(&self, index: usize) -> Option<f32> {
        self.height_of(index).map(|h| h.max(self.min_height))
    }

    pub fn active_extent(&self) -> f32 {
        self.active_height().max(self.min_height)
    }

    /// Store a new natural height for region `index`.
    ///
    /// Returns the new extent when the stored height changed and the region
    /// is active, so the caller can resize the scroll container.
    pub fn record_height(&mut self, index: usize, measured: f32) -> Option<f32> {
        if !measured.is_finite() || measured < 0.0 {
            tracing::warn!(index, measured, "invalid region height ignored");
            return None;
        }
        let padded = measured + self.auxiliary_height;
        let Some(region) = self.regions.get_mut(index) else {
            tracing::trace!(index, "height for unknown region ignored");
            return None;
        };

        region.natural_height = Some(measured);
        if region.padded_height == padded {
            return None;
        }
        region.padded_height = padded;

        (index == self.active).then(|| self.active_extent())
    }

    /// Make region `index` active.
    ///
    /// Out-of-range indices and the already active index are no-ops and
    /// return `None`; otherwise returns the new extent.
    pub fn set_active(&mut self, index: usize) -> Option<f32> {
        if index >= self.regions.len() {
            tracing::trace!(index, count = self.regions.len(), "tab change out of range ignored");
            return None;
        }
        if index == self.active {
            return None;
        }
        self.active = index;
        Some(self.active_extent())
    }

    /// Replace region headings by position; regions past the end keep theirs
    pub fn set_headings<I: IntoIterator<Item = String>>(&mut self, headings: I) {
        for (region, heading) in self.regions.iter_mut().zip(headings) {
            region.heading = heading;
        }
    }

    /// Change the spacer height and re-pad every measured region
    pub fn set_auxiliary_height(&mut self, auxiliary_height: f32) {
        self.auxiliary_height = auxiliary_height;
        self.repad();
    }

    /// Change the floor; unmeasured regions move to the new floor
    pub fn set_min_height(&mut self, min_height: f32) {
        self.min_height = min_height;
        self.repad();
    }

    fn repad(&mut self) {
        for region in self.regions.iter_mut() {
            region.padded_height = match region.natural_height {
                Some(h) => h + self.auxiliary_height,
                None => self.min_height,
            };
        }
    }
}
