//! Panel categories
//!
//! The discriminant order is the on-disk category index, so variants must
//! never be reordered.

/// Kind of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelCategory {
    RenderView,
    Hierarchy,
    Assets,
    ObjectProperties,
    SceneView,
    Console,
    Statistics,
    Custom,
}

impl PanelCategory {
    /// All categories in persisted index order
    pub const ALL: [PanelCategory; 8] = [
        PanelCategory::RenderView,
        PanelCategory::Hierarchy,
        PanelCategory::Assets,
        PanelCategory::ObjectProperties,
        PanelCategory::SceneView,
        PanelCategory::Console,
        PanelCategory::Statistics,
        PanelCategory::Custom,
    ];

    /// Index written to layout files
    pub fn index(self) -> i32 {
        match self {
            PanelCategory::RenderView => 0,
            PanelCategory::Hierarchy => 1,
            PanelCategory::Assets => 2,
            PanelCategory::ObjectProperties => 3,
            PanelCategory::SceneView => 4,
            PanelCategory::Console => 5,
            PanelCategory::Statistics => 6,
            PanelCategory::Custom => 7,
        }
    }

    /// Inverse of `index`; `None` for anything outside the enumeration
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PanelCategory::RenderView => "Render View",
            PanelCategory::Hierarchy => "Hierarchy",
            PanelCategory::Assets => "Assets",
            PanelCategory::ObjectProperties => "Properties",
            PanelCategory::SceneView => "Scene View",
            PanelCategory::Console => "Console",
            PanelCategory::Statistics => "Statistics",
            PanelCategory::Custom => "Custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_for_every_category() {
        for (i, category) in PanelCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i as i32);
            assert_eq!(PanelCategory::from_index(i as i32), Some(*category));
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(PanelCategory::from_index(-1), None);
        assert_eq!(PanelCategory::from_index(8), None);
        assert_eq!(PanelCategory::from_index(i32::MAX), None);
    }
}
