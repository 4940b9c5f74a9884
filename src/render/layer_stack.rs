use serde::{Deserialize, Serialize};

/// Drawing layers of one chart scene, bottom to top.
///
/// Backends must paint layers in [`SceneLayerKind::CANONICAL`] order so the
/// tooltip always ends up above bars, axes and legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayerKind {
    Axis,
    Series,
    Legend,
    Annotation,
    Tooltip,
}

impl SceneLayerKind {
    pub const CANONICAL: [SceneLayerKind; 5] = [
        Self::Axis,
        Self::Series,
        Self::Legend,
        Self::Annotation,
        Self::Tooltip,
    ];

    /// Position in the canonical stack.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Axis => 0,
            Self::Series => 1,
            Self::Legend => 2,
            Self::Annotation => 3,
            Self::Tooltip => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Series => "series",
            Self::Legend => "legend",
            Self::Annotation => "annotation",
            Self::Tooltip => "tooltip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SceneLayerKind;

    #[test]
    fn canonical_order_matches_layer_indices() {
        for (position, kind) in SceneLayerKind::CANONICAL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
        assert_eq!(
            SceneLayerKind::CANONICAL.last().copied(),
            Some(SceneLayerKind::Tooltip)
        );
    }
}
