//! Depth bucket definitions

/// Depth class of an earthquake, in legend order (shallow to deep)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ColorBucket {
    Shallow,
    Light,
    Medium,
    LightDeep,
    VeryLight,
    DeepBlue,
}

/// Upper depth bound (km, exclusive) for every bucket except the last
const THRESHOLDS: [(f64, ColorBucket); 5] = [
    (10.0, ColorBucket::Shallow),
    (30.0, ColorBucket::Light),
    (50.0, ColorBucket::Medium),
    (70.0, ColorBucket::LightDeep),
    (90.0, ColorBucket::VeryLight),
];

/// Classify a depth in km. Total over all inputs: anything that fails every
/// threshold comparison (including NaN) is `DeepBlue`.
pub(crate) fn classify(depth: f64) -> ColorBucket {
    THRESHOLDS
        .iter()
        .find(|(upper, _)| depth < *upper)
        .map(|&(_, bucket)| bucket)
        .unwrap_or(ColorBucket::DeepBlue)
}

impl ColorBucket {
    pub(crate) const ALL: [ColorBucket; 6] = [
        ColorBucket::Shallow,
        ColorBucket::Light,
        ColorBucket::Medium,
        ColorBucket::LightDeep,
        ColorBucket::VeryLight,
        ColorBucket::DeepBlue,
    ];

    /// CSS color name used for marker fill and legend swatch
    pub(crate) fn color(self) -> &'static str {
        match self {
            ColorBucket::Shallow => "yellow",
            ColorBucket::Light => "lightcoral",
            ColorBucket::Medium => "darkorange",
            ColorBucket::LightDeep => "lightcoral",
            ColorBucket::VeryLight => "lightblue",
            ColorBucket::DeepBlue => "darkblue",
        }
    }

    /// RGB of `color()`, for terminal swatches
    pub(crate) fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorBucket::Shallow => (255, 255, 0),
            ColorBucket::Light | ColorBucket::LightDeep => (240, 128, 128),
            ColorBucket::Medium => (255, 140, 0),
            ColorBucket::VeryLight => (173, 216, 230),
            ColorBucket::DeepBlue => (0, 0, 139),
        }
    }

    /// Legend label (depth range in km)
    pub(crate) fn label(self) -> &'static str {
        match self {
            ColorBucket::Shallow => "-10 to 10",
            ColorBucket::Light => "10 to 30",
            ColorBucket::Medium => "30 to 50",
            ColorBucket::LightDeep => "50 to 70",
            ColorBucket::VeryLight => "70 to 90",
            ColorBucket::DeepBlue => "90+",
        }
    }

    /// Position in `ALL`
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
