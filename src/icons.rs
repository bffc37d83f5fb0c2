// Where the icon source lives, where each size lands, and which sizes to build
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::PathBuf;

const ICONS_DIR: &str = "icons";
const SOURCE_NAME: &str = "icon.svg";

/// Sizes required by browser extension manifests
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Fixed file layout under a project root
#[derive(Clone, Debug)]
pub struct IconLayout {
    root: PathBuf,
}

impl IconLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted next to this tool's own manifest
    pub fn project() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root.join(ICONS_DIR)
    }

    pub fn source_path(&self) -> PathBuf {
        self.icons_dir().join(SOURCE_NAME)
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.icons_dir().join(format!("icon{}.png", size))
    }
}

/// Ordered list of square target sizes; zero never makes it in
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct SizeList(Vec<NonZeroU32>);

impl SizeList {
    /// Builds a list from plain integers, returning `None` if any of them is zero
    pub fn from_pixels(sizes: &[u32]) -> Option<Self> {
        sizes
            .iter()
            .map(|&s| NonZeroU32::new(s))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|s| s.get())
    }
}

impl Default for SizeList {
    fn default() -> Self {
        // DEFAULT_SIZES holds no zeros
        Self::from_pixels(&DEFAULT_SIZES).unwrap_or(Self(Vec::new()))
    }
}
