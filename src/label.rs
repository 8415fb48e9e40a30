use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// File-name prefix of slum tiles
pub const SLUM_PREFIX: &str = "vya_";

/// Binary tile class, the discriminant is the label index
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SlumClass {
    NonSlum = 0,
    Slum = 1,
}

/// Class list, position is the label index
pub const SLUM_CLASSES: [SlumClass; 2] = [SlumClass::NonSlum, SlumClass::Slum];

impl SlumClass {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NonSlum => "non-slum",
            Self::Slum => "slum",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        SLUM_CLASSES.get(index).copied()
    }

    /// Label a tile by its file name: `vya_*` tiles are slums, everything else is not
    pub fn from_path(path: &Path) -> Self {
        match path.file_name() {
            Some(name) if name.as_encoded_bytes().starts_with(SLUM_PREFIX.as_bytes()) => {
                Self::Slum
            }
            _ => Self::NonSlum,
        }
    }
}

impl FromStr for SlumClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SLUM_CLASSES
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| format!("unknown class {s:?}"))
    }
}

impl fmt::Display for SlumClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_file_name() {
        assert_eq!(
            SlumClass::from_path(Path::new("/data/bs_as/vya_0001.tif")),
            SlumClass::Slum
        );
        assert_eq!(
            SlumClass::from_path(Path::new("/data/cordoba_capital/other_0002.tiff")),
            SlumClass::NonSlum
        );
    }

    #[test]
    fn only_file_name_is_inspected() {
        assert_eq!(
            SlumClass::from_path(Path::new("/vya_dir/tile_0003.tif")),
            SlumClass::NonSlum
        );
        assert_eq!(
            SlumClass::from_path(Path::new("VYA_0004.tif")),
            SlumClass::NonSlum
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let slum = Path::new(OsStr::from_bytes(b"/d/bs_as/vya_\xff01.tif"));
        assert_eq!(SlumClass::from_path(slum), SlumClass::Slum);
        let other = Path::new(OsStr::from_bytes(b"/d/bs_as/\xffvya_01.tif"));
        assert_eq!(SlumClass::from_path(other), SlumClass::NonSlum);
    }

    #[test]
    fn class_index_bijection() {
        for (i, class) in SLUM_CLASSES.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(SlumClass::from_index(i), Some(*class));
            assert_eq!(class.name().parse::<SlumClass>(), Ok(*class));
        }
        assert_eq!(SlumClass::from_index(2), None);
    }
}
