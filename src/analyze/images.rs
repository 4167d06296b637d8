//! Embedded image counting and deduplication.

use std::collections::BTreeSet;

const VECTOR_EXTENSIONS: &[&str] = &["svg", "svgz", "emf", "wmf"];
const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

/// Distinct image targets of one document and their logical count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageInventory {
    targets: BTreeSet<String>,
}

/// Split `media/image12.png` into (`12`, `png`).
fn numbered_image(target: &str) -> Option<(u32, String)> {
    let (stem, ext) = file_name(target).rsplit_once('.')?;
    let digits = stem.strip_prefix("image")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number = digits.parse().ok()?;
    Some((number, ext.to_ascii_lowercase()))
}

fn file_name(target: &str) -> &str {
    target.rsplit(['/', '\\']).next().unwrap_or(target)
}

impl ImageInventory {
    /// Build an inventory from relationship targets. Repeated targets
    /// collapse; equal file names in different directories stay distinct.
    pub fn from_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = targets
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !file_name(t).is_empty())
            .collect();
        Self { targets }
    }

    /// Number of distinct image files.
    pub fn total(&self) -> usize {
        self.targets.len()
    }

    /// Vector renders that duplicate the preceding raster image.
    pub fn duplicates(&self) -> Vec<&str> {
        let rasters: BTreeSet<u32> = self
            .targets
            .iter()
            .filter_map(|t| numbered_image(t))
            .filter(|(_, ext)| RASTER_EXTENSIONS.contains(&ext.as_str()))
            .map(|(number, _)| number)
            .collect();

        self.targets
            .iter()
            .filter(|t| {
                numbered_image(t).is_some_and(|(number, ext)| {
                    VECTOR_EXTENSIONS.contains(&ext.as_str())
                        && number
                            .checked_sub(1)
                            .is_some_and(|previous| rasters.contains(&previous))
                })
            })
            .map(String::as_str)
            .collect()
    }

    /// Number of logically unique images.
    pub fn unique(&self) -> usize {
        self.total() - self.duplicates().len()
    }
}

/// Count logically unique images among relationship targets.
pub fn unique_image_count<I, S>(targets: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ImageInventory::from_targets(targets).unique()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_vector_dropped() {
        assert_eq!(unique_image_count(["image1.png", "image2.svg"]), 1);
    }

    #[test]
    fn test_non_adjacent_kept() {
        assert_eq!(unique_image_count(["image1.png", "image3.svg"]), 2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(unique_image_count(Vec::<String>::new()), 0);
    }

    #[test]
    fn test_paths_and_duplicates() {
        let inventory = ImageInventory::from_targets([
            "media/image1.png",
            "media/image1.png",
            "media/image2.svg",
            "media/image3.jpeg",
        ]);
        assert_eq!(inventory.total(), 3);
        assert_eq!(inventory.duplicates(), vec!["media/image2.svg"]);
        assert_eq!(inventory.unique(), 2);
    }

    #[test]
    fn test_vector_after_vector_kept() {
        assert_eq!(unique_image_count(["image1.emf", "image2.svg"]), 2);
    }

    #[test]
    fn test_other_names_count_individually() {
        assert_eq!(unique_image_count(["logo.png", "chart.svg", "image0.svg"]), 3);
    }

    #[test]
    fn test_same_name_in_different_folders() {
        let inventory = ImageInventory::from_targets(["media/image1.png", "embeddings/image1.png"]);
        assert_eq!(inventory.total(), 2);
        assert_eq!(unique_image_count(["media/image1.png", "embeddings/image2.svg"]), 1);
    }

    #[test]
    fn test_number_must_be_plain_digits() {
        assert_eq!(unique_image_count(["image1.png", "image+2.svg"]), 2);
        assert_eq!(unique_image_count(["image.png", "image1.svg"]), 2);
        assert_eq!(unique_image_count(["image 1.png", "image2.svg"]), 2);
    }

    #[test]
    fn test_extension_case() {
        assert_eq!(unique_image_count(["image4.PNG", "image5.SVG"]), 1);
    }
}
