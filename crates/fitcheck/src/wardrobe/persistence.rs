//! Persistence for wardrobes - save/load JSON files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::error::{FitCheckError, Result};

use super::model::Wardrobe;

impl Wardrobe {
    /// Save the wardrobe to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fitcheck::wardrobe::Wardrobe;
    /// # fn example(wardrobe: &Wardrobe) -> fitcheck::Result<()> {
    /// wardrobe.save("wardrobe.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FitCheckError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            FitCheckError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            FitCheckError::Persistence(format!("Failed to serialize wardrobe: {}", e))
        })?;

        log::debug!("saved {} garment(s) to {}", self.garments.len(), path.display());
        Ok(())
    }

    /// Load and validate a wardrobe from a JSON file.
    ///
    /// Version and shape errors come back as
    /// [`FitCheckError::UnsupportedVersion`] or
    /// [`FitCheckError::InvalidWardrobe`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fitcheck::wardrobe::Wardrobe;
    /// let wardrobe = Wardrobe::load("wardrobe.json").unwrap();
    /// println!("Garments: {}", wardrobe.garments.len());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| {
            FitCheckError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let wardrobe = match Self::from_json(&text) {
            Ok(w) => w,
            Err(FitCheckError::Json(e)) => {
                return Err(FitCheckError::Persistence(format!(
                    "Failed to parse wardrobe '{}': {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => return Err(e),
        };

        log::debug!("loaded {} garment(s) from {}", wardrobe.garments.len(), path.display());
        Ok(wardrobe)
    }
}
