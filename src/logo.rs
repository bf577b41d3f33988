use anyhow::{bail, Context};
use image::{ImageFormat, Rgb, Rgba, RgbaImage};
use std::fs;
use std::path::PathBuf;

use crate::utils::args::Args;
use crate::utils::background::{detect_background, is_background, TRANSPARENT};

pub struct Logo {
    pub input: PathBuf,
    pub output: PathBuf,
    pub image: RgbaImage,
}

/// What a background pass did to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub top_left: Rgba<u8>,
    pub background: Rgb<u8>,
    pub cleared: u64,
    pub total: u64,
}

impl Logo {
    pub fn from_args(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            image: RgbaImage::new(0, 0),
        }
    }

    pub fn load(&mut self) -> anyhow::Result<()> {
        let image = image::open(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?
            .to_rgba8();

        if image.width() == 0 || image.height() == 0 {
            bail!("{} has no pixels", self.input.display());
        }

        log::debug!(
            "Loaded {} ({}x{})",
            self.input.display(),
            image.width(),
            image.height()
        );

        self.image = image;

        Ok(())
    }

    pub fn top_left(&self) -> anyhow::Result<Rgba<u8>> {
        self.image
            .get_pixel_checked(0, 0)
            .copied()
            .context("Image is empty, load it first")
    }

    /// Clear every pixel close to the sampled background.
    pub fn remove_background(&mut self) -> anyhow::Result<Removal> {
        let top_left = self.top_left()?;
        let background = detect_background(top_left);

        let mut cleared = 0;

        for pixel in self.image.pixels_mut() {
            if is_background(*pixel, background) {
                *pixel = TRANSPARENT;
                cleared += 1;
            }
        }

        let total = self.image.width() as u64 * self.image.height() as u64;

        log::debug!("Cleared {} of {} pixels", cleared, total);

        Ok(Removal {
            top_left,
            background,
            cleared,
            total,
        })
    }

    /// Always written as PNG, whatever the extension says.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        self.image
            .save_with_format(&self.output, ImageFormat::Png)
            .with_context(|| format!("Failed to save {}", self.output.display()))
    }
}
