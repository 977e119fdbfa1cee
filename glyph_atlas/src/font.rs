// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating font data by family name or file.

use std::path::PathBuf;
use std::sync::Arc;

use fontique::{
    Attributes, Blob, Collection, CollectionOptions, GenericFamily, QueryFamily, QueryStatus,
    SourceCache,
};

use crate::AtlasError;

/// Where the atlas font comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// An installed family, resolved through the system font collection.
    Family(String),
    /// A font file on disk.
    File {
        /// Path to a `ttf`, `otf` or collection file.
        path: PathBuf,
        /// Index of the face within a collection file.
        index: u32,
    },
}

impl FontSource {
    /// An installed family.
    pub fn family(name: impl Into<String>) -> Self {
        Self::Family(name.into())
    }

    /// The first face of a font file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            index: 0,
        }
    }

    /// Loads the font data.
    pub fn load(&self) -> Result<ResolvedFont, AtlasError> {
        match self {
            Self::Family(name) => resolve_family(name),
            Self::File { path, index } => {
                let data = std::fs::read(path).map_err(|err| AtlasError::io(path, err))?;
                log::info!("loaded font file {}", path.display());
                Ok(ResolvedFont {
                    name: path.display().to_string(),
                    data: Blob::new(Arc::new(data)),
                    index: *index,
                })
            }
        }
    }
}

/// Font data selected for rendering.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// Family name or file path, for diagnostics.
    pub name: String,
    /// Raw font file data.
    pub data: Blob<u8>,
    /// Index of the face within the data.
    pub index: u32,
}

/// Finds the regular face of an installed family.
///
/// An unknown family falls back to the system's sans-serif family, logged as a
/// warning. Only when no font can be found at all is an error returned.
pub fn resolve_family(family: &str) -> Result<ResolvedFont, AtlasError> {
    let mut collection = Collection::new(CollectionOptions {
        shared: false,
        system_fonts: true,
    });
    let mut source_cache = SourceCache::default();

    if collection.family_id(family).is_none() {
        log::warn!("font family {family:?} not found, falling back to sans-serif");
    }

    let mut found = None;
    {
        let mut query = collection.query(&mut source_cache);
        query.set_families([
            QueryFamily::Named(family),
            QueryFamily::Generic(GenericFamily::SansSerif),
        ]);
        query.set_attributes(Attributes::default());
        query.matches_with(|font| {
            found = Some((font.family.0, font.blob.clone(), font.index));
            QueryStatus::Stop
        });
    }

    let (family_id, data, index) = found.ok_or_else(|| AtlasError::FontNotFound {
        family: family.to_owned(),
    })?;
    let name = collection
        .family_name(family_id)
        .unwrap_or(family)
        .to_owned();
    log::info!("resolved font family {family:?} to {name:?} (face {index})");
    Ok(ResolvedFont { name, data, index })
}
