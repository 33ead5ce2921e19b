//! Loading per-frame orientations from a list of input files.

use std::path::{Path, PathBuf};

use log::info;

use crate::{expt::ExptList, frame::FrameGeometry, Mat3, XtalError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Inp,
    Expt,
}

fn kind_of(path: &Path) -> Result<Kind, XtalError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("inp") => Ok(Kind::Inp),
        Some("expt") => Ok(Kind::Expt),
        _ => Err(XtalError::UnsupportedExtension(path.to_owned())),
    }
}

/// All frames of one run: a reciprocal orientation matrix per frame and
/// the orthogonalization matrix of the cell shared across them.
///
/// The cell is taken from the first input; the sources are assumed to
/// describe one crystal form.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    frames: Vec<(String, Mat3)>,
    ortho: Mat3,
}

impl Dataset {
    pub fn load(paths: &[PathBuf]) -> Result<Self, XtalError> {
        let mut kind = None;
        let mut frames = Vec::new();
        let mut ortho = None;
        for path in paths {
            let k = kind_of(path)?;
            match kind {
                None => kind = Some(k),
                Some(k0) if k0 != k => return Err(XtalError::MixedSources),
                Some(_) => {}
            }
            match k {
                Kind::Inp => {
                    let geom = FrameGeometry::load(path)?;
                    if ortho.is_none() {
                        ortho = Some(
                            geom.cell
                                .orthogonalization()
                                .map_err(|e| e.at(path))?,
                        );
                    }
                    frames.push((
                        path.display().to_string(),
                        geom.reciprocal_a_matrix().map_err(|e| e.at(path))?,
                    ));
                }
                Kind::Expt => {
                    let elist = ExptList::load(path)?;
                    if ortho.is_none() {
                        ortho = Some(
                            elist.orthogonalization().map_err(|e| e.at(path))?,
                        );
                    }
                    let astars = elist
                        .reciprocal_a_matrices()
                        .map_err(|e| e.at(path))?;
                    for (i, astar) in astars.into_iter().enumerate() {
                        frames.push((
                            format!("{}[{i}]", path.display()),
                            astar,
                        ));
                    }
                }
            }
        }
        let Some(ortho) = ortho else {
            return Err(XtalError::NoInputs);
        };
        info!("loaded {} frames from {} files", frames.len(), paths.len());
        Ok(Self { frames, ortho })
    }

    /// `(source label, A*)` per frame; labels are the input path, with a
    /// crystal index appended for experiment lists
    pub fn frames(&self) -> &[(String, Mat3)] {
        &self.frames
    }

    pub fn orthogonalization(&self) -> Mat3 {
        self.ortho
    }
}
