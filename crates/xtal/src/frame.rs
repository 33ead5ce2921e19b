//! Precognition per-frame geometry (`.inp`) files.
//!
//! The format is a block of `Key value...` lines between `Input` and
//! `Quit`. `Crystal`, `Matrix`, and `Omega` drive the orientation math;
//! the detector fields are carried through verbatim so a file can be
//! rewritten after editing.

use std::{fmt::Write as _, fs, io::ErrorKind, path::Path};

use crate::{cell::UnitCell, rotation::rotation_about, Mat3, Vec3, XtalError};

#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    pub cell: UnitCell,
    /// space-group label from the `Crystal` line, kept as written
    pub spacegroup: String,
    /// row-major missetting matrix from the `Matrix` line
    matrix: [f64; 9],
    /// the two omega angles in degrees
    omega: [f64; 2],
    /// goniometer angles in degrees; only the third enters the rotation
    goniometer: Option<[f64; 3]>,
    format: Option<String>,
    distance: Option<String>,
    center: Option<String>,
    pixel: Option<String>,
    swing: Option<String>,
    tilt: Option<String>,
    bulge: Option<String>,
    image: Option<String>,
    resolution: Option<String>,
    wavelength: Option<String>,
}

fn floats<const N: usize>(key: &str, vals: &[&str]) -> Result<[f64; N], XtalError> {
    if vals.len() != N {
        return Err(XtalError::BadFormat(format!(
            "{key} takes {N} values, got {}",
            vals.len()
        )));
    }
    let mut out = [0.0; N];
    for (o, v) in out.iter_mut().zip(vals) {
        *o = v.parse().map_err(|_| {
            XtalError::BadFormat(format!("bad number `{v}` in {key}"))
        })?;
    }
    Ok(out)
}

impl FrameGeometry {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, XtalError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => XtalError::FileNotFound(path.to_owned()),
            _ => XtalError::Io(e.to_string()),
        })?;
        Self::parse(&text).map_err(|e| e.at(path))
    }

    pub fn parse(text: &str) -> Result<Self, XtalError> {
        let lines: Vec<&str> = text.lines().collect();
        match (lines.first(), lines.last()) {
            (Some(f), Some(l))
                if lines.len() >= 2
                    && f.contains("Input")
                    && l.contains("Quit") => {}
            _ => {
                return Err(XtalError::BadFormat(
                    "expected an Input ... Quit block".to_owned(),
                ))
            }
        }

        let mut cell = None;
        let mut spacegroup = None;
        let mut matrix = None;
        let mut omega = None;
        let mut goniometer = None;
        let mut passthrough: [Option<String>; 10] = Default::default();
        const KEYS: [&str; 10] = [
            "Format",
            "Distance",
            "Center",
            "Pixel",
            "Swing",
            "Tilt",
            "Bulge",
            "Image",
            "Resolution",
            "Wavelength",
        ];

        for line in &lines[1..lines.len() - 1] {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some((&key, vals)) = fields.split_first() else {
                continue;
            };
            match key {
                "Crystal" => {
                    let Some((&sym, nums)) = vals.split_last() else {
                        return Err(XtalError::BadFormat(
                            "empty Crystal line".to_owned(),
                        ));
                    };
                    let [a, b, c, alpha, beta, gamma] = floats("Crystal", nums)?;
                    cell = Some(UnitCell::new(a, b, c, alpha, beta, gamma));
                    spacegroup = Some(sym.to_owned());
                }
                "Matrix" => matrix = Some(floats("Matrix", vals)?),
                "Omega" => omega = Some(floats("Omega", vals)?),
                "Goniometer" => goniometer = Some(floats("Goniometer", vals)?),
                _ => match KEYS.iter().position(|k| *k == key) {
                    Some(i) => passthrough[i] = Some(vals.join(" ")),
                    None => {
                        return Err(XtalError::UnknownField(key.to_owned()))
                    }
                },
            }
        }

        let missing =
            |field: &str| XtalError::MissingField(field.to_owned());
        let [format, distance, center, pixel, swing, tilt, bulge, image, resolution, wavelength] =
            passthrough;
        Ok(Self {
            cell: cell.ok_or_else(|| missing("Crystal"))?,
            spacegroup: spacegroup.ok_or_else(|| missing("Crystal"))?,
            matrix: matrix.ok_or_else(|| missing("Matrix"))?,
            omega: omega.ok_or_else(|| missing("Omega"))?,
            goniometer,
            format,
            distance,
            center,
            pixel,
            swing,
            tilt,
            bulge,
            image,
            resolution,
            wavelength,
        })
    }

    /// emit the same `Input ... Quit` block this geometry was read from,
    /// skipping absent optional fields
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), XtalError> {
        let mut out = String::from("Input\n");
        let _ = writeln!(
            out,
            "   Crystal    {} {}",
            self.cell, self.spacegroup
        );
        let nums =
            |v: &[f64]| v.iter().map(f64::to_string).collect::<Vec<_>>().join(" ");
        let _ = writeln!(out, "   Matrix     {}", nums(&self.matrix));
        let _ = writeln!(out, "   Omega      {}", nums(&self.omega));
        if let Some(g) = &self.goniometer {
            let _ = writeln!(out, "   Goniometer {}", nums(g));
        }
        for (key, val) in [
            ("Format    ", &self.format),
            ("Distance  ", &self.distance),
            ("Center    ", &self.center),
            ("Pixel     ", &self.pixel),
            ("Swing     ", &self.swing),
            ("Tilt      ", &self.tilt),
            ("Bulge     ", &self.bulge),
            ("Image     ", &self.image),
            ("Resolution", &self.resolution),
            ("Wavelength", &self.wavelength),
        ] {
            if let Some(v) = val {
                let _ = writeln!(out, "   {key} {v}");
            }
        }
        out.push_str("   Quit\n");
        fs::write(path, out).map_err(|e| XtalError::Io(e.to_string()))
    }

    pub fn missetting_matrix(&self) -> Mat3 {
        Mat3::from_row_slice(&self.matrix)
    }

    /// Rotation applied by the goniometer: about -z by omega 1, about y by
    /// omega 2, then about the image of y under those two by the third
    /// goniometer angle.
    pub fn goniometer_rotation(&self) -> Result<Mat3, XtalError> {
        let gonio = self.goniometer.ok_or_else(|| {
            XtalError::MissingField("Goniometer".to_owned())
        })?;
        let o1 = self.omega[0].to_radians();
        let o2 = self.omega[1].to_radians();
        let phi = gonio[2].to_radians();
        let r = rotation_about(Vec3::new(0.0, 0.0, -1.0), o1);
        let r = rotation_about(Vec3::new(0.0, 1.0, 0.0), o2) * r;
        Ok(rotation_about(r * Vec3::new(0.0, 1.0, 0.0), phi) * r)
    }

    /// Reciprocal orientation matrix A* in the Mosflm frame:
    /// A* = P R M O^-T with P the fixed Precognition-to-Mosflm basis
    /// permutation.
    pub fn reciprocal_a_matrix(&self) -> Result<Mat3, XtalError> {
        let o = self.cell.orthogonalization()?;
        let o_inv_t = o.transpose().try_inverse().ok_or_else(|| {
            XtalError::DegenerateCell(self.cell.to_string())
        })?;
        let perm = Mat3::new(
            0.0, 0.0, 1.0, //
            0.0, -1.0, 0.0, //
            1.0, 0.0, 0.0,
        );
        Ok(perm * self.goniometer_rotation()? * self.missetting_matrix() * o_inv_t)
    }

    /// rows of the inverse of A* are the real-space cell vectors
    pub fn real_space_a_matrix(&self) -> Result<Mat3, XtalError> {
        self.reciprocal_a_matrix()?.try_inverse().ok_or_else(|| {
            XtalError::DegenerateCell(self.cell.to_string())
        })
    }
}
