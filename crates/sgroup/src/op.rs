//! A single symmetry operation: integer rotation part plus a fractional
//! translation stored in twelfths of a cell edge, the finest subdivision
//! needed by any standard setting.

use std::{fmt::Display, str::FromStr};

use crate::{Mat3, SgError};

/// translations are integer multiples of 1/STBF
pub const STBF: i32 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymOp {
    /// row-major 3x3 rotation part acting on fractional coordinates
    pub r: [i32; 9],
    /// translation part, each component in [0, STBF)
    pub t: [i32; 3],
}

const IDENTITY_R: [i32; 9] = [1, 0, 0, 0, 1, 0, 0, 0, 1];

impl SymOp {
    pub fn identity() -> Self {
        Self {
            r: IDENTITY_R,
            t: [0; 3],
        }
    }

    /// the product `self . other`, applying `other` first
    pub fn compose(&self, other: &Self) -> Self {
        let mut r = [0; 9];
        let mut t = [0; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut s = 0;
                for k in 0..3 {
                    s += self.r[3 * i + k] * other.r[3 * k + j];
                }
                r[3 * i + j] = s;
            }
            let mut s = self.t[i];
            for k in 0..3 {
                s += self.r[3 * i + k] * other.t[k];
            }
            t[i] = s.rem_euclid(STBF);
        }
        Self { r, t }
    }

    /// true when the rotation part is the identity, i.e. the operation is a
    /// pure (lattice or centering) translation
    pub fn is_translation(&self) -> bool {
        self.r == IDENTITY_R
    }

    pub fn det(&self) -> i32 {
        let r = &self.r;
        r[0] * (r[4] * r[8] - r[5] * r[7]) - r[1] * (r[3] * r[8] - r[5] * r[6])
            + r[2] * (r[3] * r[7] - r[4] * r[6])
    }

    pub fn trace(&self) -> i32 {
        self.r[0] + self.r[4] + self.r[8]
    }

    /// crystallographic rotation type: 1, 2, 3, 4, 6 for proper rotations,
    /// negated for rotoinversions (-1 inversion, -2 reflection, ...)
    pub fn rot_type(&self) -> i8 {
        match (self.det(), self.trace()) {
            (1, 3) => 1,
            (1, -1) => 2,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 6,
            (-1, -3) => -1,
            (-1, 1) => -2,
            (-1, 0) => -3,
            (-1, -1) => -4,
            (-1, -2) => -6,
            _ => panic!("non-crystallographic rotation part in {self}"),
        }
    }

    /// order of the rotation part as a matrix
    pub fn order(&self) -> usize {
        match self.rot_type() {
            1 => 1,
            2 | -1 | -2 => 2,
            3 => 3,
            4 | -4 => 4,
            6 | -3 | -6 => 6,
            _ => unreachable!(),
        }
    }

    /// rotation part as a real matrix, for acting on direction vectors
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_row_slice(&self.r.map(f64::from))
    }
}

fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

fn parse_component(s: &str) -> Option<([i32; 3], i32)> {
    let mut row = [0; 3];
    let mut t = 0;
    let mut sign = 1;
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            ' ' => {}
            '+' => sign = 1,
            '-' => sign = -1,
            'x' | 'X' => {
                row[0] += sign;
                sign = 1;
            }
            'y' | 'Y' => {
                row[1] += sign;
                sign = 1;
            }
            'z' | 'Z' => {
                row[2] += sign;
                sign = 1;
            }
            c if c.is_ascii_digit() => {
                let mut num = 0;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    num = 10 * num + chars[i].to_digit(10)? as i32;
                    i += 1;
                }
                if i >= chars.len() || chars[i] != '/' {
                    return None;
                }
                i += 1;
                let mut den = 0;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    den = 10 * den + chars[i].to_digit(10)? as i32;
                    i += 1;
                }
                if den == 0 || (STBF * num) % den != 0 {
                    return None;
                }
                t += sign * STBF * num / den;
                sign = 1;
                continue;
            }
            _ => return None,
        }
        i += 1;
    }
    Some((row, t))
}

impl FromStr for SymOp {
    type Err = SgError;

    /// parse a coordinate triplet like `-y,x-y,z+1/3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(SgError::BadTriplet(s.to_owned()));
        }
        let mut r = [0; 9];
        let mut t = [0; 3];
        for (i, part) in parts.iter().enumerate() {
            let (row, tr) = parse_component(part)
                .ok_or_else(|| SgError::BadTriplet(s.to_owned()))?;
            r[3 * i..3 * i + 3].copy_from_slice(&row);
            t[i] = tr.rem_euclid(STBF);
        }
        Ok(Self { r, t })
    }
}

impl Display for SymOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vars = ["x", "y", "z"];
        let mut comps = Vec::with_capacity(3);
        for i in 0..3 {
            let mut s = String::new();
            for (j, var) in vars.iter().enumerate() {
                match self.r[3 * i + j] {
                    0 => {}
                    1 => {
                        if !s.is_empty() {
                            s.push('+');
                        }
                        s.push_str(var);
                    }
                    -1 => {
                        s.push('-');
                        s.push_str(var);
                    }
                    c => {
                        if c > 0 && !s.is_empty() {
                            s.push('+');
                        }
                        s.push_str(&format!("{c}{var}"));
                    }
                }
            }
            if self.t[i] != 0 {
                let g = gcd(self.t[i], STBF);
                s.push_str(&format!("+{}/{}", self.t[i] / g, STBF / g));
            }
            if s.is_empty() {
                s.push('0');
            }
            comps.push(s);
        }
        write!(f, "{}", comps.join(","))
    }
}
