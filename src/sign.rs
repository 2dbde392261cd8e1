//! Relative orientation of a boundary element with respect to the atom it bounds.

/// `+1` if a boundary element (edge of a cell, face of a simplex) is traversed
/// along the orientation of its atom, `-1` if against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
  #[default]
  Pos = 1,
  Neg = -1,
}

impl Sign {
  /// Orientation of the face obtained by dropping the node at position `i`
  /// of a sorted simplex: `(-1)^i`.
  pub fn from_parity(i: usize) -> Self {
    if i % 2 == 0 {
      Self::Pos
    } else {
      Self::Neg
    }
  }

  /// `Pos` for an edge found as stored, `Neg` for an edge found reversed.
  pub fn from_traversal(along: bool) -> Self {
    if along {
      Self::Pos
    } else {
      Self::Neg
    }
  }

  pub fn reversed(self) -> Self {
    match self {
      Self::Pos => Self::Neg,
      Self::Neg => Self::Pos,
    }
  }

  pub fn as_i32(self) -> i32 {
    self as i32
  }
  pub fn is_pos(self) -> bool {
    matches!(self, Self::Pos)
  }
  pub fn is_neg(self) -> bool {
    matches!(self, Self::Neg)
  }
}

impl std::ops::Neg for Sign {
  type Output = Self;
  fn neg(self) -> Self {
    self.reversed()
  }
}

/// Orientations compose: reversing twice restores the orientation.
impl std::ops::Mul for Sign {
  type Output = Self;
  fn mul(self, rhs: Self) -> Self {
    match rhs {
      Self::Pos => self,
      Self::Neg => self.reversed(),
    }
  }
}

impl From<Sign> for i32 {
  fn from(sign: Sign) -> Self {
    sign.as_i32()
  }
}

impl std::fmt::Display for Sign {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Pos => "+",
      Self::Neg => "-",
    })
  }
}

#[cfg(test)]
mod test {
  use super::Sign;

  #[test]
  fn boundary_faces_alternate() {
    let signs: Vec<_> = (0..4).map(Sign::from_parity).collect();
    assert_eq!(signs, [Sign::Pos, Sign::Neg, Sign::Pos, Sign::Neg]);
  }

  #[test]
  fn traversal() {
    assert_eq!(Sign::from_traversal(true), Sign::Pos);
    assert_eq!(Sign::from_traversal(false).as_i32(), -1);
  }

  #[test]
  fn composition() {
    assert_eq!(-Sign::Pos, Sign::Neg);
    assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
    assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
    assert_eq!(i32::from(Sign::Pos), 1);
    assert_eq!(format!("{}{}", Sign::Pos, Sign::Neg), "+-");
  }
}
