//! Flip and rotate flags packed into the high bits of a Tiled GID

/// Bit 31: flipped horizontally
pub const GID_FLIP_HORIZONTAL: u32 = 1 << 31;
/// Bit 30: flipped vertically
pub const GID_FLIP_VERTICAL: u32 = 1 << 30;
/// Bit 29: rotated (anti-diagonal flip)
pub const GID_ROTATE: u32 = 1 << 29;
/// All flag bits
pub const GID_FLAGS_MASK: u32 = GID_FLIP_HORIZONTAL | GID_FLIP_VERTICAL | GID_ROTATE;

/// A placed object's GID split into its tile identifier and orientation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectGid {
    /// GID with bits 29-31 cleared, ready for tile resolution
    pub gid: u32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub rotate: bool,
}

impl ObjectGid {
    /// Split a packed 32-bit GID
    pub fn decode(raw: u32) -> Self {
        Self {
            gid: raw & !GID_FLAGS_MASK,
            flip_horizontal: raw & GID_FLIP_HORIZONTAL != 0,
            flip_vertical: raw & GID_FLIP_VERTICAL != 0,
            rotate: raw & GID_ROTATE != 0,
        }
    }

    /// Put the flags back; inverse of [`ObjectGid::decode`]
    pub fn pack(&self) -> u32 {
        let mut raw = self.gid & !GID_FLAGS_MASK;
        if self.flip_horizontal {
            raw |= GID_FLIP_HORIZONTAL;
        }
        if self.flip_vertical {
            raw |= GID_FLIP_VERTICAL;
        }
        if self.rotate {
            raw |= GID_ROTATE;
        }
        raw
    }
}
