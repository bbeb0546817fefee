//! Debug mask for the filesystem driver's diagnostic output.
//!
//! Messages go through the `log` facade at debug level, and only for the
//! subsystems enabled in the mask.

use core::{cell, ops};

use const_default::ConstDefault;
use critical_section as cs;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugMask(pub u32);

impl DebugMask {
    pub const NONE: Self = Self(0);
    pub const BALLOC: Self = Self(1 << 0);
    pub const BCACHE: Self = Self(1 << 1);
    pub const BITMAP: Self = Self(1 << 2);
    pub const BLOCK_GROUP: Self = Self(1 << 3);
    pub const BLOCKDEV: Self = Self(1 << 4);
    pub const DIR_IDX: Self = Self(1 << 5);
    pub const DIR: Self = Self(1 << 6);
    pub const EXTENT: Self = Self(1 << 7);
    pub const FS: Self = Self(1 << 8);
    pub const HASH: Self = Self(1 << 9);
    pub const IALLOC: Self = Self(1 << 10);
    pub const INODE: Self = Self(1 << 11);
    pub const SUPER: Self = Self(1 << 12);
    pub const XATTR: Self = Self(1 << 13);
    pub const MKFS: Self = Self(1 << 14);
    pub const EXT4: Self = Self(1 << 15);
    pub const JBD: Self = Self(1 << 16);
    pub const MBR: Self = Self(1 << 17);
    /// Suppresses the subsystem prefix.
    pub const NOPREFIX: Self = Self(1 << 31);
    pub const ALL: Self = Self(0xFFFF_FFFF);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Prefix for the lowest subsystem bit set in `self`.
    pub const fn name(self) -> &'static str {
        let low = self.0 & !Self::NOPREFIX.0;
        if low == 0 {
            return "";
        }
        match low.trailing_zeros() {
            0 => "ext4_balloc",
            1 => "ext4_bcache",
            2 => "ext4_bitmap",
            3 => "ext4_block_group",
            4 => "ext4_blockdev",
            5 => "ext4_dir_idx",
            6 => "ext4_dir",
            7 => "ext4_extent",
            8 => "ext4_fs",
            9 => "ext4_hash",
            10 => "ext4_ialloc",
            11 => "ext4_inode",
            12 => "ext4_super",
            13 => "ext4_xattr",
            14 => "ext4_mkfs",
            15 => "ext4",
            16 => "ext4_journal",
            17 => "ext4_mbr",
            _ => "",
        }
    }
}

impl ConstDefault for DebugMask {
    const DEFAULT: Self = Self::NONE;
}

impl ops::BitOr for DebugMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for DebugMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for DebugMask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl ops::Not for DebugMask {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSettings {
    pub mask: DebugMask,
    pub prefix: bool,
}

impl ConstDefault for DebugSettings {
    const DEFAULT: Self = Self {
        mask: DebugMask::DEFAULT,
        prefix: true,
    };
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static GLOBAL_SETTINGS: cs::Mutex<cell::Cell<DebugSettings>> =
    cs::Mutex::new(cell::Cell::new(DebugSettings::DEFAULT));

#[inline]
fn update(f: impl FnOnce(&mut DebugSettings)) {
    super::with_cs(|cs| {
        let cell = GLOBAL_SETTINGS.borrow(cs);
        let mut settings = cell.get();
        f(&mut settings);
        cell.set(settings);
    })
}

#[inline]
pub fn settings() -> DebugSettings {
    super::with_cs(|cs| GLOBAL_SETTINGS.borrow(cs).get())
}

/// Enables the subsystems in `m`.
pub fn dmask_set(m: DebugMask) {
    update(|s| s.mask |= m);
}

/// Disables the subsystems in `m`.
pub fn dmask_clr(m: DebugMask) {
    update(|s| s.mask = s.mask & !m);
}

#[inline]
pub fn dmask_get() -> DebugMask {
    settings().mask
}

pub fn set_prefix(enabled: bool) {
    update(|s| s.prefix = enabled);
}

pub fn reset() {
    update(|s| *s = DebugSettings::DEFAULT);
}

/// Returns the prefix to print if a message for `m` should be emitted.
#[doc(hidden)]
pub fn enabled(m: DebugMask) -> Option<&'static str> {
    let settings = settings();
    if !settings.mask.intersects(m & !DebugMask::NOPREFIX) {
        return None;
    }
    if !settings.prefix || m.intersects(DebugMask::NOPREFIX) {
        Some("")
    } else {
        Some(m.name())
    }
}

/// Logs at debug level when a subsystem of `$mask` is enabled.
///
/// ```ignore
/// fs_dbg!(DebugMask::INODE, "inode {} freed", ino);
/// ```
#[macro_export]
macro_rules! fs_dbg {
    ($mask:expr, $($arg:tt)+) => {
        if let Some(prefix) = $crate::sys::debug::enabled($mask) {
            if prefix.is_empty() {
                $crate::log::debug!($($arg)+);
            } else {
                $crate::log::debug!("{}: {}", prefix, format_args!($($arg)+));
            }
        }
    };
}
