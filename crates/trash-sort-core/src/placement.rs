use crate::category::{BinCategory, TrashCategory};
use crate::item::BinSite;
use crate::picking::xz;
use glam::Vec2;
use std::cmp::Ordering;

/// Result of dropping an item somewhere on the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Dropped into the bin its category belongs in.
    Correct { bin: usize, category: BinCategory },
    /// Dropped into some other bin.
    Incorrect { bin: usize, category: BinCategory },
    /// Not close enough to any bin; the item just stays where it was let go.
    Missed,
}

impl Placement {
    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, Placement::Correct { .. })
    }

    #[inline]
    pub fn is_incorrect(&self) -> bool {
        matches!(self, Placement::Incorrect { .. })
    }

    /// The bin the item landed in, if any.
    pub fn bin_index(&self) -> Option<usize> {
        match *self {
            Placement::Correct { bin, .. } | Placement::Incorrect { bin, .. } => Some(bin),
            Placement::Missed => None,
        }
    }
}

/// Index and ground distance of the bin closest to `drop_xz`. Height is
/// ignored; on a tie the earlier bin wins. Non-finite distances never match.
pub fn nearest_bin<B: BinSite>(bins: &[B], drop_xz: Vec2) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, bin) in bins.iter().enumerate() {
        let d = drop_xz.distance(xz(bin.position()));
        if !d.is_finite() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

pub fn resolve<B: BinSite>(
    category: TrashCategory,
    drop_xz: Vec2,
    bins: &[B],
    radius: f32,
) -> Placement {
    let Some((index, distance)) = nearest_bin(bins, drop_xz) else {
        return Placement::Missed;
    };
    // NaN on either side counts as out of reach
    if distance.partial_cmp(&radius) != Some(Ordering::Less) {
        return Placement::Missed;
    }
    let landed = bins[index].category();
    if landed == category.correct_bin() {
        Placement::Correct {
            bin: index,
            category: landed,
        }
    } else {
        Placement::Incorrect {
            bin: index,
            category: landed,
        }
    }
}
