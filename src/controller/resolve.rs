use crate::query::{self, QueryOptions};
use crate::shape::{SupportMap, Translate};

/// Bounds of the resolution loop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct ResolutionOptions {
    /// Maximum number of passes over the static shapes.
    pub max_rounds: usize,
    /// Options of every collision query run by the loop.
    pub query: QueryOptions,
}

impl ResolutionOptions {
    /// The default number of resolution rounds.
    pub const DEFAULT_MAX_ROUNDS: usize = 32;
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            query: QueryOptions::default(),
        }
    }
}

/// Summary of a [`resolve`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The number of rounds that were run.
    pub rounds: usize,
    /// The total number of corrections applied to the moving shape.
    pub corrections: usize,
    /// `true` if the last round found no collision.
    pub settled: bool,
}

/// Pushes `moving` out of every shape of `statics`.
///
/// Each round queries every static shape in order and translates `moving` by the correction of
/// each collision as soon as it is found, so later queries of the same round already see the
/// corrected position. Rounds repeat until one finds no collision, or `options.max_rounds` is
/// reached.
pub fn resolve<M, S>(moving: &mut M, statics: &[S], options: &ResolutionOptions) -> Resolution
where
    M: ?Sized + SupportMap + Translate,
    S: SupportMap,
{
    let mut result = Resolution::default();

    for _ in 0..options.max_rounds {
        result.rounds += 1;
        let mut hits = 0;

        for shape in statics {
            let collision = query::is_collision_with_options(&*moving, shape, &options.query);

            if collision.collided {
                hits += 1;
                moving.translate_by(&collision.correction());
            }
        }

        result.corrections += hits;

        if hits == 0 {
            result.settled = true;
            break;
        }
    }

    if !result.settled {
        log::debug!(
            "Collision resolution still overlapping after {} rounds.",
            result.rounds
        );
    }

    result
}

/// Tests whether `probe` overlaps any shape of `statics`, using the default [`QueryOptions`].
pub fn probe_ground<P, S>(probe: &P, statics: &[S]) -> bool
where
    P: ?Sized + SupportMap,
    S: SupportMap,
{
    probe_ground_with_options(probe, statics, &QueryOptions::default())
}

/// Tests whether `probe` overlaps any shape of `statics`.
///
/// Nothing is moved: only the intersection test is run.
pub fn probe_ground_with_options<P, S>(probe: &P, statics: &[S], options: &QueryOptions) -> bool
where
    P: ?Sized + SupportMap,
    S: SupportMap,
{
    statics
        .iter()
        .any(|shape| query::intersection_test(probe, shape, options))
}
