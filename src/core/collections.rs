//! Collection aliases tuned for mesh topology bookkeeping.
//!
//! All internal keys are small `Copy` values (slotmap keys and pairs of them),
//! so the non-cryptographic `rustc-hash` hasher is a safe speedup, and the
//! incidence lists that dominate traversal are short enough to live on the
//! stack via `smallvec`.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Hash map used for internal, trusted-key mappings.
///
/// Uses `FxHasher`, which is markedly faster than the default SipHash for the
/// small integer-like keys used throughout the mesh core. Not DoS-resistant;
/// never used with externally controlled keys.
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Hash set counterpart of [`FastHashMap`].
pub type FastHashSet<T> = FxHashSet<T>;

/// Inline-capacity vector for small collections.
///
/// Size guidance for this crate:
/// - `N = 2`: faces incident to an edge (exactly 2 on a closed manifold)
/// - `N = 8`: edges or faces incident to a vertex (degree 3-6 on every
///   polyhedron the operators produce; 8 leaves headroom without spilling)
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;
