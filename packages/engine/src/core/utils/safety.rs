//! Cell-plane indexing for the generation hot path.
//!
//! `next_generation` reads nine cells of the current grid per cell and
//! writes one state and one age into the scratch rows. All of those
//! indices come from `Grid::index` and the wrapped row/column offsets, so
//! they are in range by construction. `fast!` keeps the bounds check in
//! debug builds (an out-of-range index still panics in tests) and drops it
//! in release builds.
//!
//! ```rust
//! use lifeglow_engine::fast;
//!
//! let cells = vec![0u8, 1, 0, 1];
//! let live = *fast!(cells, [1]);
//! assert_eq!(live, 1);
//!
//! let mut ages = vec![0u32; 4];
//! fast!(ages, [3] = 7);
//! assert_eq!(ages[3], 7);
//! ```

/// `fast!(plane, [idx])` borrows a cell; `fast!(plane, [idx] = v)` stores one.
/// Callers own the `idx < plane.len()` guarantee.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
