//! Fallible stable sorting.
//!
//! `slice::sort_by` expects an infallible comparator, and newer standard
//! library sorts may panic when a comparator stops behaving like a total
//! order half way through. Comparators here can fail, so sorting runs a
//! stable merge sort over an index permutation that stops at the first error
//! and only touches the caller's slice once every comparison has succeeded.

use crate::comparator::Comparator;
use crate::error::Result;
use std::cmp::Ordering;

/// Runs at or below this length are insertion sorted.
const INSERTION_THRESHOLD: usize = 12;

/// Stable sort of `items` with a comparator that may fail.
///
/// On error `items` is left exactly as it was and the first error is
/// returned. Slices shorter than two elements are never compared.
pub fn try_sort_by<T, F>(items: &mut [T], mut compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Result<Ordering>,
{
    if items.len() < 2 {
        return Ok(());
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    let mut scratch = vec![0usize; items.len()];
    {
        let items = &*items;
        merge_sort(&mut indices, &mut scratch, &mut |a, b| {
            compare(&items[a], &items[b])
        })?;
    }

    reorder_by_indices(items, &indices);
    Ok(())
}

/// Slice extension for sorting with a [`Comparator`].
pub trait TrySortExt<T> {
    /// Stable sort using `comparator`; see [`try_sort_by`].
    fn try_sort_with<C>(&mut self, comparator: &C) -> Result<()>
    where
        C: Comparator<T> + ?Sized;
}

impl<T> TrySortExt<T> for [T] {
    fn try_sort_with<C>(&mut self, comparator: &C) -> Result<()>
    where
        C: Comparator<T> + ?Sized,
    {
        try_sort_by(self, |a, b| comparator.compare(a, b))
    }
}

fn merge_sort<F>(run: &mut [usize], scratch: &mut [usize], compare: &mut F) -> Result<()>
where
    F: FnMut(usize, usize) -> Result<Ordering>,
{
    let len = run.len();
    if len <= INSERTION_THRESHOLD {
        return insertion_sort(run, compare);
    }

    let mid = len / 2;
    {
        let (left, right) = run.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort(left, scratch_left, compare)?;
        merge_sort(right, scratch_right, compare)?;
    }

    // Halves already in order
    if compare(run[mid - 1], run[mid])? != Ordering::Greater {
        return Ok(());
    }

    merge(run, mid, scratch, compare)
}

fn insertion_sort<F>(run: &mut [usize], compare: &mut F) -> Result<()>
where
    F: FnMut(usize, usize) -> Result<Ordering>,
{
    for i in 1..run.len() {
        let mut j = i;
        while j > 0 && compare(run[j - 1], run[j])? == Ordering::Greater {
            run.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}

/// Merge the sorted halves `run[..mid]` and `run[mid..]`.
/// Ties take from the left half, which keeps the sort stable.
fn merge<F>(run: &mut [usize], mid: usize, scratch: &mut [usize], compare: &mut F) -> Result<()>
where
    F: FnMut(usize, usize) -> Result<Ordering>,
{
    let len = run.len();
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < mid && j < len {
        if compare(run[j], run[i])? == Ordering::Less {
            scratch[k] = run[j];
            j += 1;
        } else {
            scratch[k] = run[i];
            i += 1;
        }
        k += 1;
    }

    let left_rest = mid - i;
    scratch[k..k + left_rest].copy_from_slice(&run[i..mid]);
    k += left_rest;
    scratch[k..len].copy_from_slice(&run[j..len]);

    run.copy_from_slice(&scratch[..len]);
    Ok(())
}

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` names the original position of the element that
/// should end up at that position. Cycles of the permutation are walked with
/// swaps, so `T` need not be `Clone`.
pub fn reorder_by_indices<T>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut placed = vec![false; indices.len()];
    for start in 0..indices.len() {
        if placed[start] {
            continue;
        }

        let mut current = start;
        loop {
            placed[current] = true;
            let next = indices[current];
            debug_assert!(next < items.len(), "Index out of bounds");
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}
