//! Lazy per-cell known/unknown sequence.

use std::iter::FusedIterator;

use typescore_detect::TypeDetector;

/// Iterator yielding [`TypeDetector::is_known_type`] for each cell, in order.
///
/// Created by [`known_types`]. Single pass: it consumes its source.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct KnownTypes<'d, I> {
    detector: &'d TypeDetector,
    cells: I,
}

/// Classify `cells` lazily, one boolean per cell.
pub fn known_types<I>(detector: &TypeDetector, cells: I) -> KnownTypes<'_, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    KnownTypes {
        detector,
        cells: cells.into_iter(),
    }
}

impl<I> Iterator for KnownTypes<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let cell = self.cells.next()?;
        Some(self.detector.is_known_type(cell.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<I> ExactSizeIterator for KnownTypes<'_, I>
where
    I: ExactSizeIterator,
    I::Item: AsRef<str>,
{
}

impl<I> FusedIterator for KnownTypes<'_, I>
where
    I: FusedIterator,
    I::Item: AsRef<str>,
{
}
