//! Size probes: "encode at quality Q, report the size".

use std::collections::HashMap;

/// Produces the encoded size, in bytes, of the source at a given quality.
///
/// The search driver only ever talks to this trait, so real encoders and
/// test stubs are interchangeable. Any `FnMut(u8) -> Result<u64, E>` is a
/// probe.
pub trait SizeProbe {
    /// Error raised when an attempt cannot be produced or measured.
    type Error;

    /// Encode at `quality` and return the resulting size in bytes.
    fn measure(&mut self, quality: u8) -> Result<u64, Self::Error>;
}

impl<F, E> SizeProbe for F
where
    F: FnMut(u8) -> Result<u64, E>,
{
    type Error = E;

    fn measure(&mut self, quality: u8) -> Result<u64, E> {
        self(quality)
    }
}

/// Caches sizes per quality so each level is encoded at most once.
///
/// Only wrap probes whose sole effect is the returned size. A file-writing
/// probe would skip the rewrite on a cache hit.
#[derive(Debug)]
pub struct Memoized<P> {
    inner: P,
    sizes: HashMap<u8, u64>,
}

impl<P> Memoized<P> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            sizes: HashMap::new(),
        }
    }

    /// The cached size for `quality`, if it has been measured.
    pub fn cached(&self, quality: u8) -> Option<u64> {
        self.sizes.get(&quality).copied()
    }

    /// Unwrap the inner probe, dropping the cache.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: SizeProbe> SizeProbe for Memoized<P> {
    type Error = P::Error;

    fn measure(&mut self, quality: u8) -> Result<u64, P::Error> {
        if let Some(size) = self.cached(quality) {
            return Ok(size);
        }
        let size = self.inner.measure(quality)?;
        self.sizes.insert(quality, size);
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_closure_is_probe() {
        let mut probe = |quality: u8| Ok::<u64, Infallible>(u64::from(quality) * 100);
        assert_eq!(probe.measure(40), Ok(4000));
    }

    #[test]
    fn test_memoized_calls_inner_once_per_quality() {
        let mut calls = Vec::new();
        let mut probe = Memoized::new(|quality: u8| {
            calls.push(quality);
            Ok::<u64, Infallible>(u64::from(quality))
        });

        assert_eq!(probe.measure(90), Ok(90));
        assert_eq!(probe.measure(90), Ok(90));
        assert_eq!(probe.measure(85), Ok(85));
        assert_eq!(probe.cached(85), Some(85));
        assert_eq!(probe.cached(80), None);

        drop(probe);
        assert_eq!(calls, vec![90, 85]);
    }

    #[test]
    fn test_memoized_does_not_cache_errors() {
        let mut failures = 1;
        let mut probe = Memoized::new(|quality: u8| {
            if failures > 0 {
                failures -= 1;
                Err("disk full")
            } else {
                Ok(u64::from(quality))
            }
        });

        assert_eq!(probe.measure(50), Err("disk full"));
        assert_eq!(probe.cached(50), None);
        assert_eq!(probe.measure(50), Ok(50));
    }
}
