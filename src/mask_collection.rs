use crate::grapheme::grapheme_len;
use crate::ConfigurationError;

/// The list of masks, shortest first.
///
/// The matcher takes the first mask that accepts the complete value,
/// so the order decides between masks that fit equally well.
/// Masks of the same length keep the order they were given in.
#[derive(Debug, Clone)]
pub struct MaskCollection {
    masks: Vec<Box<str>>,
}

impl MaskCollection {
    /// Sort and store the masks.
    ///
    /// Fails if there are no masks.
    pub fn build<I, S>(masks: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut masks = masks
            .into_iter()
            .map(|v| Box::from(v.as_ref()))
            .collect::<Vec<Box<str>>>();
        if masks.is_empty() {
            return Err(ConfigurationError::NoMasks);
        }
        masks.sort_by_key(|v| grapheme_len(v));

        Ok(Self { masks })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Never true, but clippy likes it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.masks.get(idx).map(|v| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.masks.iter().map(|v| v.as_ref())
    }
}
