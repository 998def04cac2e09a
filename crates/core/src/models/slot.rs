/// Where a fetch slot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No request has succeeded yet.
    NotYetFetched,
    /// Holding the result of the most recent successful request.
    Fresh,
    /// Holding an older value because the latest request failed.
    Stale,
}

/// What `FetchSlot::accept` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotUpdate {
    Applied,
    /// The request failed; any previous value is kept.
    KeptPrevious,
    /// A newer request was issued after this one; the outcome was dropped.
    Discarded,
}

/// One piece of display state owned by a single fetcher.
///
/// Each issued request is stamped with a generation number. Outcomes from
/// superseded generations are discarded so a late response cannot
/// overwrite newer data.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    value: Option<T>,
    stale: bool,
    issued: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            value: None,
            stale: false,
            issued: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn status(&self) -> SlotStatus {
        match (&self.value, self.stale) {
            (None, _) => SlotStatus::NotYetFetched,
            (Some(_), false) => SlotStatus::Fresh,
            (Some(_), true) => SlotStatus::Stale,
        }
    }

    /// Generation of the most recently issued request (0 before the first).
    pub fn latest_generation(&self) -> u64 {
        self.issued
    }

    /// Stamp a new request and return its generation.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record the outcome of the request issued under `generation`.
    pub fn accept<E>(&mut self, generation: u64, result: Result<T, E>) -> SlotUpdate {
        if generation < self.issued {
            return SlotUpdate::Discarded;
        }
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.stale = false;
                SlotUpdate::Applied
            }
            Err(_) => {
                self.stale = self.value.is_some();
                SlotUpdate::KeptPrevious
            }
        }
    }
}
