//! ZIP archive walking
//!
//! [`ArchiveWalker`] lists a ZIP container once and then hands out entries one
//! at a time in the container's storage order. Only entries accepted by the
//! walker's filter are decompressed; everything else is reported as skipped
//! by name. The walk is finite and cannot be restarted.

use shared_types::{ArchiveEntry, ArchiveError, DocumentFormat, SkipReason};
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// Default ceiling on the decompressed size of a single entry (50 MiB).
pub const DEFAULT_MAX_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Upper bound on the buffer reserved from an entry's declared size.
const PREALLOCATE_LIMIT: u64 = 1024 * 1024;

/// One step of an archive walk.
#[derive(Debug)]
pub enum WalkItem {
    Entry(ArchiveEntry),
    Skipped { name: String, reason: SkipReason },
}

pub struct ArchiveWalker<R: Read + Seek> {
    archive: ZipArchive<R>,
    next_index: usize,
    max_entry_bytes: u64,
    accept: fn(&str) -> bool,
}

impl<'a> ArchiveWalker<Cursor<&'a [u8]>> {
    /// Open an in-memory archive.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ArchiveError> {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> ArchiveWalker<R> {
    /// Parse the central directory. A container that cannot be listed is
    /// reported as [`ArchiveError::Corrupt`].
    pub fn new(reader: R) -> Result<Self, ArchiveError> {
        let archive = ZipArchive::new(reader).map_err(|e| ArchiveError::Corrupt(e.to_string()))?;

        Ok(Self {
            archive,
            next_index: 0,
            max_entry_bytes: DEFAULT_MAX_ENTRY_BYTES,
            accept: |_| true,
        })
    }

    pub fn with_max_entry_bytes(mut self, max_entry_bytes: u64) -> Self {
        self.max_entry_bytes = max_entry_bytes;
        self
    }

    /// Only decompress entries whose name passes `accept`; the rest are
    /// yielded as [`WalkItem::Skipped`] with [`SkipReason::UnsupportedFormat`].
    pub fn with_filter(mut self, accept: fn(&str) -> bool) -> Self {
        self.accept = accept;
        self
    }

    /// Walker that only reads PDF, DOCX and DOC entries.
    pub fn documents_only(self) -> Self {
        self.with_filter(|name| DocumentFormat::from_name(name).is_supported())
    }

    /// Number of entries listed in the central directory, directories included.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    fn read_entry(&mut self, index: usize) -> Result<WalkItem, ArchiveError> {
        let name = match self.archive.name_for_index(index) {
            Some(name) => name.to_string(),
            None => format!("#{index}"),
        };

        if name.ends_with('/') {
            return Ok(WalkItem::Skipped {
                name,
                reason: SkipReason::Directory,
            });
        }

        if !(self.accept)(&name) {
            return Ok(WalkItem::Skipped {
                name,
                reason: SkipReason::UnsupportedFormat,
            });
        }

        let limit = self.max_entry_bytes;
        let file = self.archive.by_index(index).map_err(|e| ArchiveError::EntryRead {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        if file.is_dir() {
            return Ok(WalkItem::Skipped {
                name,
                reason: SkipReason::Directory,
            });
        }

        if file.size() > limit {
            return Err(ArchiveError::EntryTooLarge {
                name,
                size: file.size(),
                limit,
            });
        }

        // The declared size can lie, so cap the actual read as well.
        let mut bytes = Vec::with_capacity(file.size().min(PREALLOCATE_LIMIT) as usize);
        file.take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| ArchiveError::EntryRead {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        if bytes.len() as u64 > limit {
            return Err(ArchiveError::EntryTooLarge {
                name,
                size: bytes.len() as u64,
                limit,
            });
        }

        Ok(WalkItem::Entry(ArchiveEntry { name, bytes }))
    }
}

impl<R: Read + Seek> Iterator for ArchiveWalker<R> {
    type Item = Result<WalkItem, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.archive.len() {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        Some(self.read_entry(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.archive.len().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}
