//! Ordered record store.

use crate::types::{ImageData, Record, RecordId, ReportError, Result};

/// Owns the ordered sequence of report records.
///
/// Order is significant: the record at position `i` becomes content page
/// `i + 1`, after the title page. Positions are contiguous 0-based indices
/// recomputed after every mutation.
///
/// Every state-changing mutation bumps the revision counter; callers compare
/// it against the revision captured when a binary was generated to decide
/// whether regeneration is required.
#[derive(Debug, Default)]
pub struct ReportStore {
    records: Vec<Record>,
    next_id: u64,
    revision: u64,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonically increasing mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Ordered read-only view for the composer.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a record at the end and return its identity.
    ///
    /// Accepts any well-formed triple, including an empty description;
    /// content validation is the collaborator's job before calling.
    pub fn append(
        &mut self,
        category: impl Into<String>,
        description: impl Into<String>,
        image: ImageData,
    ) -> RecordId {
        let id = self.allocate_id();
        self.records.push(Record {
            id,
            category: category.into(),
            description: description.into(),
            image,
        });
        self.bump();
        id
    }

    /// Append one record per image, in the supplied order, with an empty
    /// description and a shared default category.
    pub fn append_batch(
        &mut self,
        images: impl IntoIterator<Item = ImageData>,
        default_category: &str,
    ) -> Vec<RecordId> {
        let ids: Vec<RecordId> = images
            .into_iter()
            .map(|image| {
                let id = self.allocate_id();
                self.records.push(Record {
                    id,
                    category: default_category.to_string(),
                    description: String::new(),
                    image,
                });
                id
            })
            .collect();
        if !ids.is_empty() {
            self.bump();
        }
        ids
    }

    /// Remove and return the record at `position`. Later records shift down
    /// by one; no gaps remain.
    pub fn delete(&mut self, position: usize) -> Result<Record> {
        if position >= self.records.len() {
            return Err(ReportError::IndexOutOfRange {
                position,
                len: self.records.len(),
            });
        }
        let record = self.records.remove(position);
        self.bump();
        Ok(record)
    }

    pub fn set_category(&mut self, id: RecordId, category: impl Into<String>) -> Result<()> {
        self.record_mut(id)?.category = category.into();
        self.bump();
        Ok(())
    }

    pub fn set_description(&mut self, id: RecordId, description: impl Into<String>) -> Result<()> {
        self.record_mut(id)?.description = description.into();
        self.bump();
        Ok(())
    }

    pub fn set_image(&mut self, id: RecordId, image: ImageData) -> Result<()> {
        self.record_mut(id)?.image = image;
        self.bump();
        Ok(())
    }

    /// Relocate the record at `from` so it ends up at `to`.
    ///
    /// Both positions are clamped into `[0, len - 1]`; a move that resolves
    /// to its own position is a no-op and does not bump the revision. A pure
    /// relocation: identity, field values and count are unchanged. Fails only
    /// when the store is empty.
    pub fn move_record(&mut self, from: usize, to: usize) -> Result<()> {
        if self.records.is_empty() {
            return Err(ReportError::IndexOutOfRange {
                position: from,
                len: 0,
            });
        }
        let last = self.records.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return Ok(());
        }
        let record = self.records.remove(from);
        self.records.insert(to, record);
        self.bump();
        Ok(())
    }

    pub fn move_up(&mut self, position: usize) -> Result<()> {
        self.move_record(position, position.saturating_sub(1))
    }

    pub fn move_down(&mut self, position: usize) -> Result<()> {
        self.move_record(position, position + 1)
    }

    pub fn move_to_top(&mut self, position: usize) -> Result<()> {
        self.move_record(position, 0)
    }

    pub fn move_to_bottom(&mut self, position: usize) -> Result<()> {
        let last = self.records.len().saturating_sub(1);
        self.move_record(position, last)
    }

    fn record_mut(&mut self, id: RecordId) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReportError::UnknownId(id))
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
